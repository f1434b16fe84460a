use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::models::completion::GenerateRecipeRequest;
use crate::models::image::GenerateImageRequest;
use crate::prompt::{render_recipe_prompt, split_ingredients};
use crate::upstream::{request_completion, request_step_image};
use crate::util::{cors_layer_from_env, to_pretty_json, AppState};

/// Build the axum router with `/`, `/generate` and `/generate-image`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/generate", post(generate_recipe))
        .route("/generate-image", post(generate_image))
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer_from_env())
}

/// Plain-text greeting; doubles as a liveness probe.
async fn home() -> &'static str {
    "Hello World"
}

/// Generate a recipe from a comma-separated ingredient string.
///
/// Pipeline: validate -> split -> render prompt -> call completion upstream
/// -> parse as JSON -> re-emit with key order preserved and 4-space indent.
async fn generate_recipe(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRecipeRequest>,
) -> Result<Response, ApiError> {
    let raw = req
        .ingredients
        .as_ref()
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            ApiError::validation(
                "Invalid input. Please provide a comma-separated string of ingredients.",
            )
        })?;

    // Literal split-and-trim; empty segments are kept.
    let ingredients = split_ingredients(raw);
    tracing::info!(?ingredients, "received ingredients");

    let prompt = render_recipe_prompt(&ingredients);
    let output = request_completion(&state, &prompt).await?;
    tracing::debug!(raw = %output, "generated recipe (raw)");

    let recipe: serde_json::Value = match serde_json::from_str(&output) {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("completion upstream did not return valid JSON");
            return Err(ApiError::InvalidModelJson);
        }
    };

    let body =
        to_pretty_json(&recipe).map_err(|e| ApiError::RecipeGeneration(anyhow::Error::new(e)))?;

    Ok((
        [(http::header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// Generate an illustrative image for a single cooking step and relay the
/// upstream JSON verbatim.
async fn generate_image(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateImageRequest>,
) -> Result<Response, ApiError> {
    let title = req
        .title
        .as_ref()
        .and_then(|v| v.as_str())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::validation("No step title provided"))?;

    // The credential is checked per request so the recipe endpoint keeps
    // working on deployments without image generation configured.
    let api_key = state
        .config
        .image_api_key
        .clone()
        .ok_or(ApiError::MissingImageKey)?;

    let body = request_step_image(&state, &api_key, title).await?;
    Ok(Json(body).into_response())
}
