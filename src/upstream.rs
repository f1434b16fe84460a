//! Outbound calls to the completion and image-generation upstreams.
//!
//! Each handler makes exactly one of these calls and waits for it; there is
//! no retrying and no parallelism within a request.

use std::time::Duration;

use anyhow::anyhow;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::completion::{CompletionMessage, CompletionRequest, CompletionResponse};
use crate::models::image::ImageGenerationRequest;
use crate::prompt::render_step_image_prompt;
use crate::util::AppState;

/// Bounded wait for the image-generation call.
const IMAGE_TIMEOUT: Duration = Duration::from_secs(60);

/// Send the rendered prompt to the completion upstream as a single user-role
/// message and return the first choice's message content, trimmed.
///
/// Every failure on this path (transport, non-success status, malformed or
/// empty envelope) collapses into `ApiError::RecipeGeneration`: the caller
/// reports the fixed message while the detail goes to the log.
pub async fn request_completion(state: &AppState, prompt: &str) -> Result<String, ApiError> {
    let request = CompletionRequest {
        model: state.config.completion_model.clone(),
        messages: vec![CompletionMessage::user(prompt)],
    };

    let url = format!("{}/chat/completions", state.config.completion_base_url);
    let response = state
        .http
        .post(&url)
        .bearer_auth(&state.config.completion_api_key)
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            ApiError::RecipeGeneration(anyhow::Error::new(e).context("completion request failed"))
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::RecipeGeneration(anyhow!(
            "completion upstream returned {status}: {body}"
        )));
    }

    let completion: CompletionResponse = response.json().await.map_err(|e| {
        ApiError::RecipeGeneration(anyhow::Error::new(e).context("completion envelope decode failed"))
    })?;

    let content = completion
        .choices
        .first()
        .and_then(|choice| choice.message.content.as_deref())
        .ok_or_else(|| {
            ApiError::RecipeGeneration(anyhow!("completion response contained no choices"))
        })?;

    Ok(content.trim().to_string())
}

/// Call the image-generation upstream for the given step title and return its
/// decoded JSON body.
///
/// A non-success upstream status is relayed for diagnosis (status code plus
/// raw body); transport failures and undecodable bodies surface with the
/// error's string form.
pub async fn request_step_image(
    state: &AppState,
    api_key: &str,
    title: &str,
) -> Result<Value, ApiError> {
    let payload = ImageGenerationRequest {
        model: state.config.image_model.clone(),
        prompt: render_step_image_prompt(title),
        n: 1,
        size: state.config.image_size.clone(),
    };

    let url = format!("{}/images/generations", state.config.image_base_url);
    let response = state
        .http
        .post(&url)
        .bearer_auth(api_key)
        .timeout(IMAGE_TIMEOUT)
        .json(&payload)
        .send()
        .await
        .map_err(|e| ApiError::ImageTransport(e.to_string()))?;

    let status = response.status();
    tracing::debug!(%status, "image generation response");

    if !status.is_success() {
        let details = response.text().await.unwrap_or_default();
        return Err(ApiError::ImageUpstreamStatus {
            status: status.as_u16(),
            details,
        });
    }

    let body: Value = response
        .json()
        .await
        .map_err(|e| ApiError::ImageTransport(e.to_string()))?;
    tracing::debug!(body = %body, "image generation body");

    Ok(body)
}
