//! Error taxonomy for the HTTP surface.
//!
//! Every failure a handler can hit is converted into one of these variants at
//! the handler boundary; nothing propagates to the caller as an unhandled
//! fault. Each variant carries exactly the HTTP status and body shape the API
//! contract documents.

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller-supplied input missing or of the wrong shape.
    #[error("{0}")]
    Validation(String),

    /// The image upstream credential is not configured on the server.
    #[error("OpenAI API key not found on server")]
    MissingImageKey,

    /// The completion upstream returned output that is not valid JSON.
    #[error("Invalid JSON format received from AI")]
    InvalidModelJson,

    /// The image upstream answered with a non-success status. The upstream
    /// status and raw body are relayed verbatim for diagnosis.
    #[error("OpenAI API returned an error")]
    ImageUpstreamStatus { status: u16, details: String },

    /// Any failure while producing a recipe: transport error, upstream
    /// rejection, or a malformed completion envelope. The detail is logged
    /// server-side only; the caller gets a fixed message.
    #[error("An error occurred while generating the recipe")]
    RecipeGeneration(anyhow::Error),

    /// Transport-level failure while calling the image upstream. The error's
    /// string form is relayed to the caller.
    #[error("{0}")]
    ImageTransport(String),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::MissingImageKey
            | Self::InvalidModelJson
            | Self::ImageUpstreamStatus { .. }
            | Self::RecipeGeneration(_)
            | Self::ImageTransport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::RecipeGeneration(source) = &self {
            tracing::error!(error = ?source, "recipe generation failed");
        }

        let status = self.status();
        let body = match &self {
            Self::ImageUpstreamStatus {
                status: upstream_status,
                details,
            } => serde_json::json!({
                "error": self.to_string(),
                "status_code": upstream_status,
                "details": details,
            }),
            _ => serde_json::json!({ "error": self.to_string() }),
        };

        (status, axum::Json(body)).into_response()
    }
}
