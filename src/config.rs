//! Process configuration, read once at startup and passed into handlers.

use thiserror::Error;

/// Default base URL for the completion upstream (Groq's OpenAI-compatible API).
pub const DEFAULT_COMPLETION_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default base URL for the image-generation upstream.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://api.openai.com/v1";

/// Model used for recipe generation.
pub const COMPLETION_MODEL: &str = "llama-3.3-70b-versatile";

/// Model used for step-image generation.
pub const IMAGE_MODEL: &str = "dall-e-2";

/// Image size requested from the image upstream.
pub const IMAGE_SIZE: &str = "512x512";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 7860;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GROQ_API_KEY is not set. Make sure it's in your .env file.")]
    MissingCompletionKey,

    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Immutable application configuration.
///
/// The completion credential is mandatory: the process refuses to start
/// without it. The image credential is optional at startup and only checked
/// when `/generate-image` is invoked, so the recipe endpoint keeps working
/// on deployments that never configure image generation.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bearer credential for the completion upstream (`GROQ_API_KEY`).
    pub completion_api_key: String,
    /// Base URL of the completion upstream (`GROQ_BASE_URL`).
    pub completion_base_url: String,
    /// Model identifier sent with every completion request.
    pub completion_model: String,
    /// Bearer credential for the image upstream (`OPENAI_API_KEY`), if set.
    pub image_api_key: Option<String>,
    /// Base URL of the image upstream (`OPENAI_BASE_URL`).
    pub image_base_url: String,
    /// Model identifier sent with every image request.
    pub image_model: String,
    /// Square size requested for generated images.
    pub image_size: String,
    /// Listen port (`PORT`).
    pub port: u16,
}

impl AppConfig {
    /// Build the configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let completion_api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingCompletionKey)?;

        let completion_base_url = env_or("GROQ_BASE_URL", DEFAULT_COMPLETION_BASE_URL);
        let image_base_url = env_or("OPENAI_BASE_URL", DEFAULT_IMAGE_BASE_URL);

        let image_api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            completion_api_key,
            completion_base_url,
            completion_model: COMPLETION_MODEL.to_string(),
            image_api_key,
            image_base_url,
            image_model: IMAGE_MODEL.to_string(),
            image_size: IMAGE_SIZE.to_string(),
            port,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
