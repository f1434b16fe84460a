use serde::{Deserialize, Serialize};

/// Body of `POST /generate-image`.
///
/// Like the recipe request, `title` stays a raw value so shape violations get
/// the documented validation response rather than an extractor rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateImageRequest {
    #[serde(default)]
    pub title: Option<serde_json::Value>,
}

/// Payload sent to the image-generation upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    pub model: String,
    pub prompt: String,
    pub n: u32,
    pub size: String,
}
