//! Data models for the two endpoints and their upstream APIs.
//!
//! This module groups two submodules:
//! - `completion`: inbound recipe request plus a minimal subset of the OpenAI-compatible Chat Completions models.
//! - `image`: inbound step-image request plus the image-generation payload.
//!
//! All models are transient, per-request values; nothing here outlives the
//! handling of a single request.

pub mod completion;
pub mod image;

// Optional convenience re-exports for downstream users.
pub use completion::{
    CompletionChoice, CompletionMessage, CompletionRequest, CompletionResponse,
    GenerateRecipeRequest, Role,
};
pub use image::{GenerateImageRequest, ImageGenerationRequest};
