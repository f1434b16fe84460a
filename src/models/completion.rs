use serde::{Deserialize, Serialize};

/// Body of `POST /generate`.
///
/// `ingredients` is kept as a raw `serde_json::Value` so that a missing field
/// and a present-but-non-string field both reach the handler's own validation
/// (which answers with the documented 400) instead of being rejected by the
/// extractor with a framework-shaped error.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRecipeRequest {
    #[serde(default)]
    pub ingredients: Option<serde_json::Value>,
}

/// Chat Completions role enumeration.
///
/// Uses lowercase serialization to match the OpenAI-compatible API:
/// "system" | "user" | "assistant"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single chat message. The recipe pipeline only ever sends one user-role
/// message carrying the rendered prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionMessage {
    pub role: Role,
    pub content: String,
}

impl CompletionMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Chat Completions request (the subset this service sends).
///
/// Sampling parameters are deliberately absent: the upstream provider's
/// defaults apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<CompletionMessage>,
}

/// Message inside a completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// A single completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    pub message: ChoiceMessage,
}

/// Chat Completions response (the subset this service reads: the first
/// choice's message content).
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}
