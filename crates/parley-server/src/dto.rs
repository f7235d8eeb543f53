//! Data transfer objects for HTTP message serialization.

use parley_core::{Completion, TokenUsage};
use serde::{Deserialize, Serialize};

/// Request body for the chat endpoint.
///
/// `message` is optional at the wire level so that a missing key and an
/// empty string are rejected the same way.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Successful chat reply.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub usage: TokenUsage,
}

impl From<Completion> for ChatResponse {
    fn from(completion: Completion) -> Self {
        Self {
            response: completion.content,
            usage: completion.usage,
        }
    }
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Liveness payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
