//! Core domain types and error definitions for parley.
//!
//! This crate provides the types shared between the provider client and the
//! HTTP server:
//!
//! - [`ProviderError`] — Error type for completion provider calls
//! - [`Message`] and [`MessageRole`] — Conversation message types
//! - [`CompletionRequest`] — What gets sent to the provider
//! - [`Completion`] and [`TokenUsage`] — What comes back
//!
//! # Example
//!
//! ```rust
//! use parley_core::{CompletionRequest, MessageRole};
//!
//! let request = CompletionRequest::single_turn(
//!     "gpt-4o-mini",
//!     "You are a helpful assistant.",
//!     "Hello!",
//!     150,
//! );
//!
//! assert_eq!(request.messages.len(), 2);
//! assert_eq!(request.messages[0].role, MessageRole::System);
//! assert_eq!(request.messages[1].content, "Hello!");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while calling a completion provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Transport or provider-side failure, carried verbatim.
    #[error("{0}")]
    Api(String),

    /// The request could not be assembled for the provider.
    #[error("Invalid completion request: {0}")]
    InvalidRequest(String),

    /// The provider answered without any text content.
    #[error("No response content")]
    EmptyResponse,

    /// The provider answered without a usage block.
    #[error("No token usage in provider response")]
    MissingUsage,
}

/// Role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Instruction that frames the assistant's behavior.
    System,
    /// Message from the user.
    User,
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub content: String,
}

impl Message {
    /// Creates a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: MessageRole::System, content: content.into() }
    }

    /// Creates a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: MessageRole::User, content: content.into() }
    }
}

/// A request for a single chat completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Provider model identifier (e.g., "gpt-4o-mini").
    pub model: String,
    /// Conversation sent to the provider, in order.
    pub messages: Vec<Message>,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Builds a request with one system instruction followed by one user turn.
    pub fn single_turn(
        model: impl Into<String>,
        system_prompt: impl Into<String>,
        user_input: impl Into<String>,
        max_tokens: u32,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message::system(system_prompt), Message::user(user_input)],
            max_tokens,
        }
    }
}

/// Provider-reported token counts for one completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Complete response from a provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Generated reply text.
    pub content: String,
    /// Token counts as reported by the provider.
    pub usage: TokenUsage,
}
