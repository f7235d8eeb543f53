//! Chat execution service - validation and the provider round trip.

use parley_core::{CompletionRequest, ProviderError};
use parley_llm::CompletionProvider;

use crate::dto::{ChatRequest, ChatResponse};
use crate::error::AppError;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const CHAT_MODEL: &str = "gpt-4o-mini";
pub const MAX_OUTPUT_TOKENS: u32 = 150;

/// Error text for a missing, empty or unreadable chat body.
pub const NO_MESSAGE: &str = "No message provided";

/// Characters of the user message written to the request log.
pub const LOG_PREVIEW_CHARS: usize = 50;

/// Returns the user message, rejecting a missing or empty one.
pub fn validate(req: &ChatRequest) -> Result<&str, AppError> {
    match req.message.as_deref() {
        Some(message) if !message.is_empty() => Ok(message),
        _ => Err(AppError::BadRequest(NO_MESSAGE.into())),
    }
}

/// Returns at most `max_chars` leading characters of `message`.
pub fn preview(message: &str, max_chars: usize) -> &str {
    message
        .char_indices()
        .nth(max_chars)
        .map_or(message, |(i, _)| &message[..i])
}

/// Builds the fixed single-turn request for a user message.
pub fn build_request(message: &str) -> CompletionRequest {
    CompletionRequest::single_turn(CHAT_MODEL, SYSTEM_PROMPT, message, MAX_OUTPUT_TOKENS)
}

/// Sends one message to the provider and shapes the reply.
pub async fn complete(
    provider: &dyn CompletionProvider,
    message: &str,
) -> Result<ChatResponse, ProviderError> {
    let request = build_request(message);
    let completion = provider.complete(&request).await?;
    Ok(ChatResponse::from(completion))
}

#[cfg(test)]
mod tests {
    use parley_core::Message;

    use super::*;

    fn request(message: Option<&str>) -> ChatRequest {
        ChatRequest { message: message.map(String::from) }
    }

    #[test]
    fn test_validate_rejects_missing_and_empty() {
        assert!(matches!(validate(&request(None)), Err(AppError::BadRequest(m)) if m == NO_MESSAGE));
        assert!(matches!(validate(&request(Some(""))), Err(AppError::BadRequest(m)) if m == NO_MESSAGE));
    }

    #[test]
    fn test_validate_keeps_whitespace_message() {
        assert_eq!(validate(&request(Some("  "))).unwrap(), "  ");
    }

    #[test]
    fn test_build_request_uses_fixed_settings() {
        let req = build_request("What is Rust?");

        assert_eq!(req.model, "gpt-4o-mini");
        assert_eq!(req.max_tokens, 150);
        assert_eq!(
            req.messages,
            vec![
                Message::system("You are a helpful assistant."),
                Message::user("What is Rust?"),
            ]
        );
    }

    #[test]
    fn test_preview_keeps_short_message_whole() {
        assert_eq!(preview("hello", LOG_PREVIEW_CHARS), "hello");
        assert_eq!(preview("", LOG_PREVIEW_CHARS), "");
    }

    #[test]
    fn test_preview_cuts_on_char_boundary() {
        let message = "é".repeat(60);
        let cut = preview(&message, LOG_PREVIEW_CHARS);

        assert_eq!(cut.chars().count(), 50);
        assert_eq!(cut, "é".repeat(50));
    }
}
