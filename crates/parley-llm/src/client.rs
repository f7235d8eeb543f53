//! OpenAI-compatible chat completion client.
//!
//! Works with the OpenAI API and any endpoint that speaks the same
//! `/chat/completions` protocol.

use std::time::Instant;

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
    },
    Client,
};
use async_trait::async_trait;
use parley_core::{Completion, CompletionRequest, Message, MessageRole, ProviderError, TokenUsage};
use tracing::info;

use crate::provider::CompletionProvider;

/// Converts a request-building error into a ProviderError::InvalidRequest.
fn request_err(e: impl ToString) -> ProviderError {
    ProviderError::InvalidRequest(e.to_string())
}

/// Maps one domain message onto the OpenAI request message shape.
fn to_openai_message(msg: &Message) -> Result<ChatCompletionRequestMessage, ProviderError> {
    let message = match msg.role {
        MessageRole::System => ChatCompletionRequestMessage::System(
            ChatCompletionRequestSystemMessageArgs::default()
                .content(msg.content.as_str())
                .build()
                .map_err(request_err)?,
        ),
        MessageRole::User => ChatCompletionRequestMessage::User(
            ChatCompletionRequestUserMessageArgs::default()
                .content(msg.content.as_str())
                .build()
                .map_err(request_err)?,
        ),
    };
    Ok(message)
}

/// Builds the wire request for a completion.
#[allow(deprecated)]
fn build_request(request: &CompletionRequest) -> Result<CreateChatCompletionRequest, ProviderError> {
    let messages = request
        .messages
        .iter()
        .map(to_openai_message)
        .collect::<Result<Vec<_>, _>>()?;

    CreateChatCompletionRequestArgs::default()
        .model(&request.model)
        .messages(messages)
        .max_tokens(request.max_tokens)
        .build()
        .map_err(request_err)
}

/// Extracts the reply text and usage counters from a completion response.
///
/// A choice without text content (a refusal or tool call) is an error, not a null reply.
fn extract_completion(response: CreateChatCompletionResponse) -> Result<Completion, ProviderError> {
    let usage = response
        .usage
        .map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        })
        .ok_or(ProviderError::MissingUsage)?;

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(ProviderError::EmptyResponse)?;

    Ok(Completion { content, usage })
}

/// Client for OpenAI-compatible chat completion APIs.
///
/// Holds one HTTP connection pool; build it once and share it.
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
}

impl OpenAiClient {
    /// Creates a new client with the given API key and optional API base URL.
    pub fn new(api_key: &str, api_base: Option<&str>) -> Self {
        let config = match api_base {
            Some(base) => OpenAIConfig::new().with_api_base(base).with_api_key(api_key),
            None => OpenAIConfig::new().with_api_key(api_key),
        };

        Self {
            client: Client::with_config(config),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, ProviderError> {
        let start = Instant::now();
        let wire_request = build_request(request)?;

        let response = self
            .client
            .chat()
            .create(wire_request)
            .await
            .map_err(|e| ProviderError::Api(e.to_string()))?;

        let completion = extract_completion(response)?;
        info!(
            "LLM ({}): {}ms, tokens: {}/{} (in/out)",
            request.model,
            start.elapsed().as_millis(),
            completion.usage.prompt_tokens,
            completion.usage.completion_tokens
        );

        Ok(completion)
    }
}
