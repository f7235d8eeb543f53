//! Completion provider abstraction and the OpenAI-backed implementation.
//!
//! - [`CompletionProvider`] — The seam the server talks to; swap it out in tests
//! - [`OpenAiClient`] — OpenAI Chat Completions client (also works with any
//!   compatible endpoint via `api_base`)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use parley_core::CompletionRequest;
//! use parley_llm::{CompletionProvider, OpenAiClient};
//!
//! let client = OpenAiClient::new("sk-...", None);
//! let request = CompletionRequest::single_turn(
//!     "gpt-4o-mini",
//!     "You are a helpful assistant.",
//!     "Hello!",
//!     150,
//! );
//! let completion = client.complete(&request).await?;
//! println!("{} ({} tokens)", completion.content, completion.usage.total_tokens);
//! ```

mod client;
mod provider;

pub use client::OpenAiClient;
pub use parley_core::{Completion, CompletionRequest, ProviderError, TokenUsage};
pub use provider::CompletionProvider;
