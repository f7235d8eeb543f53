//! The completion provider trait.

use async_trait::async_trait;
use parley_core::{Completion, CompletionRequest, ProviderError};

/// A service that turns a conversation into generated text plus token usage.
///
/// Implementations are shared across request handlers, so they must be
/// `Send + Sync` and must not require `&mut self`.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Runs one completion and waits for the full reply.
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, ProviderError>;
}

#[async_trait]
impl<P: CompletionProvider + ?Sized> CompletionProvider for std::sync::Arc<P> {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, ProviderError> {
        (**self).complete(request).await
    }
}
