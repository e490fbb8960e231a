pub mod openrouter;

use async_trait::async_trait;

use crate::{error::completion_error::CompletionError, message::llm::ChatMessage};

pub use openrouter::OpenRouterClient;

/// Text-completion capability: `(model, messages) -> text`.
///
/// Implementations must return [`CompletionError::EmptyResponse`] rather than
/// an empty string when the service yields no content.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, CompletionError>;
}
