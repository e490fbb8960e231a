use tracing::{error, info};

use crate::{error::completion_error::CompletionError, llm::CompletionClient, message::llm::ChatMessage};

pub const DEFAULT_CHECK_MODEL: &str = "openai/gpt-3.5-turbo";

/// Sends a single greeting and returns the model's reply.
pub async fn check_connection<C>(client: &C, model: &str) -> Result<String, CompletionError>
where
    C: CompletionClient + ?Sized,
{
    let messages = [
        ChatMessage::system("You are a helpful assistant."),
        ChatMessage::user("Hello, world!"),
    ];
    match client.complete(model, &messages).await {
        Ok(reply) => {
            info!(model, "connected to OpenRouter");
            Ok(reply)
        }
        Err(e) => {
            error!(model, error = %e, "error connecting to OpenRouter");
            Err(e)
        }
    }
}
