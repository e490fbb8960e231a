use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::{info, warn};

use crate::{llm::CompletionClient, message::llm::ChatMessage};

pub const DEFAULT_PROMPT: &str = "Explain quantum computing in simple terms.";

/// `(display name, model id)` pairs swept by default.
pub static DEFAULT_MODELS: Lazy<Vec<(String, String)>> = Lazy::new(|| {
    [
        ("OpenAI GPT-3.5", "openai/gpt-3.5-turbo"),
        ("OpenAI GPT-4", "openai/gpt-4"),
        ("Anthropic Claude", "anthropic/claude-instant-1"),
        ("Google PaLM 2", "google/palm-2-chat-bison"),
        ("Mistral", "mistralai/mistral-7b-instruct-v0.2"),
    ]
    .into_iter()
    .map(|(name, id)| (name.to_string(), id.to_string()))
    .collect()
});

#[derive(Debug, Clone, Serialize)]
pub struct ModelReply {
    pub name: String,
    pub model: String,
    pub reply: Result<String, String>,
}

/// Sends `prompt` to each model in turn. A failing model is recorded and the
/// sweep moves on.
pub async fn compare_models<C>(
    client: &C,
    prompt: &str,
    models: &[(String, String)],
) -> Vec<ModelReply>
where
    C: CompletionClient + ?Sized,
{
    let messages = [ChatMessage::user(prompt)];
    let mut replies = Vec::with_capacity(models.len());

    for (name, model) in models {
        info!(name = %name, model = %model, "querying model");
        let reply = match client.complete(model, &messages).await {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!(name = %name, error = %e, "model failed");
                Err(e.to_string())
            }
        };
        replies.push(ModelReply {
            name: name.clone(),
            model: model.clone(),
            reply,
        });
    }

    replies
}

/// Parses a `NAME=MODEL_ID` pair; a bare id is used as its own name.
pub fn parse_model_spec(spec: &str) -> (String, String) {
    match spec.split_once('=') {
        Some((name, id)) => (name.trim().to_string(), id.trim().to_string()),
        None => (spec.trim().to_string(), spec.trim().to_string()),
    }
}
