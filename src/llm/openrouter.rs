use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config::ClientConfig,
    error::completion_error::CompletionError,
    llm::CompletionClient,
    message::llm::ChatMessage,
};

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// OpenAI-compatible chat-completions client pointed at OpenRouter.
pub struct OpenRouterClient {
    /// Pre-computed `"Bearer <key>"` header value.
    auth_header: String,
    base_url: String,
    site_url: String,
    site_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenRouterClient {
    pub fn new(config: &ClientConfig) -> Result<Self, CompletionError> {
        if config.api_key.trim().is_empty() {
            return Err(CompletionError::MissingApiKey);
        }
        // Only the connect phase is bounded here; `ModelHandle` owns the
        // per-call timeout.
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            auth_header: format!("Bearer {}", config.api_key),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            site_url: config.site_url.clone(),
            site_name: config.site_name.clone(),
            client,
        })
    }

    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn extract_text(response: ChatResponse) -> Result<String, CompletionError> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.is_empty())
            .ok_or(CompletionError::EmptyResponse)
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, CompletionError> {
        debug!(model, messages = messages.len(), "sending chat completion");

        let response = self
            .client
            .post(self.chat_completions_url())
            .header("Authorization", self.auth_header.as_str())
            .header("HTTP-Referer", self.site_url.as_str())
            .header("X-Title", self.site_name.as_str())
            .json(&ChatRequest { model, messages })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| CompletionError::Decode(e.to_string()))?;
        Self::extract_text(parsed)
    }
}
