use std::{sync::Arc, time::Duration};

use crate::{error::agent_error::AgentError, llm::CompletionClient, message::llm::ChatMessage};

/// A completion client bound to one model id and a per-call timeout.
#[derive(Clone)]
pub struct ModelHandle {
    client: Arc<dyn CompletionClient>,
    model: String,
    timeout: Duration,
}

impl ModelHandle {
    pub fn new(client: Arc<dyn CompletionClient>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            model: model.into(),
            timeout,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn call(&self, messages: &[ChatMessage]) -> Result<String, AgentError> {
        match tokio::time::timeout(self.timeout, self.client.complete(&self.model, messages)).await
        {
            Ok(reply) => Ok(reply?),
            Err(_) => Err(AgentError::Timeout(self.timeout)),
        }
    }
}
