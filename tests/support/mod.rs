#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use openrouter_agent::{
    agent::Pacing,
    error::completion_error::CompletionError,
    llm::CompletionClient,
    message::{ChatMessage, Role},
};
use tokio_util::sync::CancellationToken;

/// Replays canned replies in order and records every request.
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String, CompletionError>>>,
    calls: Mutex<Vec<(String, Vec<ChatMessage>)>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: &str) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.to_string()));
        self
    }

    pub fn fail(self, err: CompletionError) -> Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// User message of the n-th request (0-based).
    pub fn user_content(&self, n: usize) -> String {
        self.calls.lock().unwrap()[n]
            .1
            .iter()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.clone())
            .unwrap_or_default()
    }

    pub fn model_of(&self, n: usize) -> String {
        self.calls.lock().unwrap()[n].0.clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, CompletionError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), messages.to_vec()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(CompletionError::EmptyResponse))
    }
}

/// Never answers within any reasonable timeout.
pub struct StalledClient;

#[async_trait]
impl CompletionClient for StalledClient {
    async fn complete(
        &self,
        _model: &str,
        _messages: &[ChatMessage],
    ) -> Result<String, CompletionError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok("too late".to_string())
    }
}

/// Counts pauses without sleeping.
#[derive(Clone, Default)]
pub struct CountingPacing(pub Arc<AtomicUsize>);

impl CountingPacing {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Pacing for CountingPacing {
    async fn pause(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Cancels the token the first time the runner pauses.
pub struct CancelOnPause(pub CancellationToken);

#[async_trait]
impl Pacing for CancelOnPause {
    async fn pause(&self) {
        self.0.cancel();
    }
}

pub fn plan_json(descriptions: &[&str]) -> String {
    let steps: Vec<_> = descriptions
        .iter()
        .map(|d| serde_json::json!({"description": d, "reasoning": format!("because {d}")}))
        .collect();
    serde_json::Value::Array(steps).to_string()
}
