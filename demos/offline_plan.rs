use std::sync::Arc;

use async_trait::async_trait;
use openrouter_agent::{
    RunnerConfig, TaskRunner,
    agent::NoPacing,
    error::completion_error::CompletionError,
    llm::CompletionClient,
    message::{ChatMessage, Role},
};

/// Answers without any network: a fixed plan, then echoes each step.
struct CannedClient;

#[async_trait]
impl CompletionClient for CannedClient {
    async fn complete(
        &self,
        _model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, CompletionError> {
        let user = messages
            .iter()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .unwrap_or_default();

        if user.starts_with("Break down this task into steps:") {
            return Ok(r#"[
                {"description": "Pick a venue", "reasoning": "Needed first"},
                {"description": "Send invites", "reasoning": "After venue is set"}
            ]"#
            .to_string());
        }
        if user.starts_with("Original query:") {
            return Ok(format!("Compiled answer from:\n{}", user));
        }
        let step = user
            .split("Execute this step: ")
            .nth(1)
            .and_then(|rest| rest.split("\n\n").next())
            .unwrap_or("?");
        Ok(format!("done: {}", step))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    let runner = TaskRunner::new(Arc::new(CannedClient), RunnerConfig::default()).with_pacing(NoPacing);
    let outcome = runner.solve("Plan a birthday party").await;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
