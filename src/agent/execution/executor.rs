use tracing::debug;

use crate::{
    agent::{model::ModelHandle, planning::Step},
    error::agent_error::AgentError,
    message::executor::generate_step_message,
};

pub struct Executor {
    model: ModelHandle,
}

impl Executor {
    pub fn new(model: ModelHandle) -> Self {
        Self { model }
    }

    /// Runs one step against the accumulated context and returns the model's
    /// reply unmodified.
    pub async fn execute(&self, step: &Step, context: &str) -> Result<String, AgentError> {
        debug!(description = %step.description, context_len = context.len(), "executing step");
        let messages = generate_step_message(step, context);
        self.model
            .call(&messages)
            .await
            .map_err(|e| AgentError::execution(step.description.as_str(), e))
    }
}
