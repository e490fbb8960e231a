use tracing::debug;

use crate::{
    agent::model::ModelHandle, error::agent_error::AgentError,
    message::compiler::generate_compile_message,
};

pub struct Compiler {
    model: ModelHandle,
}

impl Compiler {
    pub fn new(model: ModelHandle) -> Self {
        Self { model }
    }

    /// Merges all step results, absent ones included, into one answer to
    /// `query`.
    pub async fn compile(
        &self,
        step_results: &[Option<String>],
        query: &str,
    ) -> Result<String, AgentError> {
        debug!(results = step_results.len(), "compiling final response");
        let messages = generate_compile_message(step_results, query);
        self.model
            .call(&messages)
            .await
            .map_err(AgentError::compilation)
    }
}
