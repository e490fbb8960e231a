use std::time::Duration;

use crate::error::completion_error::CompletionError;

#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// Planner output was not a JSON array of steps. `raw` keeps the
    /// unparsed reply for diagnosis.
    #[error("plan parse failed: {message}")]
    PlanParse { message: String, raw: String },

    #[error("step \"{description}\" failed: {source}")]
    Execution {
        description: String,
        #[source]
        source: Box<AgentError>,
    },

    #[error("compilation failed: {0}")]
    Compilation(#[source] Box<AgentError>),

    #[error("completion call timed out after {0:?}")]
    Timeout(Duration),

    #[error("invalid message role: {0}")]
    InvalidRole(String),

    #[error("task cancelled")]
    Cancelled,

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

impl AgentError {
    pub fn execution(description: impl Into<String>, source: AgentError) -> Self {
        AgentError::Execution {
            description: description.into(),
            source: Box::new(source),
        }
    }

    pub fn compilation(source: AgentError) -> Self {
        AgentError::Compilation(Box::new(source))
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            AgentError::Timeout(_) | AgentError::Completion(CompletionError::Timeout(_)) => true,
            AgentError::Execution { source, .. } | AgentError::Compilation(source) => {
                source.is_timeout()
            }
            _ => false,
        }
    }
}
