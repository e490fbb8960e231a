use serde::{Deserialize, Serialize};

use crate::{error::agent_error::AgentError, utils::string_util::StripCodeBlock};

/// One unit of work produced by the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub description: String,
    pub reasoning: String,
}

impl Step {
    pub fn new(description: impl Into<String>, reasoning: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            reasoning: reasoning.into(),
        }
    }
}

/// Parses planner output into an ordered list of steps.
///
/// The reply must be a JSON array of `{description, reasoning}` objects. A
/// markdown fence around the array is tolerated; extra keys are ignored.
pub fn parse_plan(raw: &str) -> Result<Vec<Step>, AgentError> {
    serde_json::from_str::<Vec<Step>>(raw.strip_code_block()).map_err(|e| AgentError::PlanParse {
        message: e.to_string(),
        raw: raw.to_string(),
    })
}
