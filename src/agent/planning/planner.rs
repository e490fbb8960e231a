use tracing::{debug, error};

use crate::{
    agent::{
        model::ModelHandle,
        planning::step::{Step, parse_plan},
    },
    error::agent_error::AgentError,
    message::planner::generate_planner_message,
};

pub struct Planner {
    model: ModelHandle,
}

impl Planner {
    pub fn new(model: ModelHandle) -> Self {
        Self { model }
    }

    /// Asks the model for a plan and parses it, surfacing every failure.
    pub async fn try_plan(&self, query: &str) -> Result<Vec<Step>, AgentError> {
        let messages = generate_planner_message(query);
        debug!(model = self.model.model(), "requesting plan");
        let raw = self.model.call(&messages).await?;
        parse_plan(&raw)
    }

    /// Same as [`Planner::try_plan`] but degrades every failure to an empty
    /// plan after logging it, so the caller can short-circuit.
    pub async fn plan(&self, query: &str) -> Vec<Step> {
        match self.try_plan(query).await {
            Ok(steps) => steps,
            Err(AgentError::PlanParse { message, raw }) => {
                error!(error = %message, "could not parse plan response as JSON");
                error!(raw = %raw, "raw plan response");
                Vec::new()
            }
            Err(e) => {
                error!(error = %e, "plan request failed");
                Vec::new()
            }
        }
    }
}
