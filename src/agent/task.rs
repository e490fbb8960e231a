use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::agent::{planning::Step, types::TaskStatus};

/// Full record of one `solve` run, including intermediate artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskOutcome {
    pub task_id: String,

    pub query: String,

    pub steps: Vec<Step>,

    /// Index-aligned with `steps`; `None` marks a failed step.
    pub step_results: Vec<Option<String>>,

    /// Index-aligned with `step_results`; the error behind each `None`.
    #[serde(default)]
    pub step_errors: Vec<Option<String>>,

    /// Rendered context after the last executed step.
    #[serde(default)]
    pub context: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_response: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub status: TaskStatus,

    pub started_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl TaskOutcome {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            task_id: Uuid::new_v4().simple().to_string(),
            query: query.into(),
            steps: Vec::new(),
            step_results: Vec::new(),
            step_errors: Vec::new(),
            context: String::new(),
            final_response: None,
            error: None,
            status: TaskStatus::Planning,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub(crate) fn finish(&mut self, status: TaskStatus) {
        self.status = status;
        self.finished_at = Some(Utc::now());
    }

    pub(crate) fn fail(&mut self, status: TaskStatus, error: impl Into<String>) {
        self.error = Some(error.into());
        self.finish(status);
    }

    pub(crate) fn push_step(&mut self, result: Result<String, String>) {
        match result {
            Ok(text) => {
                self.step_results.push(Some(text));
                self.step_errors.push(None);
            }
            Err(error) => {
                self.step_results.push(None);
                self.step_errors.push(Some(error));
            }
        }
    }

    /// Done with a final response, no recorded error and no failed step.
    pub fn is_success(&self) -> bool {
        self.status == TaskStatus::Done
            && self.final_response.is_some()
            && self.error.is_none()
            && self.failed_steps().next().is_none()
    }

    /// `(step number, error)` for each step that failed.
    pub fn step_failures(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.step_errors
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_deref().map(|e| (i + 1, e)))
    }

    pub fn failed_steps(&self) -> impl Iterator<Item = usize> + '_ {
        self.step_results
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_none())
            .map(|(i, _)| i + 1)
    }
}
