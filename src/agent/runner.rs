use std::{sync::Arc, time::Duration};

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::{
    agent::{
        compilation::Compiler,
        context::TaskContext,
        execution::Executor,
        model::ModelHandle,
        pacing::{FixedDelay, Pacing},
        planning::{Planner, Step},
        task::TaskOutcome,
        types::{FailurePolicy, TaskStatus},
    },
    config::RunnerConfig,
    error::agent_error::AgentError,
    llm::CompletionClient,
};

pub const PLAN_FAILED: &str = "Could not break down the task into steps";

/// Drives plan -> execute each step -> compile for one query at a time.
pub struct TaskRunner {
    planner: Planner,
    executor: Executor,
    compiler: Compiler,
    pacing: Box<dyn Pacing>,
    failure_policy: FailurePolicy,
}

impl TaskRunner {
    pub fn new(client: Arc<dyn CompletionClient>, config: RunnerConfig) -> Self {
        let model = ModelHandle::new(client, config.model.clone(), config.call_timeout());
        Self::from_model(model, config.failure_policy)
            .with_pacing(FixedDelay(config.step_delay()))
    }

    pub fn from_model(model: ModelHandle, failure_policy: FailurePolicy) -> Self {
        Self {
            planner: Planner::new(model.clone()),
            executor: Executor::new(model.clone()),
            compiler: Compiler::new(model),
            pacing: Box::new(FixedDelay(Duration::from_secs(1))),
            failure_policy,
        }
    }

    pub fn with_pacing(mut self, pacing: impl Pacing + 'static) -> Self {
        self.pacing = Box::new(pacing);
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    /// Breaks `query` into steps. Unparseable planner output yields an empty
    /// plan.
    pub async fn plan(&self, query: &str) -> Vec<Step> {
        self.planner.plan(query).await
    }

    /// Like [`TaskRunner::plan`] but returns the parse error and raw reply.
    pub async fn try_plan(&self, query: &str) -> Result<Vec<Step>, AgentError> {
        self.planner.try_plan(query).await
    }

    pub async fn execute_step(&self, step: &Step, context: &str) -> Result<String, AgentError> {
        self.executor.execute(step, context).await
    }

    pub async fn compile(
        &self,
        step_results: &[Option<String>],
        query: &str,
    ) -> Result<String, AgentError> {
        self.compiler.compile(step_results, query).await
    }

    pub async fn solve(&self, query: &str) -> TaskOutcome {
        self.solve_with_cancel(query, &CancellationToken::new())
            .await
    }

    /// Runs the full pipeline. Never returns an error: failures are recorded
    /// on the outcome according to the runner's [`FailurePolicy`].
    /// `cancel` is checked before each step and interrupts the pacing pause.
    pub async fn solve_with_cancel(&self, query: &str, cancel: &CancellationToken) -> TaskOutcome {
        let mut outcome = TaskOutcome::new(query);
        info!(task_id = %outcome.task_id, query, "analyzing task");

        let steps = self.plan(query).await;
        if steps.is_empty() {
            outcome.fail(TaskStatus::Failed, PLAN_FAILED);
            return outcome;
        }

        info!(count = steps.len(), "breaking down into steps");
        for (i, step) in steps.iter().enumerate() {
            info!("  {}. {}", i + 1, step.description);
        }
        outcome.steps = steps;

        let mut context = TaskContext::new();
        let total = outcome.steps.len();

        for i in 0..total {
            if cancel.is_cancelled() {
                warn!(completed = i, total, "task cancelled before step {}", i + 1);
                outcome.context = context.into_string();
                outcome.fail(TaskStatus::Cancelled, AgentError::Cancelled.to_string());
                return outcome;
            }

            let step = &outcome.steps[i];
            outcome.status = TaskStatus::Executing { step: i + 1 };
            info!(step = i + 1, description = %step.description, "executing step");

            let executed = self
                .execute_step(step, context.as_str())
                .await
                .map_err(|err| err.to_string());
            match &executed {
                Ok(_) => info!(step = i + 1, "step completed"),
                Err(err) => error!(step = i + 1, error = %err, "step failed"),
            }
            let abort_with = match (&executed, self.failure_policy) {
                (Err(err), FailurePolicy::Abort) => Some(err.clone()),
                _ => None,
            };

            context.record(executed.as_deref().ok());
            outcome.push_step(executed);

            if let Some(err) = abort_with {
                outcome.context = context.into_string();
                outcome.fail(TaskStatus::Failed, err);
                return outcome;
            }

            if i + 1 < total {
                tokio::select! {
                    _ = self.pacing.pause() => {}
                    _ = cancel.cancelled() => {}
                }
            }
        }

        outcome.context = context.into_string();
        outcome.status = TaskStatus::Compiling;
        info!("compiling final response");

        match self.compile(&outcome.step_results, query).await {
            Ok(response) => {
                outcome.final_response = Some(response);
                outcome.finish(TaskStatus::Done);
            }
            Err(err) => {
                error!(error = %err, "compilation failed");
                let status = match self.failure_policy {
                    FailurePolicy::Degrade => TaskStatus::Done,
                    FailurePolicy::Abort => TaskStatus::Failed,
                };
                outcome.fail(status, err.to_string());
            }
        }

        outcome
    }
}
