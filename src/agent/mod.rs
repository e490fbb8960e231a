pub mod compilation;
pub mod context;
pub mod execution;
pub mod model;
pub mod pacing;
pub mod planning;
pub mod runner;
pub mod task;
pub mod types;

pub use compilation::Compiler;
pub use context::TaskContext;
pub use execution::Executor;
pub use model::ModelHandle;
pub use pacing::{FixedDelay, NoPacing, Pacing};
pub use planning::{Planner, Step};
pub use runner::TaskRunner;
pub use task::TaskOutcome;
pub use types::{FailurePolicy, TaskStatus};
