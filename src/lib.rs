pub mod agent;
pub mod compare;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod llm;
pub mod message;
pub mod prompt;
pub mod utils;

pub use agent::{FailurePolicy, Step, TaskOutcome, TaskRunner, TaskStatus};
pub use config::{ClientConfig, RunnerConfig};
pub use error::{Error, Result};
pub use llm::{CompletionClient, OpenRouterClient};
