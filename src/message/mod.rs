pub mod compiler;
pub mod executor;
pub mod llm;
pub mod planner;

pub use llm::{ChatMessage, Role};
