pub mod agent_error;
pub mod completion_error;

use std::io;

use thiserror::Error as ThisError;

use crate::error::{agent_error::AgentError, completion_error::CompletionError};

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("serde_json error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("completion error: {0}")]
    CompletionError(#[from] CompletionError),

    #[error("agent error: {0}")]
    AgentError(#[from] AgentError),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = core::result::Result<T, Error>;
