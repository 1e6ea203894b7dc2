use std::path::PathBuf;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Every variant is fatal for the run; `main` logs it and exits non-zero.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(LlmError),

    #[error("Protocol error: {0}")]
    Protocol(LlmError),

    #[error("Failed to decode generated content: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::NoChoices | LlmError::EmptyContent | LlmError::Parse(_) => {
                AppError::Protocol(err)
            }
            other => AppError::Transport(other),
        }
    }
}
