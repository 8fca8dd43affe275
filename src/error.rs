use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },

    #[error("Failed to (de)serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Performance references unknown player {0}")]
    UnknownPlayer(i32),

    #[error("Player {0} is listed more than once")]
    DuplicatePlayer(i32),

    #[error("Invalid progression config: {0}")]
    InvalidConfig(String)
}

impl ProcessorError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProcessorError::Io {
            path: path.into(),
            source
        }
    }
}
