//! Error types for the console front-end

use std::io;
use thiserror::Error;
use test_registry_core::CoreError;

/// Result type for the console
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Error type for the console
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// I/O error on the terminal
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error raised by the registry core
    #[error("{0}")]
    Core(#[from] CoreError),

    /// JSON rendering error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed command line
    #[error("Invalid command: {0}")]
    Command(String),
}

impl ConsoleError {
    /// Whether the session can carry on after this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ConsoleError::Io(_))
    }
}
