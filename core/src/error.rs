//! Error types for the core crate
//!
//! This module provides a consolidated error type for the core crate.
//! Field-level validation messages are not errors in this sense: they are
//! collected in [`FieldErrors`] and only surface here when a submission is
//! rejected as a whole.

use std::io;
use thiserror::Error;

use crate::validation::FieldErrors;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// A field name that does not name one of the form fields
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Test type creation with a blank name
    #[error("Please enter a non-empty test type.")]
    EmptyTestType,

    /// Test type creation with a name already in the set
    #[error("Test type already exists!")]
    DuplicateTestType(String),

    /// No stored record carries the given id
    #[error("Record {0} not found")]
    RecordNotFound(u64),

    /// Submission rejected because at least one field failed validation
    #[error("Validation failed: {0}")]
    ValidationRejected(FieldErrors),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for the core crate
pub type Result<T> = std::result::Result<T, CoreError>;

/// Convert a string error to a ConfigError
pub fn to_config_error<E: std::fmt::Display>(err: E) -> CoreError {
    CoreError::ConfigError(err.to_string())
}
