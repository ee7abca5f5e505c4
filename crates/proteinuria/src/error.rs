//! Error types for the proteinuria library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for evaluator operations.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// Lab values failed validation. Messages are user-facing and ordered.
    #[error("Invalid lab input: {}", .errors.join(" "))]
    InvalidInput { errors: Vec<String> },

    /// Error reading an input file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input document has the wrong shape.
    #[error("Input error: {0}")]
    Input(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EvaluationError {
    /// The user-facing validation messages, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&[String]> {
        match self {
            EvaluationError::InvalidInput { errors } => Some(errors),
            _ => None,
        }
    }
}

/// Result type alias for evaluator operations.
pub type Result<T> = std::result::Result<T, EvaluationError>;
