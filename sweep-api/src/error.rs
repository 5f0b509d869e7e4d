//! API error types

use sweep_core::{CoreError, EvalError};
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Precondition violated by a job's input
    #[error("invalid input: {0}")]
    Core(#[from] CoreError),

    /// Expression failed to tokenize or evaluate
    #[error("evaluation failed: {0}")]
    Eval(#[from] EvalError),

    /// Job parameters that cannot be handed to the core
    #[error("invalid job: {0}")]
    InvalidJob(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// A failed job from a batch, labeled for reporting
#[derive(Error, Debug)]
#[error("job '{label}' failed: {source}")]
pub struct JobFailure {
    /// Job name if set, operation tag otherwise
    pub label: String,
    /// Underlying error
    pub source: ApiError,
}
