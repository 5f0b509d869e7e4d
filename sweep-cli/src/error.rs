//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Malformed integer list on the command line
    InvalidSequence(String),
    /// Job file with an extension other than `.toml` or `.json`
    UnsupportedJobFile(String),
    /// Some jobs in a batch failed
    JobsFailed {
        /// Failed job count
        failed: usize,
        /// Attempted job count
        total: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidSequence(msg) => write!(f, "Invalid sequence: {msg}"),
            CliError::UnsupportedJobFile(path) => {
                write!(f, "Unsupported job file (expected .toml or .json): {path}")
            }
            CliError::JobsFailed { failed, total } => {
                write!(f, "{failed} of {total} job(s) failed")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
