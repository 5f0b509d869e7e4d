//! High-level configuration API

use crate::error::{ApiError, Result};
use sweep_core::TokenizeMode;

/// Configuration shared by every job a [`Processor`](crate::Processor) runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// How the expression tokenizer treats unknown characters
    pub tokenize_mode: TokenizeMode,
    /// Abort a batch at the first failing job
    pub stop_on_error: bool,
}

impl Config {
    /// Reject unknown expression characters and stop batches on first failure
    pub fn strict() -> Self {
        Self {
            tokenize_mode: TokenizeMode::Strict,
            stop_on_error: true,
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
    tokenize_mode_name: Option<String>,
}

impl ConfigBuilder {
    /// Set the tokenizer mode
    pub fn tokenize_mode(mut self, mode: TokenizeMode) -> Self {
        self.config.tokenize_mode = mode;
        self.tokenize_mode_name = None;
        self
    }

    /// Set the tokenizer mode by name (`"lenient"` or `"strict"`)
    ///
    /// The name is checked in [`build`](Self::build).
    pub fn tokenize_mode_name(mut self, name: impl Into<String>) -> Self {
        self.tokenize_mode_name = Some(name.into());
        self
    }

    /// Reject unknown expression characters
    pub fn strict_tokens(self, strict: bool) -> Self {
        self.tokenize_mode(if strict {
            TokenizeMode::Strict
        } else {
            TokenizeMode::Lenient
        })
    }

    /// Abort a batch at the first failing job
    pub fn stop_on_error(mut self, stop: bool) -> Self {
        self.config.stop_on_error = stop;
        self
    }

    /// Build the configuration
    pub fn build(mut self) -> Result<Config> {
        if let Some(name) = self.tokenize_mode_name.take() {
            self.config.tokenize_mode = match name.to_ascii_lowercase().as_str() {
                "lenient" => TokenizeMode::Lenient,
                "strict" => TokenizeMode::Strict,
                other => {
                    return Err(ApiError::Config(format!(
                        "unknown tokenize mode '{other}' (expected 'lenient' or 'strict')"
                    )))
                }
            };
        }

        Ok(self.config)
    }
}
