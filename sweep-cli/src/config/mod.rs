//! Configuration module

use crate::input::FileReader;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Expression evaluation configuration
    #[serde(default)]
    pub evaluation: EvaluationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Batch execution configuration
    #[serde(default)]
    pub batch: BatchConfig,
}

impl CliConfig {
    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = FileReader::read_text(path)?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Evaluation-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Reject characters outside the expression grammar
    pub strict_tokens: bool,

    /// Tokenizer mode by name (`"lenient"` or `"strict"`); overrides `strict_tokens`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Batch-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct BatchConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,

    /// Stop at the first failing job
    pub stop_on_error: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert!(!config.evaluation.strict_tokens);
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
        assert_eq!(config.batch.worker_threads, 0);
        assert!(!config.batch.stop_on_error);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(CliConfig::from_toml_str("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = CliConfig::from_toml_str(
            r#"
            [output]
            default_format = "json"

            [batch]
            worker_threads = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.output.default_format, "json");
        assert!(config.output.pretty_json);
        assert_eq!(config.batch.worker_threads, 3);
        assert!(!config.batch.stop_on_error);
    }

    #[test]
    fn test_load_reports_path_on_bad_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sweep.toml");
        fs::write(&path, "[evaluation]\nstrict_tokens = \"yes\"\n").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_evaluation_mode_by_name() {
        let config = CliConfig::from_toml_str("[evaluation]\nmode = \"strict\"\n").unwrap();
        assert_eq!(config.evaluation.mode.as_deref(), Some("strict"));
        assert!(!config.evaluation.strict_tokens);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = CliConfig::default();
        config.evaluation.strict_tokens = true;
        config.batch.stop_on_error = true;

        let text = toml::to_string(&config).unwrap();
        assert_eq!(CliConfig::from_toml_str(&text).unwrap(), config);
    }
}
