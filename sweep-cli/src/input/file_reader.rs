//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use sweep_api::JobBatch;

/// Serialization format of a job file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobFileKind {
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl JobFileKind {
    /// Detect the kind from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(JobFileKind::Toml),
            "json" => Some(JobFileKind::Json),
            _ => None,
        }
    }
}

/// File reader for configuration and job files
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read and deserialize a job file
    pub fn read_batch(path: &Path) -> Result<JobBatch> {
        let kind = JobFileKind::from_path(path)
            .ok_or_else(|| CliError::UnsupportedJobFile(path.display().to_string()))?;
        let content = Self::read_text(path)?;

        let batch = match kind {
            JobFileKind::Toml => toml::from_str(&content)
                .with_context(|| format!("Failed to parse job file: {}", path.display()))?,
            JobFileKind::Json => JobBatch::from_json_str(&content)
                .with_context(|| format!("Failed to parse job file: {}", path.display()))?,
        };

        log::debug!("Loaded {} job(s) from {}", batch.len(), path.display());
        Ok(batch)
    }
}
