//! Job file pattern resolution using glob

use super::JobFileKind;
use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve patterns to job files
///
/// A pattern naming a directory expands to the `.toml` and `.json` files
/// directly inside it. Results are sorted and deduplicated.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            } else if path.is_dir() {
                files.extend(job_files_in(&path)?);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No job files found matching the provided patterns");
    }

    files.sort();
    files.dedup();

    Ok(files)
}

fn job_files_in(dir: &std::path::Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to list directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && JobFileKind::from_path(&path).is_some() {
            files.push(path);
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pattern(dir: &TempDir, tail: &str) -> String {
        dir.path().join(tail).display().to_string()
    }

    #[test]
    fn test_glob_matches_sorted_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.toml"), "").unwrap();
        fs::write(temp_dir.path().join("a.toml"), "").unwrap();
        fs::write(temp_dir.path().join("c.json"), "").unwrap();

        let files = resolve_patterns(&[pattern(&temp_dir, "*.toml")]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.toml", "b.toml"]);
    }

    #[test]
    fn test_overlapping_patterns_deduplicate() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("jobs.toml"), "").unwrap();

        let files = resolve_patterns(&[
            pattern(&temp_dir, "*.toml"),
            pattern(&temp_dir, "jobs.toml"),
        ])
        .unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_directory_expands_to_job_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("one.toml"), "").unwrap();
        fs::write(temp_dir.path().join("two.json"), "").unwrap();
        fs::write(temp_dir.path().join("readme.txt"), "").unwrap();

        let files = resolve_patterns(&[temp_dir.path().display().to_string()]).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_no_matches_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = resolve_patterns(&[pattern(&temp_dir, "*.toml")]).unwrap_err();
        assert!(err.to_string().contains("No job files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }
}
