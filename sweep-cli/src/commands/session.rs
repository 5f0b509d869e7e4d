//! Settings resolved from flags and the config file

use super::GlobalArgs;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{create_formatter, OutputFormat, OutputFormatter, Sink};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use sweep_api::{Config, Job, Processor};

/// Effective settings for one invocation; flags win over the config file
#[derive(Debug, Clone)]
pub struct Session {
    /// Output format
    pub format: OutputFormat,
    /// Output file, stdout when unset
    pub output: Option<PathBuf>,
    /// Indent JSON output
    pub pretty_json: bool,
    /// Suppress progress output
    pub quiet: bool,
    /// Worker threads for parallel batches (0 = auto)
    pub worker_threads: usize,
    /// Configuration handed to the processor
    pub api_config: Config,
}

impl Session {
    /// Merge global flags with the config file they name, if any
    pub fn resolve(global: &GlobalArgs) -> Result<Self> {
        let file_config = match &global.config {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                CliConfig::load(path)?
            }
            None => CliConfig::default(),
        };

        Self::from_parts(global, file_config)
    }

    fn from_parts(global: &GlobalArgs, file_config: CliConfig) -> Result<Self> {
        let format = match global.format {
            Some(format) => format,
            None => OutputFormat::from_name(&file_config.output.default_format).ok_or_else(|| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    file_config.output.default_format
                ))
            })?,
        };

        let mut builder = Config::builder()
            .strict_tokens(file_config.evaluation.strict_tokens)
            .stop_on_error(file_config.batch.stop_on_error);
        if let Some(mode) = &file_config.evaluation.mode {
            builder = builder.tokenize_mode_name(mode.as_str());
        }
        if global.strict {
            builder = builder.strict_tokens(true);
        }
        let api_config = builder.build()?;

        Ok(Self {
            format,
            output: global.output.clone(),
            pretty_json: file_config.output.pretty_json,
            quiet: global.quiet,
            worker_threads: file_config.batch.worker_threads,
            api_config,
        })
    }

    /// Open the output sink and wrap it in the configured formatter
    pub fn formatter(&self, labeled: bool) -> Result<Box<dyn OutputFormatter>> {
        let writer: Sink = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(create_formatter(self.format, writer, labeled, self.pretty_json))
    }

    /// Run a single job and write its report
    pub fn run_job(&self, job: Job) -> Result<()> {
        let processor = Processor::with_config(self.api_config.clone());
        let report = processor
            .run(&job)
            .with_context(|| format!("{} failed", job.name()))?;

        let mut formatter = self.formatter(false)?;
        formatter.format_report(&report)?;
        formatter.finish()
    }
}
