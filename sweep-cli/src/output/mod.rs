//! Output formatting module

use anyhow::Result;
use std::io::Write;
use sweep_api::Report;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Start the reports of one job file
    fn begin_source(&mut self, source: &str) -> Result<()>;

    /// Format and output a single report
    fn format_report(&mut self, report: &Report) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one result per line
    Text,
    /// JSON array of reports
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// Parse a format name as written in the config file
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as clap::ValueEnum>::from_str(name, true).ok()
    }
}

/// Writer sink shared by every formatter
pub type Sink = Box<dyn Write + Send + Sync>;

/// Build a formatter for `format` writing to `writer`
///
/// `labeled` prefixes text lines with the job label; `pretty` only affects JSON.
pub fn create_formatter(
    format: OutputFormat,
    writer: Sink,
    labeled: bool,
    pretty: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer).labeled(labeled)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
