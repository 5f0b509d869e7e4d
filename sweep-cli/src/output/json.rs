//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use sweep_api::Report;

/// JSON formatter - outputs reports as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    source: Option<String>,
    entries: Vec<ReportEntry>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct ReportEntry {
    /// Job file the report came from, in batch mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// The report itself
    #[serde(flatten)]
    pub report: Report,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            source: None,
            entries: Vec::new(),
        }
    }

    /// Indent the output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_source(&mut self, source: &str) -> Result<()> {
        self.source = Some(source.to_string());
        Ok(())
    }

    fn format_report(&mut self, report: &Report) -> Result<()> {
        self.entries.push(ReportEntry {
            source: self.source.clone(),
            report: report.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
