//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use sweep_api::Report;

/// Plain text formatter - outputs one result per line
pub struct TextFormatter<W: Write> {
    writer: W,
    labeled: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            labeled: false,
        }
    }

    /// Prefix each result with its job label
    pub fn labeled(mut self, labeled: bool) -> Self {
        self.labeled = labeled;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn begin_source(&mut self, source: &str) -> Result<()> {
        writeln!(self.writer, "# {source}")?;
        Ok(())
    }

    fn format_report(&mut self, report: &Report) -> Result<()> {
        if self.labeled {
            writeln!(self.writer, "{}: {}", report.label(), report.outcome)?;
        } else {
            writeln!(self.writer, "{}", report.outcome)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
