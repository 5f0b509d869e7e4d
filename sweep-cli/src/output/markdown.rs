//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use sweep_api::Report;

/// Markdown formatter - outputs reports as table rows
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    report_count: usize,
    header_written: bool,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            report_count: 0,
            header_written: false,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_source(&mut self, source: &str) -> Result<()> {
        if self.report_count > 0 {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        self.header_written = false;
        Ok(())
    }

    fn format_report(&mut self, report: &Report) -> Result<()> {
        if !self.header_written {
            writeln!(self.writer, "| # | Job | Result | Time (µs) |")?;
            writeln!(self.writer, "|---|-----|--------|-----------|")?;
            self.header_written = true;
        }

        self.report_count += 1;
        writeln!(
            self.writer,
            "| {} | {} | `{}` | {} |",
            self.report_count,
            report.label(),
            report.outcome,
            report.elapsed_micros
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total jobs: {}*", self.report_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
