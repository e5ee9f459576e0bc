//! Terminal output for diagnostics and the final report.

use super::OutputFormat;
use crate::error::BundleIssue;
use crate::report::ScanReport;
use std::io::{self, Write};

/// Writes user-facing output to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputManager {
    quiet: bool,
}

impl OutputManager {
    /// Create a new output manager
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print one line per skipped bundle unless quiet
    pub fn issues(&self, issues: &[BundleIssue]) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        for issue in issues {
            writeln!(stdout, "{}", issue)?;
        }
        stdout.flush()
    }

    /// Print the report in the requested format
    pub fn report(&self, report: &ScanReport, format: OutputFormat) -> crate::Result<()> {
        let mut stdout = io::stdout().lock();
        match format {
            OutputFormat::Text => report.render_text(&mut stdout)?,
            OutputFormat::Json => report.render_json(&mut stdout)?,
        }
        stdout.flush()?;
        Ok(())
    }
}
