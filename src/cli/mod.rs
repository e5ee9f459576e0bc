//! Command line interface for the application inventory.
//!
//! Parses arguments, scans the fixed applications directory with the selected
//! prober, then prints diagnostics followed by the report.

mod args;
mod output;

pub use args::{Args, OutputFormat, RuntimeConfig};
pub use output::OutputManager;

use crate::error::Result;
use crate::scanner::{APPLICATIONS_DIR, scan_applications};
use std::path::Path;

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    let config = RuntimeConfig::from(&args);
    execute(&config, Path::new(APPLICATIONS_DIR))
}

/// Scan `root` and print the outcome according to `config`
pub fn execute(config: &RuntimeConfig, root: &Path) -> Result<i32> {
    let prober = config.prober().build();
    log::debug!("Using {:?} prober", config.prober());

    let outcome = scan_applications(root, prober.as_ref())?;

    config.output().issues(&outcome.issues)?;
    config.output().report(&outcome.report, config.format())?;

    Ok(0)
}
