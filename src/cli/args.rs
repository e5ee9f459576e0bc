//! Command line argument parsing and validation.
//!
//! The scan root is fixed; the flags only choose how architectures are
//! detected and how the result is printed.

use crate::probe::ProberKind;
use clap::Parser;

/// Output formats for the final report
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// Three labelled sections, one path per line
    #[default]
    Text,
    /// JSON object with one array per bucket
    Json,
}

/// Inventory of installed applications by CPU architecture
#[derive(Parser, Debug)]
#[command(
    name = "app_arch_inventory",
    version,
    about = "Lists installed applications by CPU architecture",
    long_about = "Scans /Applications, reads each bundle's Info.plist to find its main executable, \
and sorts the executables into Intel, Apple Silicon and Universal lists.

Usage:
  app_arch_inventory
  app_arch_inventory --prober mach-o
  app_arch_inventory --format json --quiet

Set RUST_LOG=debug for per-bundle tracing on stderr."
)]
pub struct Args {
    /// How to detect architectures: `file` runs file(1), `mach-o` parses headers natively
    #[arg(long, value_enum, default_value_t, env = "APP_ARCH_PROBER")]
    pub prober: ProberKind,

    /// Report format
    #[arg(long, value_enum, default_value_t, env = "APP_ARCH_FORMAT")]
    pub format: OutputFormat,

    /// Do not print per-bundle diagnostics (they are still logged)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    prober: ProberKind,
    format: OutputFormat,
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            prober: args.prober,
            format: args.format,
            output: super::OutputManager::new(args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Selected prober implementation
    pub fn prober(&self) -> ProberKind {
        self.prober
    }

    /// Selected report format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }
}
