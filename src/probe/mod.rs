//! Architecture detection for bundle executables.
//!
//! An [`ArchitectureProber`] turns an executable path into a canonical
//! architecture descriptor such as `"64-bit executable arm64"` or
//! `"universal"`. The scanner only depends on the trait, so the way the
//! descriptor is obtained can be swapped:
//!
//! - [`FileCommandProber`] - shells out to `file(1)` and reduces its output
//! - [`MachOProber`] - parses the Mach-O / fat header in-process
//!
//! Neither implementation caches: probing the same path twice inspects it twice.

mod descriptor;
mod file_command;
mod macho;

pub use descriptor::{UNIVERSAL_TOKEN, UNKNOWN_DESCRIPTOR, extract_architecture, tokenize};
pub use file_command::FileCommandProber;
pub use macho::{MachOProber, describe_macho};

use crate::error::ProbeError;
use std::path::Path;

/// Capability to describe the CPU architecture of an executable.
pub trait ArchitectureProber {
    /// Returns the canonical architecture descriptor for `executable`.
    ///
    /// The caller has already checked that the path exists.
    fn probe(&self, executable: &Path) -> Result<String, ProbeError>;
}

/// Selectable prober implementations.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ProberKind {
    /// Run `file(1)` on each executable
    #[default]
    File,
    /// Parse Mach-O headers natively
    MachO,
}

impl ProberKind {
    /// Build the prober this kind names.
    pub fn build(self) -> Box<dyn ArchitectureProber> {
        match self {
            Self::File => Box::new(FileCommandProber::default()),
            Self::MachO => Box::new(MachOProber),
        }
    }
}
