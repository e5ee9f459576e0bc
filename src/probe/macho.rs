//! Native Mach-O header inspection using goblin.
//!
//! Produces descriptors in the same shape the `file(1)` reduction yields, so
//! classification does not care which prober ran.

use super::{ArchitectureProber, UNIVERSAL_TOKEN, UNKNOWN_DESCRIPTOR};
use crate::error::ProbeError;
use goblin::mach::{Mach, MachO, cputype, header};
use std::path::Path;

/// Reads the executable and describes its Mach-O header.
#[derive(Clone, Copy, Debug, Default)]
pub struct MachOProber;

impl ArchitectureProber for MachOProber {
    fn probe(&self, executable: &Path) -> Result<String, ProbeError> {
        let buffer = std::fs::read(executable).map_err(|source| ProbeError::Read {
            path: executable.to_path_buf(),
            source,
        })?;

        let descriptor = describe_macho(&buffer);
        log::debug!("{}: {}", executable.display(), descriptor);
        Ok(descriptor)
    }
}

/// Describes a Mach-O image held in memory.
///
/// - fat header: `universal`
/// - thin image: `<bitness> <kind> <arch>`, e.g. `64-bit executable arm64`
/// - anything else: `unknown`
pub fn describe_macho(bytes: &[u8]) -> String {
    match Mach::parse(bytes) {
        Ok(Mach::Fat(_)) => UNIVERSAL_TOKEN.to_string(),
        Ok(Mach::Binary(macho)) => describe_image(&macho),
        Err(e) => {
            log::debug!("Not a Mach-O image: {}", e);
            UNKNOWN_DESCRIPTOR.to_string()
        }
    }
}

fn describe_image(macho: &MachO<'_>) -> String {
    let bitness = if macho.is_64 { "64-bit" } else { "32-bit" };

    let kind = match macho.header.filetype {
        header::MH_EXECUTE => "executable",
        header::MH_DYLIB => "dynamically linked shared library",
        header::MH_BUNDLE => "bundle",
        header::MH_OBJECT => "object",
        _ => "image",
    };

    format!("{} {} {}", bitness, kind, arch_name(macho.header.cputype))
}

fn arch_name(cpu: u32) -> &'static str {
    match cpu {
        cputype::CPU_TYPE_ARM64 => "arm64",
        cputype::CPU_TYPE_X86_64 => "x86_64",
        cputype::CPU_TYPE_X86 => "i386",
        cputype::CPU_TYPE_ARM => "arm",
        cputype::CPU_TYPE_POWERPC => "ppc",
        cputype::CPU_TYPE_POWERPC64 => "ppc64",
        _ => "unknown-cpu",
    }
}
