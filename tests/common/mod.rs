//! Shared fixtures for building throwaway application directories

#![allow(dead_code)]

use app_arch_inventory::error::ProbeError;
use app_arch_inventory::probe::{ArchitectureProber, extract_architecture};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ARM64_OUTPUT: &str = "Mach-O 64-bit executable arm64";
pub const X86_64_OUTPUT: &str = "Mach-O 64-bit executable x86_64";
pub const UNIVERSAL_OUTPUT: &str =
    "Mach-O universal binary with 2 architectures: [x86_64:Mach-O 64-bit executable x86_64] [arm64]";

/// Temporary stand-in for /Applications
pub struct AppsDir {
    pub dir: TempDir,
}

impl AppsDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp applications dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// `<root>/<bundle>/Contents/MacOS/<executable>` path
    pub fn executable_path(&self, bundle: &str, executable: &str) -> PathBuf {
        self.root()
            .join(bundle)
            .join("Contents")
            .join("MacOS")
            .join(executable)
    }

    /// Bundle directory with nothing inside
    pub fn empty_bundle(&self, bundle: &str) -> PathBuf {
        let dir = self.root().join(bundle);
        fs::create_dir_all(&dir).expect("create bundle dir");
        dir
    }

    /// Bundle with raw `Info.plist` contents and no executable
    pub fn bundle_with_plist(&self, bundle: &str, plist: &str) -> PathBuf {
        let contents = self.empty_bundle(bundle).join("Contents");
        fs::create_dir_all(&contents).expect("create Contents");
        let path = contents.join("Info.plist");
        fs::write(&path, plist).expect("write Info.plist");
        path
    }

    /// Complete bundle whose executable holds `bytes`
    pub fn app(&self, bundle: &str, executable: &str, bytes: &[u8]) -> PathBuf {
        self.bundle_with_plist(bundle, &xml_plist(executable));
        let path = self.executable_path(bundle, executable);
        fs::create_dir_all(path.parent().expect("MacOS dir")).expect("create MacOS dir");
        fs::write(&path, bytes).expect("write executable");
        path
    }
}

/// Minimal XML property list declaring `executable`
pub fn xml_plist(executable: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>CFBundleIdentifier</key>
	<string>com.example.{executable}</string>
	<key>CFBundleExecutable</key>
	<string>{executable}</string>
</dict>
</plist>
"#
    )
}

/// Thin 64-bit Mach-O header with no load commands
pub fn thin_macho(cputype: u32, filetype: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    for word in [0xfeed_facf_u32, cputype, 0, filetype, 0, 0, 0, 0] {
        bytes.extend_from_slice(&word.to_le_bytes());
    }
    bytes
}

/// Fat header listing an x86_64 and an arm64 slice
pub fn fat_macho() -> Vec<u8> {
    let mut bytes = Vec::new();
    let words = [
        0xcafe_babe_u32,
        2,
        // x86_64
        0x0100_0007,
        3,
        0x1000,
        0x20,
        12,
        // arm64
        0x0100_000c,
        0,
        0x2000,
        0x20,
        14,
    ];
    for word in words {
        bytes.extend_from_slice(&word.to_be_bytes());
    }
    bytes
}

/// Prober that fakes `file(1)` output from the executable's contents.
///
/// Each executable file is expected to hold the text `file` would print after
/// `<path>: `. Every probed path is remembered.
#[derive(Default)]
pub struct FakeFileProber {
    pub probed: RefCell<Vec<PathBuf>>,
}

impl ArchitectureProber for FakeFileProber {
    fn probe(&self, executable: &Path) -> Result<String, ProbeError> {
        self.probed.borrow_mut().push(executable.to_path_buf());
        let text = fs::read_to_string(executable).map_err(|source| ProbeError::Read {
            path: executable.to_path_buf(),
            source,
        })?;
        let output = format!("{}: {}\n", executable.display(), text.trim());
        Ok(extract_architecture(&output, executable))
    }
}
