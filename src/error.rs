//! Error types for inventory operations.
//!
//! Fatal errors abort the whole run and surface through [`InventoryError`].
//! Everything that can go wrong while looking at a single bundle is a
//! [`BundleIssue`]: it is logged, reported and the scan moves on.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Fatal errors that stop the inventory run
#[derive(Error, Debug)]
pub enum InventoryError {
    /// The applications root could not be opened
    #[error("failed to open directory {}: {source}", path.display())]
    DirectoryOpen {
        /// Root that was being opened
        path: PathBuf,
        /// Underlying cause
        source: std::io::Error,
    },

    /// The applications root was opened but listing it failed
    #[error("failed to read directory {}: {source}", path.display())]
    DirectoryRead {
        /// Root that was being listed
        path: PathBuf,
        /// Underlying cause
        source: walkdir::Error,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while reading a bundle's `Info.plist`
#[derive(Error, Debug)]
pub enum MetadataError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Metadata file path
        path: PathBuf,
        /// Underlying cause
        source: std::io::Error,
    },

    /// The bytes are not a property list with a dictionary root
    #[error("invalid property list {}: {source}", path.display())]
    Parse {
        /// Metadata file path
        path: PathBuf,
        /// Underlying cause
        source: plist::Error,
    },

    /// The key is absent or its value is not a string
    #[error("{key} not found in {}", path.display())]
    MissingKey {
        /// Metadata file path
        path: PathBuf,
        /// Key that was looked up
        key: &'static str,
    },
}

/// Failures while determining an executable's architecture
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The introspection utility could not be started
    #[error("failed to launch {program}: {source}")]
    Launch {
        /// Program that was being launched
        program: String,
        /// Underlying cause
        source: std::io::Error,
    },

    /// The introspection utility ran but reported failure
    #[error("{program} failed on {} ({status}): {}", path.display(), output.trim())]
    Failed {
        /// Program that was run
        program: String,
        /// File that was being inspected
        path: PathBuf,
        /// Exit status
        status: std::process::ExitStatus,
        /// Combined stdout/stderr
        output: String,
    },

    /// The introspection output is not valid UTF-8
    #[error("undecodable output for {}: {source}", path.display())]
    Decode {
        /// File that was being inspected
        path: PathBuf,
        /// Underlying cause
        source: std::string::FromUtf8Error,
    },

    /// The executable itself could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was being inspected
        path: PathBuf,
        /// Underlying cause
        source: std::io::Error,
    },
}

/// Recoverable per-bundle problem; the bundle is skipped
#[derive(Error, Debug)]
pub enum BundleIssue {
    /// Metadata could not be read, parsed, or lacked the executable key
    #[error("Error parsing {}: {source}", plist.display())]
    Metadata {
        /// `Contents/Info.plist` of the bundle
        plist: PathBuf,
        /// Underlying cause
        source: MetadataError,
    },

    /// The declared executable does not exist
    #[error("Executable file not found at: {}", path.display())]
    ExecutableNotFound {
        /// Expected `Contents/MacOS/<name>` path
        path: PathBuf,
    },

    /// The architecture could not be determined
    #[error("Error determining architecture: {source}")]
    Architecture {
        /// Executable that was probed
        executable: PathBuf,
        /// Underlying cause
        source: ProbeError,
    },
}

impl BundleIssue {
    /// Whether this issue is a real error rather than an informational skip
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::ExecutableNotFound { .. })
    }
}
