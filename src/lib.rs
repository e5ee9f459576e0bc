//! Inventory of installed macOS applications by CPU architecture
//!
//! The pipeline is:
//! - [`scanner`] lists bundles under an applications directory
//! - [`metadata`] reads each bundle's `CFBundleExecutable`
//! - [`probe`] determines the executable's architecture descriptor
//! - [`report`] buckets executables into Intel, Apple Silicon and Universal
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod metadata;
pub mod probe;
pub mod report;
pub mod scanner;

// Re-export commonly used types
pub use error::{BundleIssue, InventoryError, Result};
pub use probe::{ArchitectureProber, FileCommandProber, MachOProber, ProberKind};
pub use report::{Architecture, ScanReport};
pub use scanner::{APPLICATIONS_DIR, ApplicationBundle, ScanOutcome, scan_applications};
