//! Application bundle discovery and classification.
//!
//! The scanner walks the immediate children of an applications directory and,
//! for every bundle, runs the pipeline
//!
//! 1. `Contents/Info.plist` present? (otherwise skip silently)
//! 2. read `CFBundleExecutable`
//! 3. `Contents/MacOS/<name>` present?
//! 4. probe the executable's architecture
//! 5. classify and record
//!
//! Any failure in steps 2-4 becomes a [`BundleIssue`] and only that bundle is
//! skipped. Only failing to open or list the root itself is fatal.

use crate::error::{BundleIssue, InventoryError, Result};
use crate::metadata::{info_plist_path, read_bundle_executable};
use crate::probe::ArchitectureProber;
use crate::report::{Architecture, ScanReport};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Fixed root scanned by the command line tool
pub const APPLICATIONS_DIR: &str = "/Applications";

/// One installed application.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApplicationBundle {
    /// Bundle directory, e.g. `/Applications/Foo.app`
    pub dir: PathBuf,
}

impl ApplicationBundle {
    /// Wrap a bundle directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `Contents/Info.plist`
    pub fn info_plist(&self) -> PathBuf {
        info_plist_path(&self.dir)
    }

    /// `Contents/MacOS/<executable>`
    ///
    /// Only the normal components of `executable` are kept, so an absolute
    /// name or one with `..` still resolves inside `Contents/MacOS`.
    pub fn executable_path(&self, executable: &str) -> PathBuf {
        let mut path = self.dir.join("Contents").join("MacOS");
        for component in Path::new(executable).components() {
            if let Component::Normal(part) = component {
                path.push(part);
            }
        }
        path
    }
}

/// What a completed scan produced.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Classified executables, sorted
    pub report: ScanReport,
    /// Bundles that were skipped, in scan order
    pub issues: Vec<BundleIssue>,
}

/// Scan `root` and classify every bundle's main executable.
///
/// The returned report is already sorted.
pub fn scan_applications(root: &Path, prober: &dyn ArchitectureProber) -> Result<ScanOutcome> {
    log::info!("Scanning applications in {}", root.display());

    let bundles = list_bundle_dirs(root)?;
    let mut outcome = ScanOutcome::default();

    for bundle in bundles {
        match classify_bundle(&bundle, prober) {
            Ok(Some((arch, executable))) => {
                log::debug!("{} -> {:?}", executable.display(), arch);
                outcome.report.record(arch, executable);
            }
            Ok(None) => {}
            Err(issue) => {
                if issue.is_error() {
                    log::warn!("Skipping {}: {}", bundle.dir.display(), issue);
                } else {
                    log::info!("Skipping {}: {}", bundle.dir.display(), issue);
                }
                outcome.issues.push(issue);
            }
        }
    }

    outcome.report.sort();

    log::info!(
        "Classified {} executables ({} intel, {} apple silicon, {} universal), {} bundles skipped",
        outcome.report.len(),
        outcome.report.intel.len(),
        outcome.report.apple_silicon.len(),
        outcome.report.universal.len(),
        outcome.issues.len()
    );

    Ok(outcome)
}

/// Immediate subdirectories of `root`.
///
/// Symlinks are not followed, so a link to an application is not a bundle.
/// The directory handle is released before this returns.
pub fn list_bundle_dirs(root: &Path) -> Result<Vec<ApplicationBundle>> {
    let metadata = std::fs::metadata(root).map_err(|source| InventoryError::DirectoryOpen {
        path: root.to_path_buf(),
        source,
    })?;

    if !metadata.is_dir() {
        return Err(InventoryError::DirectoryOpen {
            path: root.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    let mut bundles = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1).follow_links(false) {
        let entry = entry.map_err(|source| {
            if source.depth() == 0 {
                InventoryError::DirectoryOpen {
                    path: root.to_path_buf(),
                    source: source.into(),
                }
            } else {
                InventoryError::DirectoryRead {
                    path: root.to_path_buf(),
                    source,
                }
            }
        })?;

        if entry.file_type().is_dir() {
            bundles.push(ApplicationBundle::new(entry.into_path()));
        } else {
            log::debug!("Ignoring non-directory {}", entry.path().display());
        }
    }

    Ok(bundles)
}

/// Run the per-bundle pipeline.
///
/// `Ok(None)` means the bundle was skipped without an issue: it has no
/// `Info.plist`, or its descriptor matched no bucket.
pub fn classify_bundle(
    bundle: &ApplicationBundle,
    prober: &dyn ArchitectureProber,
) -> std::result::Result<Option<(Architecture, PathBuf)>, BundleIssue> {
    let plist = bundle.info_plist();
    if !plist.exists() {
        log::debug!("No Info.plist in {}", bundle.dir.display());
        return Ok(None);
    }

    let executable_name = read_bundle_executable(&plist)
        .map_err(|source| BundleIssue::Metadata { plist, source })?;

    let executable = bundle.executable_path(&executable_name);
    if !executable.exists() {
        return Err(BundleIssue::ExecutableNotFound { path: executable });
    }

    let descriptor = prober
        .probe(&executable)
        .map_err(|source| BundleIssue::Architecture {
            executable: executable.clone(),
            source,
        })?;

    match Architecture::classify(&descriptor) {
        Architecture::Unknown => {
            log::debug!(
                "Unrecognised descriptor {:?} for {}",
                descriptor,
                executable.display()
            );
            Ok(None)
        }
        arch => Ok(Some((arch, executable))),
    }
}
