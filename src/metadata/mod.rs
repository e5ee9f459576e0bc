//! Bundle metadata (`Contents/Info.plist`) reading

use crate::error::MetadataError;
use std::path::{Path, PathBuf};

/// Key naming the bundle's primary executable
pub const EXECUTABLE_KEY: &str = "CFBundleExecutable";

/// Location of the metadata file relative to the bundle directory
pub fn info_plist_path(bundle_dir: &Path) -> PathBuf {
    bundle_dir.join("Contents").join("Info.plist")
}

/// Read the executable name declared in an `Info.plist`.
///
/// Both XML and binary property lists are accepted. The root must be a
/// dictionary and `CFBundleExecutable` must hold a string; anything else is
/// reported as [`MetadataError::MissingKey`] or [`MetadataError::Parse`].
pub fn read_bundle_executable(plist_path: &Path) -> Result<String, MetadataError> {
    let content = std::fs::read(plist_path).map_err(|source| MetadataError::Read {
        path: plist_path.to_path_buf(),
        source,
    })?;

    let dictionary: plist::Dictionary =
        plist::from_bytes(&content).map_err(|source| MetadataError::Parse {
            path: plist_path.to_path_buf(),
            source,
        })?;

    dictionary
        .get(EXECUTABLE_KEY)
        .and_then(plist::Value::as_string)
        .map(String::from)
        .ok_or_else(|| MetadataError::MissingKey {
            path: plist_path.to_path_buf(),
            key: EXECUTABLE_KEY,
        })
}
