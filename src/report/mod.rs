//! Classification of architecture descriptors and report rendering.
//!
//! Descriptors are bucketed by substring, first match wins:
//!
//! | Descriptor contains          | Bucket         |
//! |------------------------------|----------------|
//! | `executable arm64`           | Apple Silicon  |
//! | `64-bit executable x86_64`   | Intel          |
//! | `universal`                  | Universal      |
//! | anything else                | discarded      |

use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Header line of the Intel section
pub const INTEL_HEADER: &str = "Intel Binaries";
/// Header line of the Apple Silicon section
pub const APPLE_HEADER: &str = "Apple Binaries";
/// Header line of the Universal section
pub const UNIVERSAL_HEADER: &str = "Universal Binaries";

/// CPU architecture category of an executable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Architecture {
    /// x86_64 only
    Intel64,
    /// arm64 only
    AppleSilicon,
    /// Fat binary carrying several architectures
    Universal,
    /// Anything the rules above do not recognise
    Unknown,
}

impl Architecture {
    /// Classify a canonical descriptor.
    pub fn classify(descriptor: &str) -> Self {
        if descriptor.contains("executable arm64") {
            Self::AppleSilicon
        } else if descriptor.contains("64-bit executable x86_64") {
            Self::Intel64
        } else if descriptor.contains("universal") {
            Self::Universal
        } else {
            Self::Unknown
        }
    }
}

/// Executables bucketed by architecture.
///
/// Buckets fill in scan order; call [`ScanReport::sort`] before rendering.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ScanReport {
    /// Intel-only executables
    pub intel: Vec<PathBuf>,
    /// Apple Silicon-only executables
    pub apple_silicon: Vec<PathBuf>,
    /// Universal executables
    pub universal: Vec<PathBuf>,
}

impl ScanReport {
    /// Append `executable` to the bucket for `arch`.
    ///
    /// Returns `false` (and records nothing) for [`Architecture::Unknown`].
    pub fn record(&mut self, arch: Architecture, executable: PathBuf) -> bool {
        let bucket = match arch {
            Architecture::Intel64 => &mut self.intel,
            Architecture::AppleSilicon => &mut self.apple_silicon,
            Architecture::Universal => &mut self.universal,
            Architecture::Unknown => return false,
        };
        bucket.push(executable);
        true
    }

    /// Sort every bucket by the raw path string, ascending.
    pub fn sort(&mut self) {
        for bucket in [&mut self.intel, &mut self.apple_silicon, &mut self.universal] {
            bucket.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        }
    }

    /// Total number of classified executables
    pub fn len(&self) -> usize {
        self.intel.len() + self.apple_silicon.len() + self.universal.len()
    }

    /// Whether no executable was classified
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bucket containing `executable`, if any
    pub fn architecture_of(&self, executable: &Path) -> Option<Architecture> {
        self.sections()
            .into_iter()
            .find(|(_, _, paths)| paths.iter().any(|p| p == executable))
            .map(|(arch, _, _)| arch)
    }

    /// Render the three sections in fixed order.
    ///
    /// ```text
    /// Intel Binaries
    /// /Applications/Foo.app/Contents/MacOS/Foo
    ///
    /// Apple Binaries
    ///
    /// Universal Binaries
    /// ```
    pub fn render_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for (index, (_, header, paths)) in self.sections().into_iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", header)?;
            for path in paths {
                writeln!(out, "{}", path.display())?;
            }
        }
        Ok(())
    }

    /// Render the buckets as a pretty-printed JSON object.
    pub fn render_json<W: Write>(&self, out: &mut W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out).map_err(serde_json::Error::io)
    }

    fn sections(&self) -> [(Architecture, &'static str, &[PathBuf]); 3] {
        [
            (Architecture::Intel64, INTEL_HEADER, self.intel.as_slice()),
            (Architecture::AppleSilicon, APPLE_HEADER, self.apple_silicon.as_slice()),
            (Architecture::Universal, UNIVERSAL_HEADER, self.universal.as_slice()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_first_match_wins() {
        assert_eq!(
            Architecture::classify("64-bit executable arm64"),
            Architecture::AppleSilicon
        );
        assert_eq!(
            Architecture::classify("64-bit executable x86_64"),
            Architecture::Intel64
        );
        assert_eq!(Architecture::classify("universal"), Architecture::Universal);
        assert_eq!(
            Architecture::classify("executable x86_64"),
            Architecture::Unknown
        );
        assert_eq!(Architecture::classify("unknown"), Architecture::Unknown);
        // arm64 rule is checked before the universal rule
        assert_eq!(
            Architecture::classify("universal executable arm64"),
            Architecture::AppleSilicon
        );
    }

    #[test]
    fn unknown_is_not_recorded() {
        let mut report = ScanReport::default();
        assert!(!report.record(Architecture::Unknown, PathBuf::from("/x")));
        assert!(report.is_empty());
    }

    #[test]
    fn sort_uses_string_order_not_component_order() {
        let mut report = ScanReport::default();
        report.record(Architecture::Intel64, PathBuf::from("/a/b/c"));
        report.record(Architecture::Intel64, PathBuf::from("/a/b-c"));
        report.sort();
        assert_eq!(
            report.intel,
            vec![PathBuf::from("/a/b-c"), PathBuf::from("/a/b/c")]
        );
    }

    #[test]
    fn empty_report_still_prints_headers() {
        let mut out = Vec::new();
        ScanReport::default().render_text(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Intel Binaries\n\nApple Binaries\n\nUniversal Binaries\n"
        );
    }

    #[test]
    fn json_uses_bucket_names() {
        let mut report = ScanReport::default();
        report.record(Architecture::Universal, PathBuf::from("/u"));
        let mut out = Vec::new();
        report.render_json(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["universal"][0], "/u");
        assert_eq!(value["intel"].as_array().map(Vec::len), Some(0));
        assert_eq!(value["apple_silicon"].as_array().map(Vec::len), Some(0));
    }
}
