//! Architecture probing through the `file(1)` utility.

use super::{ArchitectureProber, extract_architecture};
use crate::error::ProbeError;
use std::path::Path;
use std::process::Command;

/// Default introspection program
const FILE_PROGRAM: &str = "file";

/// Runs `file <path>` and reduces the combined output to a descriptor.
///
/// One process is spawned per call and waited on without a timeout.
#[derive(Clone, Debug)]
pub struct FileCommandProber {
    program: String,
}

impl Default for FileCommandProber {
    fn default() -> Self {
        Self::with_program(FILE_PROGRAM)
    }
}

impl FileCommandProber {
    /// Use a different program with `file`-compatible output.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program this prober invokes
    pub fn program(&self) -> &str {
        &self.program
    }

    fn launch_error(&self, source: std::io::Error) -> ProbeError {
        ProbeError::Launch {
            program: self.program.clone(),
            source,
        }
    }
}

impl ArchitectureProber for FileCommandProber {
    fn probe(&self, executable: &Path) -> Result<String, ProbeError> {
        let program = which::which(&self.program).map_err(|e| {
            self.launch_error(std::io::Error::new(std::io::ErrorKind::NotFound, e))
        })?;

        log::debug!("Running {} on {}", program.display(), executable.display());

        let output = Command::new(&program)
            .arg(executable)
            .output()
            .map_err(|e| self.launch_error(e))?;

        // stdout first, then stderr
        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);

        let text = String::from_utf8(combined).map_err(|source| ProbeError::Decode {
            path: executable.to_path_buf(),
            source,
        })?;

        if !output.status.success() {
            return Err(ProbeError::Failed {
                program: self.program.clone(),
                path: executable.to_path_buf(),
                status: output.status,
                output: text,
            });
        }

        Ok(extract_architecture(&text, executable))
    }
}
