//! Documentation lookup relative to the hub install prefix.
//!
//! Pages are searched in a fixed order:
//! 1. `<prefix>/man/<doc>`
//! 2. `<prefix>/share/man/man1/<doc>`

use std::path::{Path, PathBuf};

use crate::{Error, Host, Result};

/// Ordered candidate locations for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocCandidates {
    paths: [PathBuf; 2],
}

impl DocCandidates {
    pub fn new(doc_name: &str, install_prefix: &Path) -> Self {
        Self {
            paths: [
                install_prefix.join("man").join(doc_name),
                install_prefix
                    .join("share")
                    .join("man")
                    .join("man1")
                    .join(doc_name),
            ],
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// First candidate that can be stat'ed.
    pub fn first_existing(&self) -> Option<&Path> {
        self.paths
            .iter()
            .inspect(|path| tracing::debug!(path = %path.display(), "checking documentation candidate"))
            .find(|path| path.metadata().is_ok())
            .map(PathBuf::as_path)
    }
}

/// Find `doc_name` under `install_prefix`.
pub fn locate(doc_name: &str, install_prefix: &Path) -> Result<PathBuf> {
    DocCandidates::new(doc_name, install_prefix)
        .first_existing()
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::DocumentNotFound {
            name: doc_name.to_string(),
            prefix: install_prefix.to_path_buf(),
        })
}

/// Derive the install prefix from the path the program was invoked as.
///
/// A bare name is resolved on `PATH`. The result is made absolute with
/// symlinks resolved, and the prefix is the parent of its directory, so
/// `/usr/local/bin/hub` yields `/usr/local`.
pub fn install_prefix(program: &Path, host: &impl Host) -> Result<PathBuf> {
    let display = program.display().to_string();

    let resolved = if program.components().count() > 1 {
        program.to_path_buf()
    } else {
        program
            .to_str()
            .and_then(|name| host.find_program(name))
            .ok_or_else(|| Error::program_path(&display, "not found in PATH"))?
    };

    let executable = std::fs::canonicalize(&resolved)
        .map_err(|e| Error::program_path(&display, e.to_string()))?;

    let bin_dir = executable
        .parent()
        .ok_or_else(|| Error::program_path(&display, "executable has no parent directory"))?;

    Ok(bin_dir.parent().unwrap_or(bin_dir).to_path_buf())
}
