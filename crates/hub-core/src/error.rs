//! Error types for hub help resolution.
//!
//! Exit code scheme:
//! - 1: User error (malformed pager command, bad configuration)
//! - 2: System error (IO, executable lookup, external process)
//! - 3: Not found (documentation missing)

use std::path::PathBuf;

use thiserror::Error;

use crate::shellwords::ShellWordsError;

#[derive(Debug, Error)]
pub enum Error {
    /// Neither documentation candidate exists under the install prefix.
    #[error("No documentation for '{name}' under {}", .prefix.display())]
    DocumentNotFound { name: String, prefix: PathBuf },

    #[error("Invalid pager command '{command}': {source}")]
    RendererArgumentParse {
        command: String,
        #[source]
        source: ShellWordsError,
    },

    #[error("Failed to run {program}: {reason}")]
    RendererProcess { program: String, reason: String },

    /// The running executable could not be resolved to a real path.
    #[error("Cannot resolve program path '{program}': {reason}")]
    ProgramPath { program: String, reason: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn program_path(program: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ProgramPath {
            program: program.into(),
            reason: reason.into(),
        }
    }

    /// Returns the process exit code for this error.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::RendererArgumentParse { .. } | Self::InvalidConfig(_) => 1,
            Self::RendererProcess { .. } | Self::ProgramPath { .. } | Self::Io(_) => 2,
            Self::DocumentNotFound { .. } => 3,
        }
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::DocumentNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
