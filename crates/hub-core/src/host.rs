//! Access to the surrounding system: PATH lookup, environment and blocking
//! process execution.

use std::{ffi::OsString, path::PathBuf, process::Command};

use crate::{Error, Result};

pub trait Host {
    /// Resolve an executable by name on `PATH`, or check a path directly.
    fn find_program(&self, name: &str) -> Option<PathBuf>;

    /// Read an environment variable. Unset and non-UTF-8 values are `None`.
    fn var(&self, key: &str) -> Option<String>;

    /// Run `argv` to completion with inherited stdio.
    ///
    /// Returns whether the process exited successfully. Failing to start it
    /// is an error.
    fn run(&self, argv: &[OsString]) -> Result<bool>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl Host for SystemHost {
    fn find_program(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn run(&self, argv: &[OsString]) -> Result<bool> {
        let (program, args) = argv.split_first().ok_or_else(|| Error::RendererProcess {
            program: String::new(),
            reason: "empty command line".to_string(),
        })?;

        tracing::debug!(?argv, "running external program");
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| Error::RendererProcess {
                program: program.to_string_lossy().into_owned(),
                reason: e.to_string(),
            })?;
        Ok(status.success())
    }
}
