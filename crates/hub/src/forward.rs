//! Hand-off to the base program for everything hub does not handle itself.

use std::{ffi::OsString, process::Command};

/// Run the base program with `args`, blocking, and return its exit code.
///
/// A base program that cannot be started yields exit code 1.
pub fn forward(base_program: &str, args: &[OsString]) -> i32 {
    tracing::debug!(base_program, ?args, "forwarding to base program");

    match Command::new(base_program).args(args).status() {
        Ok(status) => status.code().unwrap_or(1),
        Err(e) => {
            tracing::warn!(base_program, error = %e, "failed to run base program");
            1
        }
    }
}
