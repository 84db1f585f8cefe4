//! Selection of the external program that displays a help page.
//!
//! Preference order:
//! 1. the system manual page viewer, if it is on `PATH`
//! 2. the command in `$PAGER`, split with shell quoting rules
//! 3. the built-in default pager (`less -R`)
//!
//! Without a manual page viewer the formatted page cannot be used, so the
//! pagers are pointed at the plain text rendering (`<doc>.txt`) instead.

use std::{ffi::OsString, path::Path};

use crate::{shellwords, Error, Host, Result, Settings};

pub const PAGER_VAR: &str = "PAGER";
const PLAIN_TEXT_SUFFIX: &str = ".txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererChoice {
    /// Manual page viewer resolved on `PATH`.
    ManViewer { program: OsString },
    /// Command line taken from `$PAGER`.
    ConfiguredPager { argv: Vec<String> },
    DefaultPager { argv: Vec<String> },
}

impl RendererChoice {
    /// Leading arguments; the document path is appended after these.
    pub fn argv_prefix(&self) -> Vec<OsString> {
        match self {
            Self::ManViewer { program } => vec![program.clone()],
            Self::ConfiguredPager { argv } | Self::DefaultPager { argv } => {
                argv.iter().map(OsString::from).collect()
            }
        }
    }

    /// Name of the document this renderer can display.
    pub fn effective_doc_name(&self, doc_name: &str) -> String {
        match self {
            Self::ManViewer { .. } => doc_name.to_string(),
            Self::ConfiguredPager { .. } | Self::DefaultPager { .. } => {
                format!("{doc_name}{PLAIN_TEXT_SUFFIX}")
            }
        }
    }

    /// Full command line for displaying `doc_path`.
    pub fn command_line(&self, doc_path: &Path) -> Vec<OsString> {
        let mut argv = self.argv_prefix();
        argv.push(doc_path.as_os_str().to_os_string());
        argv
    }

    /// Program name for diagnostics.
    pub fn program(&self) -> String {
        self.argv_prefix()
            .first()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Choose how to display a help page on this system.
///
/// A malformed `$PAGER` is an error rather than a silent fallback. A `$PAGER`
/// that is empty or contains only whitespace counts as unset.
pub fn select_renderer(host: &impl Host, settings: &Settings) -> Result<RendererChoice> {
    if let Some(program) = host.find_program(&settings.man_program) {
        tracing::debug!(program = %program.display(), "using manual page viewer");
        return Ok(RendererChoice::ManViewer {
            program: program.into_os_string(),
        });
    }

    if let Some(command) = host.var(PAGER_VAR) {
        let argv = shellwords::split(&command).map_err(|source| Error::RendererArgumentParse {
            command: command.clone(),
            source,
        })?;
        if !argv.is_empty() {
            tracing::debug!(?argv, "using $PAGER");
            return Ok(RendererChoice::ConfiguredPager { argv });
        }
    }

    tracing::debug!(argv = ?settings.default_pager, "using default pager");
    Ok(RendererChoice::DefaultPager {
        argv: settings.default_pager.clone(),
    })
}
