//! Help resolution
//!
//! Decides, for one `help` invocation, between the tool's own manual page,
//! a command's manual page, inline help text, the native command listing, or
//! leaving the request to the base program.
//!
//! The resolver never exits the process. A page that was handed to an
//! external renderer comes back as [`Resolution::Exit`] and the caller is
//! expected to terminate with that code straight away.

use std::path::PathBuf;

use crate::{
    classify::{classify, lists_others, native_commands, EXTENSION_PREFIX, TOOL_NAME},
    locator, renderer, Host, Registry, Result, Settings,
};

/// Inputs of one help invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpRequest {
    /// Command to show help for, possibly `hub-` prefixed.
    pub target: Option<String>,
    /// `--all`: list every hub command.
    pub all: bool,
    /// `--plain-text`: skip manual page lookup.
    pub plain_text: bool,
    /// Path the running program was invoked as.
    pub program_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Forward the request to the base program, then print this text.
    Append(String),
    /// Print this text instead of forwarding.
    Replace(String),
    /// An external renderer ran; terminate with this exit code.
    Exit(i32),
    /// Not a hub help request.
    FallThrough,
}

pub struct HelpResolver<'a, H: Host> {
    registry: &'a Registry,
    settings: &'a Settings,
    host: &'a H,
}

impl<'a, H: Host> HelpResolver<'a, H> {
    pub const fn new(registry: &'a Registry, settings: &'a Settings, host: &'a H) -> Self {
        Self {
            registry,
            settings,
            host,
        }
    }

    /// Resolve a help request.
    ///
    /// Errors are fatal. They only occur when the tool's own manual page
    /// cannot be shown, since that page has no inline fallback.
    pub fn resolve(&self, request: &HelpRequest) -> Result<Resolution> {
        if request.all {
            return Ok(Resolution::Append(self.custom_commands_block()));
        }

        let Some(target) = request.target.as_deref() else {
            if request.plain_text {
                return Ok(Resolution::FallThrough);
            }
            return Ok(Resolution::Append(self.overview()));
        };

        if target == TOOL_NAME {
            return self.display_man_page(&format!("{TOOL_NAME}.1"), request);
        }

        let Some(command) = classify(self.registry, target) else {
            tracing::debug!(command = target, "not a hub command, leaving help to base program");
            return Ok(Resolution::FallThrough);
        };

        if !request.plain_text {
            let page = format!("{EXTENSION_PREFIX}{}.1", command.name());
            match self.display_man_page(&page, request) {
                Ok(resolution) => return Ok(resolution),
                Err(e) => tracing::debug!(error = %e, "falling back to inline help"),
            }
        }

        Ok(Resolution::Replace(format!("{}\n", command.help_text())))
    }

    /// Handle a `--list-cmds=<kinds>` directive.
    pub fn list_cmds(&self, kinds: &str) -> Resolution {
        if lists_others(kinds) {
            Resolution::Append(format!("{}\n", native_commands(self.registry).join("\n")))
        } else {
            Resolution::FallThrough
        }
    }

    /// Top-level summary of hub's own commands.
    pub fn overview(&self) -> String {
        let lines = native_commands(self.registry)
            .into_iter()
            .filter_map(|name| self.registry.lookup(name))
            .map(|command| {
                format!("   {:<14} {}", command.name(), command.summary())
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!("\nThese GitHub commands are provided by {TOOL_NAME}:\n\n{lines}\n\n")
    }

    fn custom_commands_block(&self) -> String {
        format!(
            "\n{TOOL_NAME} custom commands\n\n  {}\n",
            native_commands(self.registry).join("  ")
        )
    }

    fn display_man_page(&self, doc_name: &str, request: &HelpRequest) -> Result<Resolution> {
        let renderer = renderer::select_renderer(self.host, self.settings)?;
        let doc_name = renderer.effective_doc_name(doc_name);
        let prefix = self.install_prefix(request)?;
        let page = locator::locate(&doc_name, &prefix)?;

        let argv = renderer.command_line(&page);
        let code = match self.host.run(&argv) {
            Ok(true) => 0,
            Ok(false) => 1,
            Err(e) => {
                tracing::warn!(program = %renderer.program(), error = %e, "help renderer failed to start");
                1
            }
        };
        tracing::debug!(page = %page.display(), code, "help page rendered");
        Ok(Resolution::Exit(code))
    }

    fn install_prefix(&self, request: &HelpRequest) -> Result<PathBuf> {
        self.settings.install_prefix.clone().map_or_else(
            || locator::install_prefix(&request.program_path, self.host),
            Ok,
        )
    }
}
