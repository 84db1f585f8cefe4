//! Command registry
//!
//! An explicitly constructed, immutable map from command name to
//! [`CommandDescriptor`]. Built once at startup with [`RegistryBuilder`] and
//! passed by reference to whatever needs to look commands up.

use std::collections::HashMap;

/// Read-only description of one hub command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    name: String,
    summary: String,
    usage: String,
    long: String,
    is_extension: bool,
}

impl CommandDescriptor {
    /// A command that exists only in hub.
    pub fn native(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: String::new(),
            usage: String::new(),
            long: String::new(),
            is_extension: false,
        }
    }

    /// A command that augments the base program's subcommand of the same name.
    pub fn extension(name: impl Into<String>) -> Self {
        Self {
            is_extension: true,
            ..Self::native(name)
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Usage lines, one invocation per line, without the program name.
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    pub fn with_long(mut self, long: impl Into<String>) -> Self {
        self.long = long.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub const fn is_extension(&self) -> bool {
        self.is_extension
    }

    /// Render the inline help page: usage block followed by the long description.
    ///
    /// ```text
    /// Usage: hub pr list [-s <STATE>]
    ///        hub pr checkout <PR-NUMBER>
    ///
    /// Manage GitHub Pull Requests.
    /// ```
    pub fn help_text(&self) -> String {
        let usage = self
            .usage
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(i, line)| {
                let lead = if i == 0 { "Usage:" } else { "      " };
                format!("{lead} hub {line}")
            })
            .collect::<Vec<_>>()
            .join("\n");

        let long = self.long.trim();
        match (usage.is_empty(), long.is_empty()) {
            (true, _) => long.to_string(),
            (false, true) => usage,
            (false, false) => format!("{usage}\n\n{long}"),
        }
    }
}

/// Immutable command lookup table.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    commands: HashMap<String, CommandDescriptor>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Exact-name lookup. Absence is a normal outcome.
    pub fn lookup(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.get(name)
    }

    /// Every `(key, descriptor)` pair, in no particular order.
    ///
    /// A descriptor registered under an alias appears once per key.
    pub fn all(&self) -> impl Iterator<Item = (&str, &CommandDescriptor)> {
        self.commands
            .iter()
            .map(|(key, command)| (key.as_str(), command))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    commands: HashMap<String, CommandDescriptor>,
}

impl RegistryBuilder {
    /// Register a command under its own name. A later registration with the
    /// same key replaces the earlier one.
    pub fn command(self, command: CommandDescriptor) -> Self {
        let key = command.name.clone();
        self.alias(key, command)
    }

    /// Register a command under an additional key, e.g. `--help` for `help`.
    pub fn alias(mut self, key: impl Into<String>, command: CommandDescriptor) -> Self {
        let key = key.into();
        tracing::trace!(key = %key, command = %command.name, "registering command");
        self.commands.insert(key, command);
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            commands: self.commands,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    fn pr() -> CommandDescriptor {
        CommandDescriptor::native("pr")
            .with_summary("List or checkout GitHub pull requests")
            .with_usage("\npr list [-s <STATE>]\npr checkout <PR-NUMBER>\n")
            .with_long("Manage GitHub Pull Requests for the current repository.")
    }

    #[test]
    fn test_lookup_exact_name() {
        let registry = Registry::builder()
            .command(pr())
            .command(CommandDescriptor::extension("clone"))
            .build();

        assert_eq!(registry.lookup("pr").map(CommandDescriptor::name), Some("pr"));
        assert!(registry.lookup("clone").is_some_and(CommandDescriptor::is_extension));
        assert!(registry.lookup("PR").is_none());
        assert!(registry.lookup("").is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_alias_shares_descriptor() {
        let help = CommandDescriptor::extension("help");
        let registry = Registry::builder()
            .command(help.clone())
            .alias("--help", help)
            .build();

        assert_eq!(
            registry.lookup("--help").map(CommandDescriptor::name),
            Some("help")
        );
        assert_eq!(registry.all().count(), 2);
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::default();
        assert!(registry.is_empty());
        assert!(registry.lookup("pr").is_none());
    }

    #[test]
    fn test_help_text_aligns_usage_lines() {
        assert_eq!(
            pr().help_text(),
            "Usage: hub pr list [-s <STATE>]\n       hub pr checkout <PR-NUMBER>\n\n\
             Manage GitHub Pull Requests for the current repository."
        );
    }

    #[test]
    fn test_help_text_without_usage() {
        let command = CommandDescriptor::native("sync").with_long("  Fetch and update.\n");
        assert_eq!(command.help_text(), "Fetch and update.");
    }

    #[test]
    fn test_help_text_without_long() {
        let command = CommandDescriptor::native("sync").with_usage("sync");
        assert_eq!(command.help_text(), "Usage: hub sync");
    }
}
