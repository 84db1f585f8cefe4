//! Native vs. extension classification and native command listing.

use itertools::Itertools;

use crate::{CommandDescriptor, Registry};

/// Name of the tool itself; `help hub` shows its own manual page.
pub const TOOL_NAME: &str = "hub";

/// Prefix that explicitly asks for hub's extension of a base-program command,
/// e.g. `help hub-clone`.
pub const EXTENSION_PREFIX: &str = "hub-";

const FLAG_PREFIX: &str = "--";

/// Resolve a help target to a command descriptor.
///
/// `hub-<name>` resolves to `<name>` whatever its kind. A bare `<name>` only
/// resolves to native commands, so that help for base-program commands hub
/// merely extends is left to the base program.
pub fn classify<'a>(registry: &'a Registry, name: &str) -> Option<&'a CommandDescriptor> {
    match name.strip_prefix(EXTENSION_PREFIX) {
        Some(stripped) => registry.lookup(stripped),
        None => registry.lookup(name).filter(|command| !command.is_extension()),
    }
}

/// Sorted, deduplicated names of commands that exist only in hub.
pub fn native_commands(registry: &Registry) -> Vec<&str> {
    registry
        .all()
        .filter(|(key, command)| !command.is_extension() && !key.starts_with(FLAG_PREFIX))
        .map(|(key, _)| key)
        .sorted_unstable()
        .dedup()
        .collect()
}

/// Whether a `--list-cmds=<kinds>` value asks for "others".
pub fn lists_others(kinds: &str) -> bool {
    kinds.split(',').any(|kind| kind == "others")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use proptest::prelude::*;

    use super::*;

    fn registry() -> Registry {
        let help = CommandDescriptor::extension("help");
        Registry::builder()
            .command(CommandDescriptor::native("pr"))
            .command(CommandDescriptor::native("browse"))
            .command(CommandDescriptor::native("ci-status"))
            .command(CommandDescriptor::extension("clone"))
            .command(CommandDescriptor::extension("--list-cmds"))
            .command(help.clone())
            .alias("--help", help)
            .build()
    }

    #[test]
    fn test_classify_native_bare_name() {
        let registry = registry();
        assert_eq!(
            classify(&registry, "pr").map(CommandDescriptor::name),
            Some("pr")
        );
    }

    #[test]
    fn test_classify_extension_bare_name_is_absent() {
        assert!(classify(&registry(), "clone").is_none());
        assert!(classify(&registry(), "help").is_none());
    }

    #[test]
    fn test_classify_prefixed_name_allows_extensions() {
        let registry = registry();
        assert_eq!(
            classify(&registry, "hub-clone").map(CommandDescriptor::name),
            Some("clone")
        );
        assert_eq!(
            classify(&registry, "hub-pr").map(CommandDescriptor::name),
            Some("pr")
        );
    }

    #[test]
    fn test_classify_unknown() {
        let registry = registry();
        assert!(classify(&registry, "frobnicate").is_none());
        assert!(classify(&registry, "hub-frobnicate").is_none());
        assert!(classify(&registry, "hub-").is_none());
        assert!(classify(&registry, "").is_none());
    }

    #[test]
    fn test_native_commands_sorted_without_flags_or_extensions() {
        assert_eq!(native_commands(&registry()), vec!["browse", "ci-status", "pr"]);
    }

    #[test]
    fn test_native_flag_like_key_excluded() {
        let registry = Registry::builder()
            .command(CommandDescriptor::native("--version"))
            .command(CommandDescriptor::native("api"))
            .build();
        assert_eq!(native_commands(&registry), vec!["api"]);
    }

    #[test]
    fn test_lists_others() {
        assert!(lists_others("others"));
        assert!(lists_others("main,others,config"));
        assert!(!lists_others("main,nohelpers"));
        assert!(!lists_others("other"));
        assert!(!lists_others(""));
    }

    proptest! {
        #[test]
        fn prop_native_listing_invariants(
            entries in prop::collection::vec(("(--)?[a-z]{1,6}", any::<bool>()), 0..24)
        ) {
            let registry = entries
                .iter()
                .fold(Registry::builder(), |builder, (name, extension)| {
                    let command = if *extension {
                        CommandDescriptor::extension(name.as_str())
                    } else {
                        CommandDescriptor::native(name.as_str())
                    };
                    builder.command(command)
                })
                .build();

            let names = native_commands(&registry);
            prop_assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
            for name in &names {
                prop_assert!(!name.starts_with("--"));
                let command = registry.lookup(name);
                prop_assert!(command.is_some_and(|c| !c.is_extension()));
                prop_assert!(classify(&registry, name).is_some());
            }
        }
    }
}
