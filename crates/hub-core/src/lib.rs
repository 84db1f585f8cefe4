//! # Hub Core
//!
//! Help resolution for `hub`: command registry, classification of native vs.
//! extension commands, manual page lookup and renderer selection.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, Error>`. Use:
//! - `?` operator for propagation
//! - `map`, `and_then` combinators for transformation
//! - `match` / `map_or` / `unwrap_or_else` for defaults

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod classify;
pub mod config;
mod error;
pub mod host;
pub mod locator;
pub mod registry;
pub mod renderer;
pub mod resolver;
pub mod shellwords;
#[cfg(test)]
mod testing;

pub use classify::{classify, lists_others, native_commands, EXTENSION_PREFIX, TOOL_NAME};
pub use config::Settings;
pub use error::{Error, Result};
pub use host::{Host, SystemHost};
pub use locator::{install_prefix, locate, DocCandidates};
pub use registry::{CommandDescriptor, Registry, RegistryBuilder};
pub use renderer::{select_renderer, RendererChoice};
pub use resolver::{HelpRequest, HelpResolver, Resolution};
pub use shellwords::ShellWordsError;
