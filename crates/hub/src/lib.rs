//! hub - GitHub commands layered on top of git
//!
//! Handles help requests for hub commands and forwards everything else to the
//! base program.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod cli;
pub mod commands;
pub mod forward;
