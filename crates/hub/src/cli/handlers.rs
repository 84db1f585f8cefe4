//! CLI command handlers that bridge between `clap` and the help resolver
//!
//! Every invocation ends in an exit code. Anything hub does not fully handle
//! is forwarded to the base program with the original arguments.

use std::{ffi::OsString, path::PathBuf};

use anyhow::Result;
use clap::ArgMatches;
use hub_core::{HelpRequest, HelpResolver, Host, Resolution, Settings, SystemHost, TOOL_NAME};

use crate::{
    cli::{build_cli, normalize_args},
    commands, forward,
};

/// Parse `args` (including the program name) and run the request.
pub fn run_cli(args: Vec<OsString>) -> Result<i32> {
    let args = normalize_args(args);
    let program_path = args
        .first()
        .map_or_else(|| PathBuf::from(TOOL_NAME), PathBuf::from);
    let forwarded = args.get(1..).unwrap_or_default().to_vec();

    let matches = parse_hub_args(&args);

    let host = SystemHost;
    let settings = Settings::load(&host)?;
    let registry = commands::registry();
    let resolver = HelpResolver::new(&registry, &settings, &host);

    let resolution = match matches {
        Some(matches) => dispatch(&resolver, &matches, program_path)?,
        None => Resolution::FallThrough,
    };

    Ok(finish(resolution, &settings.base_program, &forwarded))
}

/// Parse the arguments hub understands.
///
/// Anything clap rejects belongs to the base program, so a parse failure is
/// `None` rather than a usage error.
fn parse_hub_args(args: &[OsString]) -> Option<ArgMatches> {
    build_cli()
        .try_get_matches_from(args.iter().cloned())
        .map_err(|e| tracing::debug!(kind = %e.kind(), "arguments left to the base program"))
        .ok()
}

fn dispatch<H: Host>(
    resolver: &HelpResolver<'_, H>,
    matches: &ArgMatches,
    program_path: PathBuf,
) -> Result<Resolution> {
    if let Some(kinds) = matches.get_one::<String>("list-cmds") {
        return Ok(resolver.list_cmds(kinds));
    }
    match matches.subcommand() {
        Some(("help", sub_m)) => handle_help(resolver, sub_m, program_path),
        _ => Ok(Resolution::FallThrough),
    }
}

pub fn handle_help<H: Host>(
    resolver: &HelpResolver<'_, H>,
    sub_m: &ArgMatches,
    program_path: PathBuf,
) -> Result<Resolution> {
    let request = HelpRequest {
        target: sub_m.get_one::<String>("command").cloned(),
        all: sub_m.get_flag("all"),
        plain_text: sub_m.get_flag("plain-text"),
        program_path,
    };
    Ok(resolver.resolve(&request)?)
}

/// Carry out a resolution and return the process exit code.
fn finish(resolution: Resolution, base_program: &str, forwarded: &[OsString]) -> i32 {
    match resolution {
        Resolution::Exit(code) => code,
        Resolution::Replace(text) => {
            print!("{text}");
            0
        }
        Resolution::Append(text) => {
            let code = forward::forward(base_program, forwarded);
            print!("{text}");
            code
        }
        Resolution::FallThrough => forward::forward(base_program, forwarded),
    }
}

/// Format an error for user display (no stack traces)
pub fn format_error(err: &anyhow::Error) -> String {
    let msg = err.to_string();
    if let Some(source) = err.source() {
        let source_msg = source.to_string();
        if !msg.contains(&source_msg) && !source_msg.is_empty() {
            return format!("{msg}\nCause: {source_msg}");
        }
    }
    msg
}
