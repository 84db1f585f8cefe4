pub mod handlers;

use std::ffi::OsString;

use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("hub")
        .about("GitHub commands layered on top of git")
        .disable_help_subcommand(true)
        .disable_help_flag(true)
        .allow_external_subcommands(true)
        .arg(
            Arg::new("list-cmds")
                .long("list-cmds")
                .value_name("KINDS")
                .require_equals(true)
                .num_args(1)
                .hide(true)
                .help("Comma-separated command kinds to list, as understood by git"),
        )
        .subcommand(cmd_help())
}

fn cmd_help() -> Command {
    Command::new("help")
        .about("Show the help page for a command")
        .disable_help_flag(true)
        .arg(
            Arg::new("command")
                .value_name("COMMAND")
                .help("Command to show help for; use hub-<COMMAND> for extensions to git commands"),
        )
        .arg(
            Arg::new("all")
                .short('a')
                .long("all")
                .action(ArgAction::SetTrue)
                .help("List all hub custom commands"),
        )
        .arg(
            Arg::new("plain-text")
                .long("plain-text")
                .action(ArgAction::SetTrue)
                .help("Skip man page lookup mechanism and display plain help text"),
        )
}

/// Treat a leading `--help` as the `help` command, the way git does.
pub fn normalize_args(args: Vec<OsString>) -> Vec<OsString> {
    let mut args = args;
    if args.get(1).is_some_and(|arg| arg == "--help") {
        args[1] = OsString::from("help");
    }
    args
}
