//! hub CLI
//!
//! Binary name: `hub`

use std::process;

use hub::cli::handlers::{format_error, run_cli};

fn main() {
    // Logs go to stderr so help output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let code = match run_cli(std::env::args_os().collect()) {
        Ok(code) => code,
        Err(err) => {
            #[allow(clippy::print_stderr)]
            {
                eprintln!("Error: {}", format_error(&err));
            }
            err.downcast_ref::<hub_core::Error>()
                .map_or(1, hub_core::Error::exit_code)
        }
    };

    #[allow(clippy::exit)]
    process::exit(code);
}
