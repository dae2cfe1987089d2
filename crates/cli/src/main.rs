//! pseudo-cli - load and inspect the pseudo section of a JSON config file.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging on stderr.
//! - Run the selected command and exit with a structured exit code.
//!
//! Does NOT handle:
//! - Config loading or validation logic (see `crates/config`).
//!
//! Invariants:
//! - stdout carries command output only; logs and errors go to stderr.
//! - `RUST_LOG` overrides `--verbose` when set.

mod args;
mod commands;
mod config_path;
mod error;

use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_json);

    let exit_code = match commands::run(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn init_logging(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (text_layer, json_layer) = if json {
        (None, Some(fmt::layer().json().with_writer(std::io::stderr)))
    } else {
        (Some(fmt::layer().with_writer(std::io::stderr)), None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text_layer)
        .with(json_layer)
        .init();
}
