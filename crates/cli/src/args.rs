//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not resolve default config file locations (see `config_path` module).
//! - Does not load configuration (see `commands` module).

use clap::{Parser, Subcommand};
use pseudo_config::constants::{
    CONFIG_PATH_ENV, DEFAULT_DISCRIMINATOR_KEY, DEFAULT_SECTION_NAME,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pseudo-cli")]
#[command(about = "Load and inspect the pseudo section of a JSON config file", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  pseudo-cli\n  pseudo-cli --config app.json show --pretty\n  pseudo-cli --section replay check\n  pseudo-cli schema\n"
)]
pub struct Cli {
    /// Path to the config file.
    ///
    /// Defaults to ./pseudo.json, ./pseudo.config, or the platform config
    /// directory, whichever exists first.
    #[arg(short, long, global = true, env = CONFIG_PATH_ENV, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Section name to select (compared ignoring case)
    #[arg(long, global = true, default_value = DEFAULT_SECTION_NAME)]
    pub section: String,

    /// Top-level key holding each entry's section name
    #[arg(long, global = true, default_value = DEFAULT_DISCRIMINATOR_KEY)]
    pub key: String,

    /// Log at debug level when RUST_LOG is not set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Load the section and print the merged settings as JSON (default)
    Show {
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Load the section and report which entry was applied
    Check,
    /// Print the JSON schema entries are validated against
    Schema,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Show { pretty: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults() {
        temp_env::with_var(CONFIG_PATH_ENV, None::<&str>, || {
            let cli = Cli::try_parse_from(["pseudo-cli"]).unwrap();
            assert!(cli.config.is_none());
            assert_eq!(cli.section, "pseudo");
            assert_eq!(cli.key, "config");
            assert!(cli.command.is_none());
        });
    }

    #[test]
    #[serial]
    fn test_config_path_from_env() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("from-env.json"), || {
            let cli = Cli::try_parse_from(["pseudo-cli", "check"]).unwrap();
            assert_eq!(cli.config, Some(PathBuf::from("from-env.json")));
            assert_eq!(cli.command, Some(Commands::Check));
        });
    }

    #[test]
    #[serial]
    fn test_flag_overrides_env() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("from-env.json"), || {
            let cli =
                Cli::try_parse_from(["pseudo-cli", "--config", "flag.json", "show", "--pretty"])
                    .unwrap();
            assert_eq!(cli.config, Some(PathBuf::from("flag.json")));
            assert_eq!(cli.command, Some(Commands::Show { pretty: true }));
        });
    }

    #[test]
    #[serial]
    fn test_global_options_after_subcommand() {
        temp_env::with_var(CONFIG_PATH_ENV, None::<&str>, || {
            let cli = Cli::try_parse_from([
                "pseudo-cli",
                "check",
                "--section",
                "replay",
                "--key",
                "subsystem",
            ])
            .unwrap();
            assert_eq!(cli.section, "replay");
            assert_eq!(cli.key, "subsystem");
        });
    }
}
