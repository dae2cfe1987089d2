//! Command handlers for pseudo-cli.
//!
//! Responsibilities:
//! - Route each subcommand to its handler.
//! - Build the `SectionLoader` from global flags.
//!
//! Does NOT handle:
//! - Argument parsing (see `args` module).
//! - Exit code mapping (see `error` module).

mod check;
mod schema;
mod show;

use std::path::PathBuf;

use anyhow::{Context, Result};
use pseudo_config::{LoadReport, PseudoSettings, SectionLoader, SettingsStore};

use crate::args::{Cli, Commands};
use crate::config_path::resolve_config_path;

/// Runs the command selected by `cli`.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let command = cli.command.clone().unwrap_or_default();

    match command {
        Commands::Show { pretty } => show::run(&cli, pretty),
        Commands::Check => check::run(&cli),
        Commands::Schema => schema::run(),
    }
}

/// Loads the selected section into a fresh store.
fn load_settings(cli: &Cli) -> Result<(SettingsStore<PseudoSettings>, LoadReport)> {
    let path: PathBuf = resolve_config_path(cli.config.as_deref());
    let loader = SectionLoader::new()
        .with_discriminator_key(cli.key.clone())
        .with_section_name(cli.section.clone());

    let store = SettingsStore::<PseudoSettings>::new();
    let report = loader
        .load(&path, &store)
        .with_context(|| format!("Failed to load '{}' settings", cli.section))?;

    Ok((store, report))
}
