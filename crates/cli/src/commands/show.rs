//! Show command: print the merged settings.

use anyhow::Result;

use super::load_settings;
use crate::args::Cli;

pub(super) fn run(cli: &Cli, pretty: bool) -> Result<()> {
    let (store, _report) = load_settings(cli)?;

    let output = if pretty {
        store.snapshot_pretty()
    } else {
        store.snapshot()
    };
    println!("{}", output);
    Ok(())
}
