//! Schema command: print the JSON schema of `PseudoSettings`.

use anyhow::{Context, Result};
use pseudo_config::PseudoSettings;

pub(super) fn run() -> Result<()> {
    let schema = schemars::schema_for!(PseudoSettings);
    let output =
        serde_json::to_string_pretty(&schema).context("Failed to serialize settings schema")?;
    println!("{}", output);
    Ok(())
}
