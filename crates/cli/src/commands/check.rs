//! Check command: load the section and summarize the entry that was applied.

use anyhow::Result;
use pseudo_config::LoadReport;

use super::load_settings;
use crate::args::Cli;

pub(super) fn run(cli: &Cli) -> Result<()> {
    let (_store, report) = load_settings(cli)?;
    println!("{}", summary(&report));
    Ok(())
}

fn summary(report: &LoadReport) -> String {
    let fields = if report.fields.is_empty() {
        "no fields".to_string()
    } else {
        report.fields.join(", ")
    };

    format!(
        "OK: '{}' entry {} of {} in {} ({})",
        report.section,
        report.position,
        report.entries,
        report.path.display(),
        fields
    )
}
