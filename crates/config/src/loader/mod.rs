//! Section loader for multi-entry JSON config files.
//!
//! Responsibilities:
//! - Split a config file into raw entries (`reader`).
//! - Classify entries by discriminator (`classify`).
//! - Validate the matching entry against the settings schema (`schema`, `validate`).
//! - Merge exactly one validated entry into a `SettingsStore` (`section`).
//!
//! Does NOT handle:
//! - Choosing the config file path or reading CLI flags (caller responsibility).
//! - Environment variable overlay or multi-file layering.
//!
//! Invariants / Assumptions:
//! - Validation always precedes mutation of the store.
//! - At most one entry per file may match the section name.
//! - Errors name the file and, where applicable, the 1-based entry position.

mod classify;
mod error;
mod reader;
mod schema;
mod section;
mod validate;

#[cfg(test)]
mod tests;

use std::path::Path;

use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::store::SettingsStore;

pub use classify::{classify, matches_section, probe};
pub use error::{ConfigError, ConfigErrorKind};
pub use reader::{RawEntry, parse_entries, read_entries};
pub use schema::{FieldSpec, JsonType, SettingsSchema};
pub use section::{LoadReport, SectionLoader};
pub use validate::{FieldIssue, ValidationReport, validate_fields};

/// Compares two names ignoring case.
///
/// Discriminator keys, discriminator values and field keys all use this one
/// rule; it folds full Unicode lowercase, not just ASCII.
pub(crate) fn fold_eq(a: &str, b: &str) -> bool {
    a == b
        || a.chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase))
}

/// Load the `"config": "pseudo"` section of `path` into `store`.
///
/// Shorthand for `SectionLoader::new().load(path, store)`.
pub fn load<S>(path: &Path, store: &SettingsStore<S>) -> Result<LoadReport, ConfigError>
where
    S: Serialize + DeserializeOwned + JsonSchema,
{
    SectionLoader::new().load(path, store)
}
