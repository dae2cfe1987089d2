//! Section loader implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `SectionLoader` (discriminator key, section name).
//! - Select exactly one entry of a config file by discriminator.
//! - Validate the selected entry before merging it into a `SettingsStore`.
//!
//! Does NOT handle:
//! - Splitting the file into entries (delegated to reader.rs).
//! - Field-level checks (delegated to validate.rs).
//! - Choosing which file to load (caller responsibility).
//!
//! Invariants / Assumptions:
//! - Entries are processed in file order; positions are 1-based.
//! - Entries for other sections are skipped regardless of their shape, as
//!   long as their discriminator decodes.
//! - A second matching entry fails the load even if the first was valid.
//! - The store is written once, after the whole file has been scanned, and
//!   only if the load succeeds.

use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::classify::{matches_section, probe};
use super::error::ConfigError;
use super::reader::{RawEntry, read_entries};
use super::schema::SettingsSchema;
use super::validate::validate_fields;
use crate::constants::{DEFAULT_DISCRIMINATOR_KEY, DEFAULT_SECTION_NAME};
use crate::store::SettingsStore;

/// Summary of a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Config file that was loaded.
    pub path: PathBuf,
    /// Section name that was matched.
    pub section: String,
    /// 1-based position of the matching entry.
    pub position: usize,
    /// Number of entries in the file.
    pub entries: usize,
    /// Canonical names of the fields the entry set.
    pub fields: Vec<String>,
}

/// Loads one named section of a multi-entry JSON config file.
#[derive(Debug, Clone)]
pub struct SectionLoader {
    discriminator_key: String,
    section_name: String,
}

impl Default for SectionLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionLoader {
    /// Create a loader for the `"config": "pseudo"` section.
    pub fn new() -> Self {
        Self {
            discriminator_key: DEFAULT_DISCRIMINATOR_KEY.to_string(),
            section_name: DEFAULT_SECTION_NAME.to_string(),
        }
    }

    /// Set the top-level key holding each entry's discriminator.
    pub fn with_discriminator_key(mut self, key: impl Into<String>) -> Self {
        self.discriminator_key = key.into();
        self
    }

    /// Set the section name to select (compared ignoring case).
    pub fn with_section_name(mut self, name: impl Into<String>) -> Self {
        self.section_name = name.into();
        self
    }

    /// Returns the discriminator key.
    pub fn discriminator_key(&self) -> &str {
        &self.discriminator_key
    }

    /// Returns the section name.
    pub fn section_name(&self) -> &str {
        &self.section_name
    }

    /// Load the section from the file at `path` into `store`.
    ///
    /// On any error the store keeps its prior settings.
    pub fn load<S>(&self, path: &Path, store: &SettingsStore<S>) -> Result<LoadReport, ConfigError>
    where
        S: Serialize + DeserializeOwned + JsonSchema,
    {
        let entries = read_entries(path)?;
        self.load_entries(path, &entries, store)
    }

    /// Load the section from already-split `entries`.
    ///
    /// `path` is only used for error context and the returned report.
    pub fn load_entries<S>(
        &self,
        path: &Path,
        entries: &[RawEntry],
        store: &SettingsStore<S>,
    ) -> Result<LoadReport, ConfigError>
    where
        S: Serialize + DeserializeOwned + JsonSchema,
    {
        let schema = SettingsSchema::of::<S>();
        let mut staged: Option<(S, LoadReport)> = None;

        for entry in entries {
            let discriminator =
                probe(entry.json(), &self.discriminator_key).map_err(|source| {
                    ConfigError::EntryParse {
                        path: path.to_path_buf(),
                        position: entry.position,
                        source,
                    }
                })?;

            let matched = discriminator
                .as_deref()
                .is_some_and(|d| matches_section(d, &self.section_name));
            if !matched {
                tracing::debug!(
                    path = %path.display(),
                    position = entry.position,
                    discriminator = discriminator.as_deref().unwrap_or(""),
                    section = %self.section_name,
                    "Skipping config entry for another section"
                );
                continue;
            }

            if staged.is_some() {
                return Err(ConfigError::DuplicateEntry {
                    path: path.to_path_buf(),
                    section: self.section_name.clone(),
                    position: entry.position,
                });
            }

            let object: Map<String, Value> =
                serde_json::from_str(entry.json()).map_err(|source| ConfigError::EntryParse {
                    path: path.to_path_buf(),
                    position: entry.position,
                    source,
                })?;

            let fields = validate_fields(object, &schema, &self.discriminator_key).map_err(
                |report| ConfigError::Validation {
                    path: path.to_path_buf(),
                    section: self.section_name.clone(),
                    position: entry.position,
                    report,
                },
            )?;

            let field_names: Vec<String> = fields.keys().cloned().collect();
            let settings = store.stage(fields).map_err(|source| ConfigError::Decode {
                path: path.to_path_buf(),
                section: self.section_name.clone(),
                position: entry.position,
                source,
            })?;

            staged = Some((
                settings,
                LoadReport {
                    path: path.to_path_buf(),
                    section: self.section_name.clone(),
                    position: entry.position,
                    entries: entries.len(),
                    fields: field_names,
                },
            ));
        }

        let Some((settings, report)) = staged else {
            return Err(ConfigError::MissingEntry {
                path: path.to_path_buf(),
                section: self.section_name.clone(),
            });
        };

        store.commit(settings);
        tracing::info!(
            path = %report.path.display(),
            section = %report.section,
            position = report.position,
            fields = report.fields.len(),
            "Loaded config section"
        );

        Ok(report)
    }
}
