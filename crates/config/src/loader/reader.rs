//! Config file reading.
//!
//! Responsibilities:
//! - Read a config file and split its top-level JSON array into raw entries.
//! - Number entries by their 1-based position for error messages.
//!
//! Does NOT handle:
//! - Interpreting entry contents (see `classify.rs` and `validate.rs`).
//!
//! Invariants:
//! - Entries are kept as unparsed JSON text; nothing beyond the array
//!   structure is decoded here.
//! - Every returned entry is a JSON object.

use std::path::Path;

use serde_json::value::RawValue;

use super::error::ConfigError;

/// One unparsed entry of a config file.
#[derive(Debug)]
pub struct RawEntry {
    /// 1-based position of the entry within the top-level array.
    pub position: usize,
    /// The entry's JSON text.
    pub raw: Box<RawValue>,
}

impl RawEntry {
    /// Returns the entry's JSON text.
    pub fn json(&self) -> &str {
        self.raw.get()
    }
}

/// Reads `path` and returns its entries in file order.
pub fn read_entries(path: &Path) -> Result<Vec<RawEntry>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_entries(path, &content)
}

/// Splits `content` into entries; `path` is only used for error context.
pub fn parse_entries(path: &Path, content: &str) -> Result<Vec<RawEntry>, ConfigError> {
    let values: Vec<Box<RawValue>> =
        serde_json::from_str(content).map_err(|source| ConfigError::ConfigFileParse {
            path: path.to_path_buf(),
            source,
        })?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let position = index + 1;
            if raw.get().trim_start().starts_with('{') {
                Ok(RawEntry { position, raw })
            } else {
                Err(ConfigError::EntryNotObject {
                    path: path.to_path_buf(),
                    position,
                })
            }
        })
        .collect()
}
