//! Error types for section loading.
//!
//! Responsibilities:
//! - Define error variants for every way a section load can fail.
//! - Classify variants into the coarse kinds callers branch on (`ConfigErrorKind`).
//!
//! Does NOT handle:
//! - Formatting individual field issues (see `validate.rs`).
//! - Mapping errors to process exit codes (see the CLI crate).
//!
//! Invariants:
//! - Every variant carries the config file path.
//! - Entry-scoped variants carry the 1-based position of the offending entry.
//! - Underlying causes are chained through `#[source]`, never flattened away.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use super::validate::ValidationReport;

/// Errors that can occur while loading a config section.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: expected a JSON array of objects")]
    ConfigFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config file at {path} entry {position} is not a JSON object")]
    EntryNotObject { path: PathBuf, position: usize },

    #[error("Failed to parse config file {path} entry {position}")]
    EntryParse {
        path: PathBuf,
        position: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate '{section}' entry in config file {path} at entry {position}")]
    DuplicateEntry {
        path: PathBuf,
        section: String,
        position: usize,
    },

    #[error("Invalid '{section}' entry in config file {path} at entry {position}: {report}")]
    Validation {
        path: PathBuf,
        section: String,
        position: usize,
        report: ValidationReport,
    },

    #[error("Failed to apply '{section}' entry in config file {path} at entry {position}")]
    Decode {
        path: PathBuf,
        section: String,
        position: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("No '{section}' entry in config file {path}")]
    MissingEntry { path: PathBuf, section: String },
}

/// Coarse classification of [`ConfigError`] variants.
///
/// None of these are transient; every kind is fixed by editing the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// The file is missing, unreadable, or not a JSON array of objects.
    FileRead,
    /// An entry's discriminator could not be decoded.
    EntryParse,
    /// A second entry matched the section name.
    DuplicateEntry,
    /// The matching entry has unknown or mistyped fields.
    Validation,
    /// No entry matched the section name.
    MissingEntry,
}

impl ConfigError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ConfigErrorKind {
        match self {
            ConfigError::ConfigFileRead { .. }
            | ConfigError::ConfigFileParse { .. }
            | ConfigError::EntryNotObject { .. } => ConfigErrorKind::FileRead,
            ConfigError::EntryParse { .. } => ConfigErrorKind::EntryParse,
            ConfigError::DuplicateEntry { .. } => ConfigErrorKind::DuplicateEntry,
            ConfigError::Validation { .. } | ConfigError::Decode { .. } => {
                ConfigErrorKind::Validation
            }
            ConfigError::MissingEntry { .. } => ConfigErrorKind::MissingEntry,
        }
    }

    /// Returns the config file path this error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::ConfigFileRead { path, .. }
            | ConfigError::ConfigFileParse { path, .. }
            | ConfigError::EntryNotObject { path, .. }
            | ConfigError::EntryParse { path, .. }
            | ConfigError::DuplicateEntry { path, .. }
            | ConfigError::Validation { path, .. }
            | ConfigError::Decode { path, .. }
            | ConfigError::MissingEntry { path, .. } => path,
        }
    }

    /// Returns the 1-based entry position, for entry-scoped errors.
    pub fn position(&self) -> Option<usize> {
        match self {
            ConfigError::EntryNotObject { position, .. }
            | ConfigError::EntryParse { position, .. }
            | ConfigError::DuplicateEntry { position, .. }
            | ConfigError::Validation { position, .. }
            | ConfigError::Decode { position, .. } => Some(*position),
            ConfigError::ConfigFileRead { .. }
            | ConfigError::ConfigFileParse { .. }
            | ConfigError::MissingEntry { .. } => None,
        }
    }

    /// Returns the validation report, if this is a validation failure.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            ConfigError::Validation { report, .. } => Some(report),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigErrorKind::FileRead => "file read error",
            ConfigErrorKind::EntryParse => "entry parse error",
            ConfigErrorKind::DuplicateEntry => "duplicate entry",
            ConfigErrorKind::Validation => "validation error",
            ConfigErrorKind::MissingEntry => "missing entry",
        };
        f.write_str(name)
    }
}
