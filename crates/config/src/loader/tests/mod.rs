//! Tests for the section loader.
//!
//! Responsibilities:
//! - Test section selection (matching, skipping, duplicates, missing entries).
//! - Test validation-before-merge and store immutability on failure.
//! - Test error context (path, position, kind).
//!
//! Does NOT handle:
//! - Classifier and validator unit tests (see `classify.rs`, `validate.rs`).
//!
//! Invariants:
//! - Every test uses a fresh `SettingsStore`.
//! - Config files live in `tempfile` directories and are cleaned up automatically.

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tempfile::TempDir;


/// Settings shape used by the examples: `{retries int}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RetrySettings {
    pub retries: i64,
}

/// Writes `content` to a config file inside a fresh temp directory.
///
/// The directory must be kept alive for as long as the path is used.
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("pseudo.json");
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}
