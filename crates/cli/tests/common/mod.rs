//! Shared test utilities for pseudo-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//! - Write config files into temporary directories.
//!
//! Invariants / Assumptions:
//! - `PSEUDO_CONFIG_PATH` and `RUST_LOG` are cleared so the host cannot
//!   change which file is loaded or what reaches stderr.

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a hermetic `pseudo-cli` command for integration testing.
pub fn pseudo_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pseudo-cli");
    cmd.env_remove("PSEUDO_CONFIG_PATH").env_remove("RUST_LOG");
    cmd
}

/// Writes `content` to `name` inside a fresh temp dir.
///
/// The returned `TempDir` must be kept alive for the file to exist.
pub fn write_config(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}
