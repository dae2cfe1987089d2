//! Source tree helpers shared by the architecture tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Finds the workspace root by walking up to a Cargo.toml with `[workspace]`.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    let mut dir = manifest_dir.as_path();
    loop {
        let is_workspace = fs::read_to_string(dir.join("Cargo.toml"))
            .map(|content| content.contains("[workspace]"))
            .unwrap_or(false);
        if is_workspace {
            return dir.to_path_buf();
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => return manifest_dir,
        }
    }
}

/// Returns every `.rs` file under `crates/`, skipping build output and
/// this crate.
pub fn crate_sources(root: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(root.join("crates"))
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name();
            name != "target" && name != "architecture-tests"
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Returns true if `path` holds only test code.
#[allow(dead_code)]
pub fn is_test_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    path_str.contains("/tests/") || path_str.ends_with("_tests.rs")
}
