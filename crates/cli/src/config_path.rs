//! Config file path resolution.
//!
//! Responsibilities:
//! - Pick the single config file to load when none is given explicitly.
//! - Ignore blank path values (e.g. an empty `PSEUDO_CONFIG_PATH`).
//!
//! Does NOT handle:
//! - Reading or parsing the file (see `pseudo_config::SectionLoader`).
//! - Merging several files; exactly one path is returned.
//!
//! Invariants:
//! - An explicit, non-blank path always wins, whether or not it exists.
//! - Candidates are tried in order: `./pseudo.json`, `./pseudo.config`,
//!   `<platform config dir>/pseudo/pseudo.json`.
//! - If no candidate exists, `./pseudo.json` is returned so the load error
//!   names a concrete path.

use std::path::{Path, PathBuf};

use pseudo_config::constants::{ALTERNATE_CONFIG_FILE, APP_NAME, DEFAULT_CONFIG_FILE};

/// Returns the platform config file path, if the platform has one.
///
/// - Linux: `~/.config/pseudo/pseudo.json`
/// - macOS: `~/Library/Application Support/pseudo/pseudo.json`
/// - Windows: `%AppData%\pseudo\config\pseudo.json`
pub fn platform_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().join(DEFAULT_CONFIG_FILE))
}

/// Resolves the config file to load, relative to the working directory.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    resolve_in(Path::new("."), explicit, platform_config_path())
}

/// Resolves the config file to load, looking for defaults in `dir`.
pub fn resolve_in(dir: &Path, explicit: Option<&Path>, platform: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit.filter(|p| !p.to_string_lossy().trim().is_empty()) {
        return path.to_path_buf();
    }

    let candidates = [
        Some(dir.join(DEFAULT_CONFIG_FILE)),
        Some(dir.join(ALTERNATE_CONFIG_FILE)),
        platform,
    ];

    match candidates.into_iter().flatten().find(|p| p.is_file()) {
        Some(found) => {
            tracing::debug!(path = %found.display(), "Using config file");
            found
        }
        None => {
            let fallback = dir.join(DEFAULT_CONFIG_FILE);
            tracing::debug!(path = %fallback.display(), "No config file found, using default path");
            fallback
        }
    }
}
