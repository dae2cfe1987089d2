//! Centralized constants for the pseudo config workspace.
//!
//! This module contains default values used across crates to avoid
//! string literal duplication between the library and the CLI.

// =============================================================================
// Section Selection Defaults
// =============================================================================

/// Default top-level key carrying the discriminator in each config entry.
pub const DEFAULT_DISCRIMINATOR_KEY: &str = "config";

/// Default section name; entries whose discriminator equals this
/// (case-insensitively) belong to the pseudo subsystem.
pub const DEFAULT_SECTION_NAME: &str = "pseudo";

// =============================================================================
// Config File Location Defaults
// =============================================================================

/// Preferred config file name, looked up in the working directory first.
pub const DEFAULT_CONFIG_FILE: &str = "pseudo.json";

/// Alternate config file name accepted in the working directory.
pub const ALTERNATE_CONFIG_FILE: &str = "pseudo.config";

/// Environment variable naming an explicit config file path.
pub const CONFIG_PATH_ENV: &str = "PSEUDO_CONFIG_PATH";

/// Application name used for the platform config directory.
pub const APP_NAME: &str = "pseudo";
