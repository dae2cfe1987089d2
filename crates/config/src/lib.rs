//! Section-scoped configuration loading for the pseudo subsystem.
//!
//! This crate selects one named entry out of a JSON config file holding
//! entries for many subsystems, validates it against the settings type,
//! and merges it into a shared `SettingsStore`.

pub mod constants;
mod loader;
mod store;
pub mod types;

pub use loader::{
    ConfigError, ConfigErrorKind, FieldIssue, FieldSpec, JsonType, LoadReport, RawEntry,
    SectionLoader, SettingsSchema, ValidationReport, classify, load, matches_section,
    parse_entries, probe, read_entries, validate_fields,
};
pub use store::SettingsStore;
pub use types::{PseudoLimits, PseudoSettings};
