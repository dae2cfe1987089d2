//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` kinds to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 2-6 map one-to-one onto `ConfigErrorKind`.
//! - No config error is retryable; every kind is fixed by editing the file.

use pseudo_config::{ConfigError, ConfigErrorKind};

/// Structured exit codes for pseudo-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Config file missing, unreadable, or not a JSON array of objects.
    FileError = 2,

    /// An entry's discriminator could not be decoded.
    EntryParseError = 3,

    /// More than one entry matched the section.
    DuplicateEntry = 4,

    /// The matching entry has unknown or mistyped fields.
    ///
    /// Scripts should fix the config file and not retry unchanged.
    ValidationError = 5,

    /// No entry matched the section.
    MissingEntry = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<ConfigErrorKind> for ExitCode {
    fn from(kind: ConfigErrorKind) -> Self {
        match kind {
            ConfigErrorKind::FileRead => ExitCode::FileError,
            ConfigErrorKind::EntryParse => ExitCode::EntryParseError,
            ConfigErrorKind::DuplicateEntry => ExitCode::DuplicateEntry,
            ConfigErrorKind::Validation => ExitCode::ValidationError,
            ConfigErrorKind::MissingEntry => ExitCode::MissingEntry,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        ExitCode::from(err.kind())
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
