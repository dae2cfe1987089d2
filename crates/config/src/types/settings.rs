//! Runtime settings for the pseudo subsystem.
//!
//! Responsibilities:
//! - Define the fields accepted in a `"config": "pseudo"` entry.
//! - Serialize durations as whole seconds.
//!
//! Does NOT handle:
//! - Validation of unknown keys (see `loader::validate`).
//!
//! Invariants:
//! - All fields have zero/empty defaults so a partial entry leaves the rest untouched.
//! - Serialized names are the canonical field names reported in validation errors.

use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Runtime options for the pseudo subsystem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PseudoSettings {
    /// Number of times a failed operation is retried.
    pub retries: u32,
    /// Per-operation timeout (serialized as seconds, 0 = no timeout).
    #[serde(rename = "timeout_secs", with = "duration_seconds")]
    #[schemars(with = "u64")]
    pub timeout: Duration,
    /// Emit verbose diagnostics.
    pub verbose: bool,
    /// Optional seed for reproducible runs.
    pub seed: Option<u64>,
    /// Optional output destination.
    pub output: Option<String>,
    /// Free-form labels attached to every run.
    pub tags: Vec<String>,
    /// Size limits.
    pub limits: PseudoLimits,
}

/// Size limits applied by the pseudo subsystem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PseudoLimits {
    /// Maximum number of items per run (0 = unlimited).
    pub max_items: u64,
    /// Maximum payload size in bytes (0 = unlimited).
    pub max_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero_state() {
        let settings = PseudoSettings::default();
        assert_eq!(settings.retries, 0);
        assert_eq!(settings.timeout, Duration::ZERO);
        assert!(!settings.verbose);
        assert!(settings.seed.is_none());
        assert!(settings.tags.is_empty());
        assert_eq!(settings.limits, PseudoLimits::default());
    }

    #[test]
    fn test_timeout_serialized_as_seconds() {
        let settings = PseudoSettings {
            timeout: Duration::from_secs(30),
            ..PseudoSettings::default()
        };

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["timeout_secs"], 30);
        assert!(json.get("timeout").is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: PseudoSettings = serde_json::from_str(r#"{"retries": 4}"#).unwrap();
        assert_eq!(settings.retries, 4);
        assert_eq!(settings.timeout, Duration::ZERO);
    }
}
