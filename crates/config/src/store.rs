//! Shared settings store.
//!
//! Responsibilities:
//! - Hold the merged runtime settings behind a read/write lock.
//! - Serialize the current state back to JSON for diagnostics (`snapshot`).
//! - Stage a merge of validated fields over the current state and commit it.
//!
//! Does NOT handle:
//! - Reading or selecting config file entries (see `loader` module).
//! - Validating entry fields (see `loader::validate`).
//!
//! Invariants:
//! - The store starts at `S::default()` unless constructed with explicit settings.
//! - Staging never mutates the store; only `commit` replaces the settings.
//! - Lock poisoning is recovered, not propagated.

use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Process-wide runtime settings, shared by handle.
///
/// Callers typically wrap the store in an `Arc` and hand clones of it to
/// whichever components need to read settings. The section loader is the
/// only writer.
#[derive(Debug)]
pub struct SettingsStore<S> {
    inner: RwLock<S>,
}

impl<S: Default> Default for SettingsStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Default> SettingsStore<S> {
    /// Creates a store holding the default (zero) settings.
    pub fn new() -> Self {
        Self::with_settings(S::default())
    }
}

impl<S> SettingsStore<S> {
    /// Creates a store holding the given settings.
    pub fn with_settings(settings: S) -> Self {
        Self {
            inner: RwLock::new(settings),
        }
    }

    /// Runs `f` with shared access to the current settings.
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let guard = self.guard();
        f(&*guard)
    }

    /// Returns a copy of the current settings.
    pub fn get(&self) -> S
    where
        S: Clone,
    {
        self.guard().clone()
    }

    fn guard(&self) -> RwLockReadGuard<'_, S> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the current settings.
    pub(crate) fn commit(&self, settings: S) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = settings;
    }
}

impl<S: Serialize> SettingsStore<S> {
    /// Serializes the current settings to a compact JSON object.
    ///
    /// Returns an empty string if serialization fails.
    pub fn snapshot(&self) -> String {
        match serde_json::to_string(&*self.guard()) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize settings snapshot");
                String::new()
            }
        }
    }

    /// Serializes the current settings to an indented JSON object.
    ///
    /// Same failure behavior as [`SettingsStore::snapshot`].
    pub fn snapshot_pretty(&self) -> String {
        match serde_json::to_string_pretty(&*self.guard()) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize settings snapshot");
                String::new()
            }
        }
    }
}

impl<S: Serialize + DeserializeOwned> SettingsStore<S> {
    /// Builds the settings that would result from merging `fields` over the
    /// current state, without touching the store.
    ///
    /// Fields present in `fields` overwrite current values. Nested objects
    /// are merged key by key; arrays and scalars are replaced.
    pub(crate) fn stage(&self, fields: Map<String, Value>) -> Result<S, serde_json::Error> {
        let mut current = serde_json::to_value(&*self.guard())?;
        merge_value(&mut current, Value::Object(fields));
        serde_json::from_value(current)
    }
}

/// Merges `overlay` into `base` in place.
fn merge_value(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) if existing.is_object() && value.is_object() => {
                        merge_value(existing, value);
                    }
                    _ => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
