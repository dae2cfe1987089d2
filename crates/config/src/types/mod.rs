//! Settings type definitions for the pseudo subsystem.
//!
//! Responsibilities:
//! - Define `PseudoSettings`, the runtime options merged from a config file.
//! - Provide serialization helpers for `Duration` fields.
//!
//! Does NOT handle:
//! - Selecting the section out of a config file (see `loader` module).
//! - Holding the live, shared settings (see `store` module).
//!
//! Invariants:
//! - `PseudoSettings::default()` is the zero state: no retries, no timeout, empty lists.
//! - Every field derives its JSON schema so the loader can validate entries against it.

mod settings;

pub use settings::{PseudoLimits, PseudoSettings};
