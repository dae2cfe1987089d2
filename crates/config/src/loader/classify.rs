//! Entry classification by discriminator.
//!
//! Responsibilities:
//! - Decode only the discriminator field of a raw entry (`probe`).
//! - Decide which subsystem an entry belongs to (`classify`, `matches_section`).
//!
//! Does NOT handle:
//! - Validating the rest of the entry (see `validate.rs`).
//!
//! Invariants:
//! - Key and value are both compared with `fold_eq` (Unicode lowercase).
//! - An exact-case key wins over a differently-cased one when an entry
//!   spells it both ways.
//! - A missing key or a `null` value means "no discriminator", not an error.
//! - Other members are skipped without being materialized.

use std::fmt;

use serde::de::{DeserializeSeed, Deserializer, IgnoredAny, MapAccess, Visitor};

use super::fold_eq;

/// Decodes the discriminator of `json`, looking up `key` case-insensitively.
///
/// Fails if `json` is not an object or the discriminator is neither a string
/// nor `null`.
pub fn probe(json: &str, key: &str) -> Result<Option<String>, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let value = DiscriminatorSeed { key }.deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}

/// Returns the case-folded discriminator of `json`, or `None` when it is
/// absent or cannot be decoded.
pub fn classify(json: &str, key: &str) -> Option<String> {
    probe(json, key).ok().flatten().map(|value| value.to_lowercase())
}

/// Returns true if `discriminator` names `section`, ignoring case.
pub fn matches_section(discriminator: &str, section: &str) -> bool {
    fold_eq(discriminator, section)
}

struct DiscriminatorSeed<'a> {
    key: &'a str,
}

impl<'de> DeserializeSeed<'de> for DiscriminatorSeed<'_> {
    type Value = Option<String>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for DiscriminatorSeed<'_> {
    type Value = Option<String>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a JSON object with an optional string `{}` field", self.key)
    }

    // Precedence when the key is spelled several ways: the exact-case key
    // (the last one if it repeats), otherwise the first differently-cased
    // spelling.
    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut exact: Option<Option<String>> = None;
        let mut folded: Option<Option<String>> = None;

        while let Some(name) = map.next_key::<String>()? {
            if name == self.key {
                exact = Some(map.next_value()?);
            } else if folded.is_none() && fold_eq(&name, self.key) {
                folded = Some(map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(exact.or(folded).flatten())
    }
}
