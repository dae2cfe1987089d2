//! Field validation of a matching entry.
//!
//! Responsibilities:
//! - Check every key of an entry against the settings schema.
//! - Collect all field issues into one `ValidationReport`.
//! - Produce the entry's fields keyed by their canonical (serialized) names.
//!
//! Does NOT handle:
//! - Choosing which entry to validate (see `section.rs`).
//! - Decoding values into the settings type (see `store.rs`).
//!
//! Invariants:
//! - Keys match field names ignoring case, at every nesting level; the
//!   discriminator key is skipped at the top level only.
//! - Validation never stops at the first issue.
//! - On success the returned map, nested objects included, only contains
//!   known field names.

use std::collections::HashMap;
use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use super::fold_eq;
use super::schema::{FieldSpec, JsonType, SettingsSchema};

/// A single problem with one field of an entry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldIssue {
    #[error("unknown field `{key}`")]
    UnknownField { key: String },

    #[error("field `{field}` is given more than once (`{first}` and `{second}`)")]
    DuplicateField {
        field: String,
        first: String,
        second: String,
    },

    #[error("field `{field}` expects {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: String,
        found: &'static str,
    },

    #[error("field `{field}` value {value} is below the minimum of {minimum}")]
    BelowMinimum {
        field: String,
        value: String,
        minimum: f64,
    },

    #[error("field `{field}` value {value} is above the maximum of {maximum}")]
    AboveMaximum {
        field: String,
        value: String,
        maximum: f64,
    },
}

/// All field issues found in one entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    issues: Vec<FieldIssue>,
}

impl ValidationReport {
    /// Returns the issues in the order they were found.
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Returns true if no issues were found.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns the number of issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    fn push(&mut self, issue: FieldIssue) {
        self.issues.push(issue);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

/// Validates `entry` against `schema`.
///
/// Returns the entry's fields keyed by canonical name, without the
/// discriminator, or every issue found. Struct-typed fields are checked
/// member by member; issues inside them name the field by its dotted path
/// (`limits.max_items`).
pub fn validate_fields(
    entry: Map<String, Value>,
    schema: &SettingsSchema,
    discriminator_key: &str,
) -> Result<Map<String, Value>, ValidationReport> {
    let mut report = ValidationReport::default();
    let fields = validate_object(entry, schema, "", Some(discriminator_key), &mut report);

    if report.is_empty() {
        Ok(fields)
    } else {
        Err(report)
    }
}

fn validate_object(
    object: Map<String, Value>,
    schema: &SettingsSchema,
    prefix: &str,
    skip_key: Option<&str>,
    report: &mut ValidationReport,
) -> Map<String, Value> {
    let mut fields = Map::new();
    // canonical name -> key as spelled in the entry
    let mut seen: HashMap<String, String> = HashMap::new();

    for (key, value) in object {
        if skip_key.is_some_and(|skip| fold_eq(&key, skip)) {
            continue;
        }

        let Some(spec) = schema.find(&key) else {
            report.push(FieldIssue::UnknownField {
                key: join_path(prefix, &key),
            });
            continue;
        };

        let field = join_path(prefix, &spec.name);
        if let Some(first) = seen.get(&spec.name) {
            report.push(FieldIssue::DuplicateField {
                field,
                first: join_path(prefix, first),
                second: join_path(prefix, &key),
            });
            continue;
        }
        seen.insert(spec.name.clone(), key);

        let before = report.len();
        let value = check_value(spec, &field, value, report);
        if report.len() == before {
            fields.insert(spec.name.clone(), value);
        }
    }

    fields
}

/// Checks `value` against `spec`, returning it with nested keys canonicalized.
fn check_value(
    spec: &FieldSpec,
    field: &str,
    value: Value,
    report: &mut ValidationReport,
) -> Value {
    if !spec.accepts_type(&value) {
        let expected = spec
            .types
            .iter()
            .map(JsonType::to_string)
            .collect::<Vec<_>>()
            .join(" or ");
        report.push(FieldIssue::TypeMismatch {
            field: field.to_string(),
            expected,
            found: JsonType::name_of(&value),
        });
        return value;
    }

    match (value, &spec.properties) {
        (Value::Object(members), Some(nested)) => {
            Value::Object(validate_object(members, nested, field, None, report))
        }
        (value, _) => {
            check_range(spec, field, &value, report);
            value
        }
    }
}

fn check_range(spec: &FieldSpec, field: &str, value: &Value, report: &mut ValidationReport) {
    let Some(number) = value.as_f64() else {
        return;
    };

    if let Some(minimum) = spec.minimum {
        if number < minimum {
            report.push(FieldIssue::BelowMinimum {
                field: field.to_string(),
                value: value.to_string(),
                minimum,
            });
        }
    }
    if let Some(maximum) = spec.maximum {
        if number > maximum {
            report.push(FieldIssue::AboveMaximum {
                field: field.to_string(),
                value: value.to_string(),
                maximum,
            });
        }
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}
