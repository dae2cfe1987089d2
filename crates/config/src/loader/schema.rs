//! Field schema derived from a settings type.
//!
//! Responsibilities:
//! - Turn the `JsonSchema` derived for a settings type into a tree of fields
//!   with their accepted JSON types and numeric bounds.
//! - Keep the member fields of struct-typed fields so nested keys can be
//!   checked too.
//!
//! Does NOT handle:
//! - Checking entries against the fields (see `validate.rs`).
//!
//! Invariants:
//! - Field names are the serialized (serde) names.
//! - A field whose type cannot be determined from the schema accepts any
//!   JSON value; decoding into the settings type is the final check.
//! - Only objects with declared `properties` get nested fields; maps
//!   (`additionalProperties`) and array items are not descended into.
//! - A `$ref` already being expanded is not expanded again, so recursive
//!   types terminate.

use std::fmt;

use super::fold_eq;

use schemars::JsonSchema;
use serde_json::{Map, Value};

/// JSON value types a field may accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    Null,
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl JsonType {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "null" => Some(JsonType::Null),
            "boolean" => Some(JsonType::Boolean),
            "integer" => Some(JsonType::Integer),
            "number" => Some(JsonType::Number),
            "string" => Some(JsonType::String),
            "array" => Some(JsonType::Array),
            "object" => Some(JsonType::Object),
            _ => None,
        }
    }

    /// Returns the name used for `value`'s type in error messages.
    pub fn name_of(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(n) if n.is_f64() => "number",
            Value::Number(_) => "integer",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Returns true if `value` is of this type.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            JsonType::Null => value.is_null(),
            JsonType::Boolean => value.is_boolean(),
            JsonType::Integer => value.is_i64() || value.is_u64(),
            JsonType::Number => value.is_number(),
            JsonType::String => value.is_string(),
            JsonType::Array => value.is_array(),
            JsonType::Object => value.is_object(),
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonType::Null => "null",
            JsonType::Boolean => "boolean",
            JsonType::Integer => "integer",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        };
        f.write_str(name)
    }
}

/// One top-level field of a settings type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Serialized field name.
    pub name: String,
    /// Accepted JSON types; empty means any.
    pub types: Vec<JsonType>,
    /// Inclusive lower bound for numeric values.
    pub minimum: Option<f64>,
    /// Inclusive upper bound for numeric values.
    pub maximum: Option<f64>,
    /// Member fields when the value is a struct-like object.
    pub properties: Option<SettingsSchema>,
}

impl FieldSpec {
    /// Returns true if `value`'s type is accepted.
    pub fn accepts_type(&self, value: &Value) -> bool {
        self.types.is_empty() || self.types.iter().any(|t| t.accepts(value))
    }
}

/// Top-level fields of a settings type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsSchema {
    fields: Vec<FieldSpec>,
}

impl SettingsSchema {
    /// Derives the schema of `S`.
    pub fn of<S: JsonSchema>() -> Self {
        let schema = schemars::schema_for!(S);
        Self::from_value(schema.as_value())
    }

    /// Builds a schema from a JSON Schema document.
    pub fn from_value(root: &Value) -> Self {
        let defs = root.get("$defs").and_then(Value::as_object);
        let mut expanding = Vec::new();
        root.get("properties")
            .and_then(Value::as_object)
            .map(|properties| build(properties, defs, &mut expanding))
            .unwrap_or_default()
    }

    /// Returns all fields.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up a field by exact name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Looks up a field by name ignoring case; an exact match wins.
    pub fn find(&self, key: &str) -> Option<&FieldSpec> {
        self.field(key)
            .or_else(|| self.fields.iter().find(|f| fold_eq(&f.name, key)))
    }
}

type Defs<'a> = Option<&'a Map<String, Value>>;

fn build(
    properties: &Map<String, Value>,
    defs: Defs<'_>,
    expanding: &mut Vec<String>,
) -> SettingsSchema {
    let fields = properties
        .iter()
        .map(|(name, property)| field_spec(name, property, defs, expanding))
        .collect();
    SettingsSchema { fields }
}

fn field_spec(
    name: &str,
    property: &Value,
    defs: Defs<'_>,
    expanding: &mut Vec<String>,
) -> FieldSpec {
    let mut types = Vec::new();
    collect_types(property, defs, &mut types);

    FieldSpec {
        name: name.to_string(),
        types,
        minimum: property.get("minimum").and_then(Value::as_f64),
        maximum: property.get("maximum").and_then(Value::as_f64),
        properties: nested_schema(property, defs, expanding),
    }
}

/// Returns the member fields of the first object branch of `schema`.
fn nested_schema(
    schema: &Value,
    defs: Defs<'_>,
    expanding: &mut Vec<String>,
) -> Option<SettingsSchema> {
    let reference = def_name(schema);
    if let Some(name) = reference {
        if expanding.iter().any(|n| n == name) {
            return None;
        }
    }

    let resolved = resolve_ref(schema, defs);
    if let Some(properties) = resolved.get("properties").and_then(Value::as_object) {
        if let Some(name) = reference {
            expanding.push(name.to_string());
        }
        let nested = build(properties, defs, expanding);
        if reference.is_some() {
            expanding.pop();
        }
        return Some(nested);
    }

    resolved
        .get("anyOf")
        .or_else(|| resolved.get("oneOf"))
        .and_then(Value::as_array)
        .and_then(|branches| {
            branches
                .iter()
                .find_map(|branch| nested_schema(branch, defs, expanding))
        })
}

/// Collects the JSON types `schema` accepts into `types`.
///
/// Leaves `types` empty when any branch is unconstrained.
fn collect_types(schema: &Value, defs: Defs<'_>, types: &mut Vec<JsonType>) {
    let resolved = resolve_ref(schema, defs);

    match resolved.get("type") {
        Some(Value::String(name)) => push_type(types, name),
        Some(Value::Array(names)) => {
            for name in names.iter().filter_map(Value::as_str) {
                push_type(types, name);
            }
        }
        _ => {
            let branches = resolved
                .get("anyOf")
                .or_else(|| resolved.get("oneOf"))
                .and_then(Value::as_array);

            match branches {
                Some(branches) => {
                    let mut branch_types = Vec::new();
                    for branch in branches {
                        let mut found = Vec::new();
                        collect_types(branch, defs, &mut found);
                        if found.is_empty() {
                            return;
                        }
                        branch_types.extend(found);
                    }
                    for t in branch_types {
                        if !types.contains(&t) {
                            types.push(t);
                        }
                    }
                }
                None => types.clear(),
            }
        }
    }
}

fn push_type(types: &mut Vec<JsonType>, name: &str) {
    match JsonType::from_name(name) {
        Some(t) if !types.contains(&t) => types.push(t),
        _ => {}
    }
}

fn def_name(schema: &Value) -> Option<&str> {
    schema
        .get("$ref")
        .and_then(Value::as_str)
        .and_then(|reference| reference.strip_prefix("#/$defs/"))
}

fn resolve_ref<'a>(schema: &'a Value, defs: Option<&'a Map<String, Value>>) -> &'a Value {
    def_name(schema)
        .and_then(|name| defs.and_then(|defs| defs.get(name)))
        .unwrap_or(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_reads_properties() {
        let schema = SettingsSchema::from_value(&json!({
            "type": "object",
            "properties": {
                "retries": {"type": "integer", "format": "uint32", "minimum": 0},
                "name": {"type": "string"},
                "seed": {"type": ["integer", "null"]}
            }
        }));

        let retries = schema.field("retries").unwrap();
        assert_eq!(retries.types, vec![JsonType::Integer]);
        assert_eq!(retries.minimum, Some(0.0));
        assert_eq!(retries.maximum, None);

        let seed = schema.field("seed").unwrap();
        assert_eq!(seed.types, vec![JsonType::Integer, JsonType::Null]);
    }

    #[test]
    fn test_from_value_resolves_refs() {
        let schema = SettingsSchema::from_value(&json!({
            "properties": {
                "limits": {"$ref": "#/$defs/Limits"},
                "maybe": {"anyOf": [{"$ref": "#/$defs/Limits"}, {"type": "null"}]}
            },
            "$defs": {
                "Limits": {"type": "object", "properties": {}}
            }
        }));

        assert_eq!(schema.field("limits").unwrap().types, vec![JsonType::Object]);
        assert_eq!(
            schema.field("maybe").unwrap().types,
            vec![JsonType::Object, JsonType::Null]
        );
    }

    #[test]
    fn test_unconstrained_field_accepts_anything() {
        let schema = SettingsSchema::from_value(&json!({
            "properties": {
                "anything": true,
                "partial": {"anyOf": [{"type": "string"}, {}]}
            }
        }));

        let anything = schema.field("anything").unwrap();
        assert!(anything.types.is_empty());
        assert!(anything.accepts_type(&json!([1, 2])));

        assert!(schema.field("partial").unwrap().types.is_empty());
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let schema = SettingsSchema::from_value(&json!({
            "properties": {"retries": {"type": "integer"}}
        }));

        assert_eq!(schema.find("Retries").unwrap().name, "retries");
        assert_eq!(schema.find("RETRIES").unwrap().name, "retries");
        assert!(schema.find("retry").is_none());
    }

    #[test]
    fn test_integer_type_rejects_fractions() {
        assert!(JsonType::Integer.accepts(&json!(3)));
        assert!(!JsonType::Integer.accepts(&json!(3.5)));
        assert!(JsonType::Number.accepts(&json!(3.5)));
        assert_eq!(JsonType::name_of(&json!(3.5)), "number");
        assert_eq!(JsonType::name_of(&json!(3)), "integer");
    }

    #[test]
    fn test_of_derives_settings_fields() {
        let schema = SettingsSchema::of::<crate::PseudoSettings>();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name.as_str()).collect();

        for expected in ["retries", "timeout_secs", "verbose", "seed", "output", "tags", "limits"] {
            assert!(names.contains(&expected), "missing field {expected} in {names:?}");
        }
        assert_eq!(
            schema.field("verbose").unwrap().types,
            vec![JsonType::Boolean]
        );
        assert_eq!(schema.field("limits").unwrap().types, vec![JsonType::Object]);

        let limits = schema.field("limits").unwrap().properties.as_ref().unwrap();
        let max_items = limits.field("max_items").unwrap();
        assert_eq!(max_items.types, vec![JsonType::Integer]);
        assert_eq!(max_items.minimum, Some(0.0));
        assert!(limits.field("max_bytes").is_some());
        assert!(schema.field("retries").unwrap().properties.is_none());
    }

    #[test]
    fn test_nested_properties_through_refs_and_options() {
        let schema = SettingsSchema::from_value(&json!({
            "properties": {
                "limits": {"$ref": "#/$defs/Limits"},
                "maybe": {"anyOf": [{"$ref": "#/$defs/Limits"}, {"type": "null"}]},
                "inline": {"type": "object", "properties": {"depth": {"type": "integer"}}},
                "labels": {"type": "object", "additionalProperties": {"type": "string"}}
            },
            "$defs": {
                "Limits": {"type": "object", "properties": {"max": {"type": "integer"}}}
            }
        }));

        for name in ["limits", "maybe"] {
            let nested = schema.field(name).unwrap().properties.as_ref().unwrap();
            assert!(nested.field("max").is_some(), "{name} should expose `max`");
        }
        let inline = schema.field("inline").unwrap().properties.as_ref().unwrap();
        assert!(inline.field("depth").is_some());
        assert!(schema.field("labels").unwrap().properties.is_none());
    }

    #[test]
    fn test_recursive_ref_terminates() {
        let schema = SettingsSchema::from_value(&json!({
            "properties": {"root": {"$ref": "#/$defs/Node"}},
            "$defs": {
                "Node": {
                    "type": "object",
                    "properties": {
                        "name": {"type": "string"},
                        "child": {"anyOf": [{"$ref": "#/$defs/Node"}, {"type": "null"}]}
                    }
                }
            }
        }));

        let root = schema.field("root").unwrap().properties.as_ref().unwrap();
        let child = root.field("child").unwrap();
        assert_eq!(child.types, vec![JsonType::Object, JsonType::Null]);
        assert!(child.properties.is_none());
    }

    #[test]
    fn test_find_folds_unicode() {
        let schema = SettingsSchema::from_value(&json!({
            "properties": {"größe": {"type": "integer"}}
        }));

        assert_eq!(schema.find("GRÖẞE").unwrap().name, "größe");
    }
}
