//! Field tables describing the JSON shape each operation must return.

use serde_json::{Map, Value};
use tracing::debug;

/// Default for a single field, which also fixes the field's JSON type.
#[derive(Debug, Clone, Copy)]
pub enum FieldDefault {
    Bool(bool),
    Text(&'static str),
    /// Sequence of strings; defaults to empty.
    List,
    /// A string restricted to `allowed`, compared case-insensitively.
    OneOf {
        allowed: &'static [&'static str],
        fallback: &'static str,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub default: FieldDefault,
}

pub type Schema = [FieldSpec];

impl FieldDefault {
    fn value(&self) -> Value {
        match self {
            FieldDefault::Bool(b) => Value::Bool(*b),
            FieldDefault::Text(s) => Value::String((*s).to_string()),
            FieldDefault::List => Value::Array(Vec::new()),
            FieldDefault::OneOf { fallback, .. } => Value::String((*fallback).to_string()),
        }
    }

    /// Coerce a present value to this field's type, or `None` if it cannot be.
    fn coerce(&self, value: Value) -> Option<Value> {
        match (self, value) {
            (FieldDefault::Bool(_), v @ Value::Bool(_)) => Some(v),
            (FieldDefault::Text(_), v @ Value::String(_)) => Some(v),
            (FieldDefault::List, Value::Array(items)) => Some(Value::Array(
                items.into_iter().filter_map(list_item).collect(),
            )),
            (FieldDefault::OneOf { allowed, .. }, Value::String(s)) => {
                let lowered = s.trim().to_lowercase();
                allowed
                    .iter()
                    .any(|a| *a == lowered)
                    .then_some(Value::String(lowered))
            }
            _ => None,
        }
    }
}

/// Keep strings as-is and render anything else as its JSON text. Only
/// nulls are dropped.
fn list_item(item: Value) -> Option<Value> {
    match item {
        Value::Null => None,
        Value::String(_) => Some(item),
        Value::Number(n) => Some(Value::String(n.to_string())),
        Value::Bool(b) => Some(Value::String(b.to_string())),
        other => Some(Value::String(other.to_string())),
    }
}

/// Complete `map` against `schema`.
///
/// Every schema field ends up present with the schema's type: absent or
/// ill-typed values are replaced by the field default, fields outside the
/// schema are dropped.
pub fn complete(mut map: Map<String, Value>, schema: &Schema) -> Map<String, Value> {
    let mut out = Map::with_capacity(schema.len());
    for field in schema {
        let value = match map.remove(field.name) {
            Some(v) => field.default.coerce(v).unwrap_or_else(|| {
                debug!(field = field.name, "Replacing ill-typed field with default");
                field.default.value()
            }),
            None => {
                debug!(field = field.name, "Filling missing field with default");
                field.default.value()
            }
        };
        out.insert(field.name.to_string(), value);
    }
    out
}

/// The fully defaulted object for `schema`.
pub fn defaults(schema: &Schema) -> Map<String, Value> {
    complete(Map::new(), schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SCHEMA: &Schema = &[
        FieldSpec { name: "ok", default: FieldDefault::Bool(true) },
        FieldSpec { name: "note", default: FieldDefault::Text("none") },
        FieldSpec { name: "items", default: FieldDefault::List },
        FieldSpec {
            name: "level",
            default: FieldDefault::OneOf { allowed: &["low", "high"], fallback: "low" },
        },
    ];

    fn as_map(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_defaults_fill_every_field() {
        let map = defaults(SCHEMA);
        assert_eq!(Value::Object(map), json!({"ok": true, "note": "none", "items": [], "level": "low"}));
    }

    #[test]
    fn test_present_fields_preserved() {
        let input = as_map(json!({"ok": false, "note": "hi", "items": ["a", "b"], "level": "high"}));
        let map = complete(input, SCHEMA);
        assert_eq!(Value::Object(map), json!({"ok": false, "note": "hi", "items": ["a", "b"], "level": "high"}));
    }

    #[test]
    fn test_ill_typed_fields_replaced() {
        let input = as_map(json!({"ok": "yes", "note": 3, "items": "single", "level": "critical"}));
        let map = complete(input, SCHEMA);
        assert_eq!(Value::Object(map), json!({"ok": true, "note": "none", "items": [], "level": "low"}));
    }

    #[test]
    fn test_one_of_is_case_insensitive() {
        let map = complete(as_map(json!({"level": " High "})), SCHEMA);
        assert_eq!(map["level"], json!("high"));
    }

    #[test]
    fn test_list_items_flattened_to_strings() {
        let map = complete(as_map(json!({"items": ["a", 2, null, {"x": 1}, true]})), SCHEMA);
        assert_eq!(map["items"], json!(["a", "2", "{\"x\":1}", "true"]));
    }

    #[test]
    fn test_structured_list_items_kept_as_text() {
        let map = complete(
            as_map(json!({"items": [{"line": 3, "message": "Missing )"}, ["a", "b"]]})),
            SCHEMA,
        );
        assert_eq!(
            map["items"],
            json!(["{\"line\":3,\"message\":\"Missing )\"}", "[\"a\",\"b\"]"])
        );
    }

    #[test]
    fn test_unknown_fields_dropped() {
        let map = complete(as_map(json!({"extra": 1})), SCHEMA);
        assert!(!map.contains_key("extra"));
        assert_eq!(map.len(), SCHEMA.len());
    }
}
