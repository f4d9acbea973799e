//! JSON document merge with array set-union semantics.

use crate::errors::JsonError;
use serde_json::{Map, Value};

/// Describes the JSON kind of a value, for error messages.
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn parse_object(text: &str, slot: &'static str) -> Result<Map<String, Value>, JsonError> {
    let value: Value =
        serde_json::from_str(text).map_err(|source| JsonError::parse(slot, source))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(JsonError::NotAnObject {
            slot,
            found: kind_of(&other),
        }),
    }
}

/// Merges two JSON object texts, the second into the first.
///
/// Merge policy:
///
/// - a key present in only one document is carried through unchanged
/// - when both values are objects, they merge recursively
/// - when both values are arrays, the result is their set union: the first
///   document's elements in order, then every second-document element not
///   already present (deep equality)
/// - in every other case the second document's value wins, including null
///
/// Pure function of its two inputs. Returns the merged document serialized
/// back to text.
///
/// # Errors
///
/// [`JsonError::Parse`] when either input is not well-formed JSON,
/// [`JsonError::NotAnObject`] when a top level is not a JSON object.
pub fn combine_documents(doc1: &str, doc2: &str) -> Result<String, JsonError> {
    let mut base = parse_object(doc1, "first document")?;
    let overlay = parse_object(doc2, "second document")?;

    merge_objects(&mut base, overlay);

    serde_json::to_string(&Value::Object(base))
        .map_err(|source| JsonError::parse("merged document", source))
}

/// Async surface over [`combine_documents`].
///
/// Offloads to a blocking task; provides no concurrency guarantee and must
/// be awaited to completion before the result is used.
pub async fn combine(doc1: String, doc2: String) -> Result<String, JsonError> {
    tokio::task::spawn_blocking(move || combine_documents(&doc1, &doc2))
        .await
        .map_err(|join| JsonError::Background(join.to_string()))?
}

fn merge_objects(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, incoming) in overlay {
        match base.entry(key) {
            serde_json::map::Entry::Vacant(slot) => {
                slot.insert(incoming);
            }
            serde_json::map::Entry::Occupied(mut slot) => {
                merge_values(slot.get_mut(), incoming);
            }
        }
    }
}

fn merge_values(existing: &mut Value, incoming: Value) {
    match (existing, incoming) {
        (Value::Object(base), Value::Object(overlay)) => merge_objects(base, overlay),
        (Value::Array(base), Value::Array(overlay)) => union_arrays(base, overlay),
        (existing, incoming) => *existing = incoming,
    }
}

/// Appends each incoming element not already present, by deep equality.
///
/// Naive concatenation would double-count elements shared by both arrays.
fn union_arrays(existing: &mut Vec<Value>, incoming: Vec<Value>) {
    for item in incoming {
        if !existing.contains(&item) {
            existing.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn combined_value(doc1: &str, doc2: &str) -> Value {
        let merged = combine_documents(doc1, doc2).expect("merge should succeed");
        serde_json::from_str(&merged).expect("merge output should round-trip")
    }

    #[test]
    fn disjoint_keys_are_carried_through() {
        let merged = combined_value(r#"{"a": 1}"#, r#"{"b": 2}"#);
        assert_eq!(merged, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn disjoint_merge_is_commutative() {
        let forward = combined_value(r#"{"a": 1, "c": [true]}"#, r#"{"b": "x"}"#);
        let backward = combined_value(r#"{"b": "x"}"#, r#"{"a": 1, "c": [true]}"#);
        assert_eq!(forward, backward);
    }

    #[test]
    fn overlapping_scalar_second_document_wins() {
        let merged = combined_value(r#"{"a": 1}"#, r#"{"a": 2}"#);
        assert_eq!(merged, json!({"a": 2}));
    }

    #[test]
    fn overlapping_arrays_form_a_set_union() {
        let merged = combined_value(r#"{"a": [1, 2]}"#, r#"{"a": [2, 3]}"#);

        let items = merged["a"].as_array().expect("merged 'a' should be an array");
        assert_eq!(items.len(), 3);
        for expected in [json!(1), json!(2), json!(3)] {
            assert_eq!(
                items.iter().filter(|item| **item == expected).count(),
                1,
                "{expected} should appear exactly once"
            );
        }
    }

    #[test]
    fn array_union_compares_deep_equality() {
        let merged = combined_value(
            r#"{"a": [{"id": 1}, {"id": 2}]}"#,
            r#"{"a": [{"id": 2}, {"id": 3}]}"#,
        );
        assert_eq!(merged["a"], json!([{"id": 1}, {"id": 2}, {"id": 3}]));
    }

    #[test]
    fn nested_objects_merge_recursively() {
        let merged = combined_value(
            r#"{"customer": {"name": "John", "city": "Denver"}}"#,
            r#"{"customer": {"city": "Boulder", "order": 4711}}"#,
        );
        assert_eq!(
            merged,
            json!({"customer": {"name": "John", "city": "Boulder", "order": 4711}})
        );
    }

    #[test]
    fn null_from_second_document_overwrites() {
        let merged = combined_value(r#"{"a": 1}"#, r#"{"a": null}"#);
        assert_eq!(merged, json!({"a": null}));
    }

    #[test]
    fn mismatched_kinds_second_document_wins() {
        let merged = combined_value(r#"{"a": [1, 2]}"#, r#"{"a": "scalar"}"#);
        assert_eq!(merged, json!({"a": "scalar"}));
    }

    #[test]
    fn malformed_first_document_is_a_parse_error() {
        let err = combine_documents("{not json", r#"{"a": 1}"#)
            .expect_err("malformed input must not merge");
        assert!(matches!(
            err,
            JsonError::Parse {
                slot: "first document",
                ..
            }
        ));
    }

    #[test]
    fn malformed_second_document_is_a_parse_error() {
        let err = combine_documents(r#"{"a": 1}"#, "][")
            .expect_err("malformed input must not merge");
        assert!(matches!(
            err,
            JsonError::Parse {
                slot: "second document",
                ..
            }
        ));
    }

    #[test]
    fn non_object_top_level_is_rejected() {
        let err = combine_documents("[1, 2]", r#"{"a": 1}"#)
            .expect_err("array top level must be rejected");
        assert!(matches!(
            err,
            JsonError::NotAnObject {
                slot: "first document",
                found: "an array",
            }
        ));
    }

    #[tokio::test]
    async fn async_surface_matches_sync_core() {
        let merged = combine(r#"{"a": [1, 2]}"#.to_string(), r#"{"a": [2, 3]}"#.to_string())
            .await
            .expect("merge should succeed");
        let sync = combine_documents(r#"{"a": [1, 2]}"#, r#"{"a": [2, 3]}"#)
            .expect("merge should succeed");
        assert_eq!(merged, sync);
    }
}
