//! JSON Schema (draft-07) validation.

use crate::errors::JsonError;
use serde_json::Value;

/// Validates a JSON document text against a JSON Schema text.
///
/// Returns the literal string `"True"` when the document satisfies every
/// schema constraint, `"False"` otherwise. Structural mismatches are part
/// of the result, never an error; only malformed input fails.
///
/// Property names are matched case-sensitively, per JSON Schema. A schema
/// requiring `"Name"` is not satisfied by a document carrying `"name"`.
///
/// # Errors
///
/// [`JsonError::Parse`] when either input is not well-formed JSON,
/// [`JsonError::SchemaParse`] when the schema text is well-formed JSON but
/// not a valid draft-07 schema.
pub fn validate_document(doc: &str, schema: &str) -> Result<String, JsonError> {
    let instance: Value =
        serde_json::from_str(doc).map_err(|source| JsonError::parse("document", source))?;
    let schema: Value =
        serde_json::from_str(schema).map_err(|source| JsonError::parse("schema", source))?;

    let validator = jsonschema::draft7::new(&schema)
        .map_err(|err| JsonError::schema_parse(err.to_string()))?;

    Ok(render_bool(validator.is_valid(&instance)))
}

/// Async surface over [`validate_document`].
///
/// Offloads to a blocking task; provides no concurrency guarantee and must
/// be awaited to completion before the result is used.
pub async fn validate(doc: String, schema: String) -> Result<String, JsonError> {
    tokio::task::spawn_blocking(move || validate_document(&doc, &schema))
        .await
        .map_err(|join| JsonError::Background(join.to_string()))?
}

/// Capitalized rendering, matching the upstream contract.
fn render_bool(valid: bool) -> String {
    if valid { "True" } else { "False" }.to_string()
}
