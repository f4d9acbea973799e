//! Error types for the triageflow pipeline.
//!
//! Each subsystem carries its own error enum; `TriageflowError` is the
//! top-level type stages propagate to the driver.

use thiserror::Error;

/// The main error type for triageflow operations.
#[derive(Debug, Error)]
pub enum TriageflowError {
    /// A JSON tooling error (parse or schema failure).
    #[error("{0}")]
    Json(#[from] JsonError),

    /// A chat-completion provider error.
    #[error("{0}")]
    Completion(#[from] CompletionError),

    /// A skill id had no registered implementation.
    #[error("skill not registered: {skill}")]
    SkillNotFound {
        /// The display name of the missing skill.
        skill: String,
    },

    /// A skill was invoked without a required input.
    #[error("skill '{skill}' invoked without required input: {what}")]
    MissingInput {
        /// The display name of the skill.
        skill: String,
        /// The missing input.
        what: &'static str,
    },
}

/// Errors raised by the JSON merge and validate operations.
///
/// Structural schema mismatches are *not* errors; they surface as the
/// `"False"` validation result. Only malformed input reaches this type.
#[derive(Debug, Error)]
pub enum JsonError {
    /// Input text is not syntactically valid JSON.
    #[error("malformed JSON in {slot}: {source}")]
    Parse {
        /// Which input failed to parse.
        slot: &'static str,
        /// The underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// Input parsed, but the top level is not a JSON object.
    #[error("{slot} must be a JSON object, got {found}")]
    NotAnObject {
        /// Which input had the wrong shape.
        slot: &'static str,
        /// The JSON kind actually found.
        found: &'static str,
    },

    /// Schema text parsed as JSON but is not a valid draft-07 schema.
    #[error("invalid JSON Schema: {reason}")]
    SchemaParse {
        /// Why schema compilation failed.
        reason: String,
    },

    /// The background worker task failed to complete.
    #[error("background task failed: {0}")]
    Background(String),
}

impl JsonError {
    /// Creates a parse error for the given input slot.
    #[must_use]
    pub fn parse(slot: &'static str, source: serde_json::Error) -> Self {
        Self::Parse { slot, source }
    }

    /// Creates a schema compilation error.
    #[must_use]
    pub fn schema_parse(reason: impl Into<String>) -> Self {
        Self::SchemaParse {
            reason: reason.into(),
        }
    }
}

/// Errors raised by chat-completion providers.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The HTTP request itself failed.
    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("completion API error (HTTP {status}): {body}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The response body, as returned by the service.
        body: String,
    },

    /// The service answered successfully but returned no choices.
    #[error("completion response contained no choices")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_parse_error_names_the_slot() {
        let source = serde_json::from_str::<serde_json::Value>("not json")
            .expect_err("input is malformed");
        let err = JsonError::parse("first document", source);

        assert!(err.to_string().contains("first document"));
    }

    #[test]
    fn schema_parse_error_carries_reason() {
        let err = JsonError::schema_parse("'required' must be an array");
        assert!(err.to_string().contains("'required' must be an array"));
    }

    #[test]
    fn json_error_converts_to_top_level() {
        let err: TriageflowError = JsonError::schema_parse("bad schema").into();
        assert!(matches!(
            err,
            TriageflowError::Json(JsonError::SchemaParse { .. })
        ));
    }

    #[test]
    fn missing_input_names_skill_and_input() {
        let err = TriageflowError::MissingInput {
            skill: "combine_json".to_string(),
            what: "second document",
        };
        let message = err.to_string();

        assert!(message.contains("combine_json"));
        assert!(message.contains("second document"));
    }
}
