//! Native skills wrapping the JSON tooling operations.

use super::{Skill, SkillId, SkillInput};
use crate::errors::TriageflowError;
use crate::json;
use async_trait::async_trait;

/// Merges the primary JSON document with the auxiliary one.
///
/// Arrays present in both documents merge as a set union; scalar conflicts
/// resolve in favor of the auxiliary document.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombineJsonSkill;

impl CombineJsonSkill {
    /// Creates the merge skill.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Skill for CombineJsonSkill {
    fn id(&self) -> SkillId {
        SkillId::CombineJson
    }

    async fn invoke(&self, input: SkillInput) -> Result<String, TriageflowError> {
        let second = input
            .auxiliary
            .ok_or_else(|| TriageflowError::MissingInput {
                skill: self.id().to_string(),
                what: "second document",
            })?;

        Ok(json::combine(input.text, second).await?)
    }
}

/// Validates the primary JSON document against the auxiliary schema text.
///
/// Returns `"True"` or `"False"`; structural mismatches are never errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJsonSkill;

impl ValidateJsonSkill {
    /// Creates the validation skill.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Skill for ValidateJsonSkill {
    fn id(&self) -> SkillId {
        SkillId::ValidateJson
    }

    async fn invoke(&self, input: SkillInput) -> Result<String, TriageflowError> {
        let schema = input
            .auxiliary
            .ok_or_else(|| TriageflowError::MissingInput {
                skill: self.id().to_string(),
                what: "schema",
            })?;

        Ok(json::validate(input.text, schema).await?)
    }
}
