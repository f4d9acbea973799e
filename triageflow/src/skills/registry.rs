//! Typed skill registry, built once at startup.

use super::{
    CombineJsonSkill, ExtractEntitiesSkill, IdentifySentimentSkill, Skill, SkillId, SkillInput,
    ValidateJsonSkill,
};
use crate::completion::ChatCompletion;
use crate::errors::TriageflowError;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry mapping skill identifiers to implementations.
///
/// Populated through [`SkillRegistry::builder`] and immutable afterwards;
/// the set of identifiers is the closed [`SkillId`] enum, so resolution can
/// never be driven by runtime-computed names.
#[derive(Debug, Default)]
pub struct SkillRegistry {
    skills: HashMap<SkillId, Arc<dyn Skill>>,
}

impl SkillRegistry {
    /// Starts building an empty registry.
    #[must_use]
    pub fn builder() -> SkillRegistryBuilder {
        SkillRegistryBuilder::default()
    }

    /// Builds the registry every pipeline run needs: both prompt skills
    /// over the given provider plus the native JSON skills.
    #[must_use]
    pub fn with_defaults(provider: Arc<dyn ChatCompletion>) -> Self {
        Self::builder()
            .register(Arc::new(IdentifySentimentSkill::new(provider.clone())))
            .register(Arc::new(ExtractEntitiesSkill::new(provider)))
            .register(Arc::new(CombineJsonSkill::new()))
            .register(Arc::new(ValidateJsonSkill::new()))
            .build()
    }

    /// Resolves a skill by identifier.
    pub fn get(&self, id: SkillId) -> Result<Arc<dyn Skill>, TriageflowError> {
        self.skills
            .get(&id)
            .cloned()
            .ok_or_else(|| TriageflowError::SkillNotFound {
                skill: id.to_string(),
            })
    }

    /// Resolves and invokes a skill in one step.
    pub async fn invoke(
        &self,
        id: SkillId,
        input: SkillInput,
    ) -> Result<String, TriageflowError> {
        self.get(id)?.invoke(input).await
    }

    /// Lists the registered skill identifiers.
    #[must_use]
    pub fn list(&self) -> Vec<SkillId> {
        self.skills.keys().copied().collect()
    }

    /// Returns the number of registered skills.
    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Returns true if no skills are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// Builder collecting skills before the registry is frozen.
#[derive(Debug, Default)]
pub struct SkillRegistryBuilder {
    skills: HashMap<SkillId, Arc<dyn Skill>>,
}

impl SkillRegistryBuilder {
    /// Registers a skill under its own identifier. A later registration
    /// for the same identifier replaces the earlier one.
    #[must_use]
    pub fn register(mut self, skill: Arc<dyn Skill>) -> Self {
        self.skills.insert(skill.id(), skill);
        self
    }

    /// Freezes the registry.
    #[must_use]
    pub fn build(self) -> SkillRegistry {
        SkillRegistry {
            skills: self.skills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::MockChatClient;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_registry_resolves_every_skill() {
        let provider = Arc::new(MockChatClient::new(vec![]));
        let registry = SkillRegistry::with_defaults(provider);

        assert_eq!(registry.len(), 4);
        for id in SkillId::all() {
            assert!(registry.get(id).is_ok(), "{id} should be registered");
        }
    }

    #[test]
    fn empty_registry_reports_skill_not_found() {
        let registry = SkillRegistry::builder().build();
        let err = registry
            .get(SkillId::CombineJson)
            .expect_err("empty registry has no skills");

        assert!(matches!(err, TriageflowError::SkillNotFound { .. }));
        assert!(err.to_string().contains("combine_json"));
    }

    #[tokio::test]
    async fn invoke_dispatches_to_the_registered_skill() {
        let registry = SkillRegistry::builder()
            .register(Arc::new(CombineJsonSkill::new()))
            .build();

        let merged = registry
            .invoke(
                SkillId::CombineJson,
                SkillInput::text(r#"{"a": 1}"#).with_auxiliary(r#"{"b": 2}"#),
            )
            .await
            .expect("merge should succeed");

        let value: serde_json::Value =
            serde_json::from_str(&merged).expect("output should parse");
        assert_eq!(value, serde_json::json!({"a": 1, "b": 2}));
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let registry = SkillRegistry::builder()
            .register(Arc::new(CombineJsonSkill::new()))
            .register(Arc::new(CombineJsonSkill::new()))
            .build();

        assert_eq!(registry.len(), 1);
    }
}
