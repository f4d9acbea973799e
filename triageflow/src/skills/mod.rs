//! Skills: the units of work the pipeline composes.
//!
//! A skill is either a prompt skill (text generation through the
//! chat-completion provider) or a native skill (JSON tooling). Skills are
//! addressed by the closed [`SkillId`] enum and resolved through a
//! [`SkillRegistry`] built at startup; there is no runtime name lookup.

mod json;
mod prompt;
mod registry;

pub use json::{CombineJsonSkill, ValidateJsonSkill};
pub use prompt::{ExtractEntitiesSkill, IdentifySentimentSkill};
pub use registry::{SkillRegistry, SkillRegistryBuilder};

use crate::errors::TriageflowError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for every skill the pipeline knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillId {
    /// Sentiment identification prompt skill.
    IdentifySentiment,
    /// Entity extraction prompt skill.
    ExtractEntities,
    /// Native JSON merge skill.
    CombineJson,
    /// Native JSON Schema validation skill.
    ValidateJson,
}

impl SkillId {
    /// Returns the stable snake-case name of the skill.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IdentifySentiment => "identify_sentiment",
            Self::ExtractEntities => "extract_entities",
            Self::CombineJson => "combine_json",
            Self::ValidateJson => "validate_json",
        }
    }

    /// Returns every known skill id.
    #[must_use]
    pub fn all() -> [Self; 4] {
        [
            Self::IdentifySentiment,
            Self::ExtractEntities,
            Self::CombineJson,
            Self::ValidateJson,
        ]
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The explicit inputs to one skill invocation.
///
/// `text` is the primary input; `auxiliary` carries the second operand
/// where a skill needs one (the second document for the merge skill, the
/// schema text for the validation skill).
#[derive(Debug, Clone)]
pub struct SkillInput {
    /// Primary input text.
    pub text: String,
    /// Optional second operand.
    pub auxiliary: Option<String>,
}

impl SkillInput {
    /// Creates an input from the primary text alone.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            auxiliary: None,
        }
    }

    /// Attaches the second operand.
    #[must_use]
    pub fn with_auxiliary(mut self, auxiliary: impl Into<String>) -> Self {
        self.auxiliary = Some(auxiliary.into());
        self
    }
}

/// Trait for pipeline skills.
#[async_trait]
pub trait Skill: Send + Sync + fmt::Debug {
    /// Returns the skill's identifier.
    fn id(&self) -> SkillId;

    /// Invokes the skill on explicit inputs, returning its text result.
    ///
    /// Errors from the underlying collaborator (completion provider, JSON
    /// tooling) propagate unchanged.
    async fn invoke(&self, input: SkillInput) -> Result<String, TriageflowError>;
}
