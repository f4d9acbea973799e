//! Prompt skills backed by the chat-completion provider.

use super::{Skill, SkillId, SkillInput};
use crate::completion::{ChatCompletion, CompletionRequest};
use crate::errors::TriageflowError;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Placeholder substituted with the invocation's primary text.
const INPUT_PLACEHOLDER: &str = "{{$input}}";

/// Prompt template for sentiment identification.
///
/// The lower-case `sentiment` key is deliberate: downstream validation
/// checks the merged document against a schema requiring capitalized
/// property names, and the reference run reports that mismatch.
const SIMPLE_SENTIMENT_TEMPLATE: &str = "\
Identify the sentiment of the text delimited by triple backticks.
Answer with a single JSON object of the form {\"sentiment\": \"positive\" | \"neutral\" | \"negative\"}.
Respond with the JSON object only, no prose.

```{{$input}}```";

/// Prompt template for personal-information extraction.
const PERSONAL_INFORMATION_TEMPLATE: &str = "\
Extract the personal information from the text delimited by triple backticks.
Answer with a single JSON object using lower-case keys, for example
{\"name\": \"...\", \"city\": \"...\", \"order_number\": \"...\"}.
Omit keys that do not appear in the text. Respond with the JSON object only, no prose.

```{{$input}}```";

/// A skill rendering a fixed prompt template and running it through the
/// chat-completion provider.
pub struct PromptSkill {
    id: SkillId,
    template: &'static str,
    provider: Arc<dyn ChatCompletion>,
}

impl PromptSkill {
    fn new(id: SkillId, template: &'static str, provider: Arc<dyn ChatCompletion>) -> Self {
        Self {
            id,
            template,
            provider,
        }
    }

    fn render(&self, input: &str) -> String {
        self.template.replace(INPUT_PLACEHOLDER, input)
    }
}

impl fmt::Debug for PromptSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptSkill").field("id", &self.id).finish()
    }
}

#[async_trait]
impl Skill for PromptSkill {
    fn id(&self) -> SkillId {
        self.id
    }

    async fn invoke(&self, input: SkillInput) -> Result<String, TriageflowError> {
        let request = CompletionRequest::from_user(self.render(&input.text)).with_temperature(0.0);
        let response = self.provider.complete(request).await?;
        Ok(response.content)
    }
}

/// The sentiment-identification prompt skill.
#[derive(Debug)]
pub struct IdentifySentimentSkill {
    inner: PromptSkill,
}

impl IdentifySentimentSkill {
    /// Creates the skill over a chat-completion provider.
    #[must_use]
    pub fn new(provider: Arc<dyn ChatCompletion>) -> Self {
        Self {
            inner: PromptSkill::new(
                SkillId::IdentifySentiment,
                SIMPLE_SENTIMENT_TEMPLATE,
                provider,
            ),
        }
    }
}

#[async_trait]
impl Skill for IdentifySentimentSkill {
    fn id(&self) -> SkillId {
        self.inner.id()
    }

    async fn invoke(&self, input: SkillInput) -> Result<String, TriageflowError> {
        self.inner.invoke(input).await
    }
}

/// The entity-extraction prompt skill.
#[derive(Debug)]
pub struct ExtractEntitiesSkill {
    inner: PromptSkill,
}

impl ExtractEntitiesSkill {
    /// Creates the skill over a chat-completion provider.
    #[must_use]
    pub fn new(provider: Arc<dyn ChatCompletion>) -> Self {
        Self {
            inner: PromptSkill::new(
                SkillId::ExtractEntities,
                PERSONAL_INFORMATION_TEMPLATE,
                provider,
            ),
        }
    }
}

#[async_trait]
impl Skill for ExtractEntitiesSkill {
    fn id(&self) -> SkillId {
        self.inner.id()
    }

    async fn invoke(&self, input: SkillInput) -> Result<String, TriageflowError> {
        self.inner.invoke(input).await
    }
}
