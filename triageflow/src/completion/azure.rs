//! Azure OpenAI chat-completion client.

use super::{ChatCompletion, ChatMessage, CompletionRequest, CompletionResponse};
use crate::config::ModelConfig;
use crate::errors::CompletionError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Client for the Azure OpenAI chat-completions endpoint.
///
/// Posts to
/// `{endpoint}/openai/deployments/{deployment}/chat/completions` with the
/// configured `api-key` header and API version.
#[derive(Debug, Clone)]
pub struct AzureChatClient {
    client: Client,
    config: ModelConfig,
}

impl AzureChatClient {
    /// Creates a client from a model configuration.
    pub fn new(config: ModelConfig) -> Result<Self, CompletionError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.deployment,
            self.config.api_version,
        )
    }
}

#[derive(Debug, Serialize)]
struct AzureRequestBody<'a> {
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct AzureResponseBody {
    #[serde(default)]
    model: Option<String>,
    choices: Vec<AzureChoice>,
}

#[derive(Debug, Deserialize)]
struct AzureChoice {
    message: AzureResponseMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AzureResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl ChatCompletion for AzureChatClient {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let body = AzureRequestBody {
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(self.completions_url())
            .header("api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: AzureResponseBody = response.json().await?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyResponse)?;
        let content = choice
            .message
            .content
            .ok_or(CompletionError::EmptyResponse)?;

        Ok(CompletionResponse {
            content,
            model: parsed.model,
            finish_reason: choice.finish_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn completions_url_includes_deployment_and_version() {
        let config = ModelConfig::new()
            .with_endpoint("https://example.openai.azure.com/")
            .with_deployment("gpt-4o")
            .with_api_version("2024-02-01");
        let client = AzureChatClient::new(config).expect("client should build");

        assert_eq!(
            client.completions_url(),
            "https://example.openai.azure.com/openai/deployments/gpt-4o/chat/completions?api-version=2024-02-01"
        );
    }

    #[test]
    fn response_body_parses_first_choice() {
        let raw = r#"{
            "model": "gpt-4o",
            "choices": [
                {"message": {"role": "assistant", "content": "{\"sentiment\": \"negative\"}"}, "finish_reason": "stop"}
            ]
        }"#;
        let parsed: AzureResponseBody =
            serde_json::from_str(raw).expect("response body should parse");

        assert_eq!(parsed.model.as_deref(), Some("gpt-4o"));
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("{\"sentiment\": \"negative\"}")
        );
    }
}
