//! Configuration for the chat-completion service.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

const ENDPOINT_VAR: &str = "AZURE_OPENAI_ENDPOINT";
const API_KEY_VAR: &str = "AZURE_OPENAI_API_KEY";
const DEPLOYMENT_VAR: &str = "AZURE_OPENAI_DEPLOYMENTNAME";

/// Configuration for the hosted chat-completion model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Service endpoint, e.g. `https://my-resource.openai.azure.com`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Access credential sent as the `api-key` header.
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Deployment (model) identifier.
    #[serde(default = "default_deployment")]
    pub deployment: String,
    /// API version query parameter.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: f64,
}

fn default_endpoint() -> String {
    "<<Provide your Azure API Endpoint here>>".to_string()
}

fn default_api_key() -> String {
    "<<Provide your Azure API Key here>>".to_string()
}

fn default_deployment() -> String {
    "<<Provide your Model Deployment Name here>>".to_string()
}

fn default_api_version() -> String {
    "2024-02-01".to_string()
}

fn default_timeout() -> f64 {
    30.0
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: default_api_key(),
            deployment: default_deployment(),
            api_version: default_api_version(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl ModelConfig {
    /// Creates a configuration with placeholder defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the configuration from the process environment.
    ///
    /// Reads `AZURE_OPENAI_ENDPOINT`, `AZURE_OPENAI_API_KEY` and
    /// `AZURE_OPENAI_DEPLOYMENTNAME`, falling back to placeholder strings
    /// for any that are absent.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var(ENDPOINT_VAR).unwrap_or_else(|_| default_endpoint()),
            api_key: env::var(API_KEY_VAR).unwrap_or_else(|_| default_api_key()),
            deployment: env::var(DEPLOYMENT_VAR).unwrap_or_else(|_| default_deployment()),
            api_version: default_api_version(),
            timeout_seconds: default_timeout(),
        }
    }

    /// Sets the service endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the access credential.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Sets the deployment identifier.
    #[must_use]
    pub fn with_deployment(mut self, deployment: impl Into<String>) -> Self {
        self.deployment = deployment.into();
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Sets the request timeout in seconds.
    #[must_use]
    pub fn with_timeout(mut self, seconds: f64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Gets the timeout as a Duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout_seconds)
    }
}
