use std::time::Duration;

use async_trait::async_trait;
use blitz_core::{ConversationContext, Error, Result, TextGenerator};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ProviderConfig;

/// Text-generation provider backed by the aggregator's HTTP backend.
///
/// Sends the rendered prompt together with the mirrored conversation state;
/// the backend owns model selection and the actual LLM call.
pub struct BackendProvider {
    /// HTTP client for backend requests.
    client: Client,
    /// Endpoint, credentials, and timeout.
    config: ProviderConfig,
}

/// Request payload sent to the backend.
#[derive(Debug, Serialize)]
struct GenerateRequest<'req> {
    /// Fully rendered instruction prompt.
    prompt: &'req str,
    /// Conversation state mirrored alongside the prompt.
    context: &'req ConversationContext,
    /// Optional model tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'req str>,
}

/// Response payload returned by the backend.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    /// Generated text.
    response: String,
}

impl BackendProvider {
    /// Creates a provider over the given configuration.
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: Client::default(),
            config,
        }
    }

    /// Creates a provider from defaults plus environment overrides.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ProviderConfig::default().apply_env())
    }
}

#[async_trait]
impl TextGenerator for BackendProvider {
    fn name(&self) -> &'static str {
        "backend"
    }

    async fn is_available(&self) -> bool {
        !self.config.endpoint.is_empty()
    }

    async fn generate(&self, prompt: &str, context: &ConversationContext) -> Result<String> {
        let request = GenerateRequest {
            prompt,
            context,
            model: self.config.model.as_deref(),
        };
        debug!(endpoint = %self.config.endpoint, prompt_len = prompt.len(), "backend request");

        let mut builder = self
            .client
            .post(&self.config.endpoint)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .json(&request);
        if let Some(api_key) = &self.config.api_key {
            builder = builder.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_owned());
            warn!(%status, "backend returned an error");
            return Err(Error::Provider(format!("backend error {status}: {body}")));
        }

        let payload: GenerateResponse = response
            .json()
            .await
            .map_err(|err| Error::InvalidResponse(format!("bad backend payload: {err}")))?;

        if payload.response.is_empty() {
            return Err(Error::InvalidResponse("empty response text".to_owned()));
        }

        Ok(payload.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_name_and_config() {
        let provider = BackendProvider::new(ProviderConfig {
            endpoint: "http://backend:9000/ai".to_owned(),
            model: Some("assistant-v2".to_owned()),
            api_key: None,
            timeout_secs: 30,
        });

        assert_eq!(provider.name(), "backend");
        assert_eq!(provider.config.endpoint, "http://backend:9000/ai");
    }

    #[tokio::test]
    async fn test_availability_requires_endpoint() {
        let configured = BackendProvider::new(ProviderConfig::default());
        assert!(configured.is_available().await);

        let blank = BackendProvider::new(ProviderConfig {
            endpoint: String::new(),
            ..ProviderConfig::default()
        });
        assert!(!blank.is_available().await);
    }

    #[test]
    fn test_request_serialization_omits_missing_model() {
        let context = ConversationContext::new();
        let request = GenerateRequest {
            prompt: "hola",
            context: &context,
            model: None,
        };
        let json = serde_json::to_string(&request).unwrap_or_default();
        assert!(json.contains("\"prompt\":\"hola\""));
        assert!(!json.contains("model"));
    }
}
