use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::llm::{CompletionProvider, LLMError, LLMParams, LLMResponse, ProviderConfig};

const DEFAULT_ENDPOINT: &str = "https://api.cohere.ai";

/// Cohere chat API response format
#[derive(Debug, Deserialize)]
struct CohereChatResponse {
    text: String,
    #[serde(default)]
    meta: Option<CohereMeta>,
}

#[derive(Debug, Deserialize)]
struct CohereMeta {
    #[serde(default)]
    billed_units: Option<CohereBilledUnits>,
}

#[derive(Debug, Deserialize)]
struct CohereBilledUnits {
    #[serde(default)]
    output_tokens: Option<f64>,
}

/// Cohere chat client implementation
pub struct CohereProvider {
    /// HTTP client
    client: Client,

    /// Client configuration
    config: ProviderConfig,
}

impl CohereProvider {
    /// Create a new Cohere provider
    pub fn new(config: ProviderConfig) -> Result<Self, LLMError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LLMError::ConfigError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the API request URL
    fn build_url(&self) -> String {
        let endpoint = self
            .config
            .api_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_ENDPOINT);
        format!("{}/v1/chat", endpoint.trim_end_matches('/'))
    }

    /// Build request headers
    fn build_headers(&self) -> Result<reqwest::header::HeaderMap, LLMError> {
        use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| LLMError::ConfigError("API key not configured".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| LLMError::ConfigError(e.to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(headers)
    }
}

#[async_trait]
impl CompletionProvider for CohereProvider {
    async fn complete(&self, prompt: &str, params: &LLMParams) -> Result<LLMResponse, LLMError> {
        let body = json!({
            "model": self.config.model,
            "message": prompt,
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
        });

        let response = self
            .client
            .post(self.build_url())
            .headers(self.build_headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| LLMError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let detail = response.text().await.unwrap_or_default();
            return Err(LLMError::RateLimitExceeded(detail));
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(LLMError::RequestFailed(format!("{}: {}", status, detail)));
        }

        let parsed: CohereChatResponse = response
            .json()
            .await
            .map_err(|e| LLMError::InvalidResponse(e.to_string()))?;

        let tokens_used = parsed
            .meta
            .and_then(|m| m.billed_units)
            .and_then(|u| u.output_tokens)
            .map(|t| t as usize)
            .unwrap_or(0);

        Ok(LLMResponse {
            text: parsed.text,
            tokens_used,
            model: self.config.model.clone(),
        })
    }

    fn get_config(&self) -> &ProviderConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_uses_default_endpoint() {
        let provider = CohereProvider::new(ProviderConfig::default()).unwrap();
        assert_eq!(provider.build_url(), "https://api.cohere.ai/v1/chat");
    }

    #[test]
    fn test_build_url_respects_custom_endpoint() {
        let config = ProviderConfig {
            api_endpoint: Some("http://localhost:8080/".to_string()),
            ..Default::default()
        };
        let provider = CohereProvider::new(config).unwrap();
        assert_eq!(provider.build_url(), "http://localhost:8080/v1/chat");
    }

    #[test]
    fn test_missing_api_key_is_a_config_error() {
        let provider = CohereProvider::new(ProviderConfig::default()).unwrap();
        assert!(matches!(
            provider.build_headers(),
            Err(LLMError::ConfigError(_))
        ));
    }
}
