use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during completion calls
#[derive(Error, Debug)]
pub enum LLMError {
    /// API request failed
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Invalid response format
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Parameters for a single completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMParams {
    /// Maximum number of tokens to generate
    pub max_tokens: usize,

    /// Temperature for generation (0.0 to 1.0)
    pub temperature: f32,
}

impl Default for LLMParams {
    fn default() -> Self {
        Self {
            max_tokens: 300,
            temperature: 0.4,
        }
    }
}

/// Response from a completion call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMResponse {
    /// Generated text
    pub text: String,

    /// Number of output tokens billed, when the provider reports it
    pub tokens_used: usize,

    /// Model used for generation
    pub model: String,
}

/// Configuration for a completion provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Model identifier/name
    pub model: String,

    /// API endpoint (if applicable)
    pub api_endpoint: Option<String>,

    /// API key (if required)
    pub api_key: Option<String>,

    /// Timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: String::from("command-xlarge-nightly"),
            api_endpoint: None,
            api_key: None,
            timeout_secs: 30,
        }
    }
}
