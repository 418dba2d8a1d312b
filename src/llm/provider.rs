use async_trait::async_trait;

use crate::types::llm::{LLMError, LLMParams, LLMResponse, ProviderConfig};

/// Trait for completion provider implementations
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a text completion for the given prompt
    async fn complete(&self, prompt: &str, params: &LLMParams) -> Result<LLMResponse, LLMError>;

    /// Get provider configuration
    fn get_config(&self) -> &ProviderConfig;
}
