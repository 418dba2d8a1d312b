// Re-export common types from types module
pub use crate::types::llm::{LLMError, LLMParams, LLMResponse, ProviderConfig};

/// Cooldown enforcement between consecutive provider calls.
///
/// One cooldown value is created per logical request, so unrelated
/// requests are not serialized against each other. The clock behind it
/// is injectable.
pub mod cooldown;

/// Fixed prompt templates with placeholder substitution.
pub mod prompt;

/// Trait for completion provider implementations.
pub mod provider;

/// Module containing implementations for completion providers.
///
/// Supported providers:
/// - Cohere: chat-based text generation
pub mod providers;

pub use cooldown::{Clock, Cooldown, TokioClock};
pub use prompt::{PromptSet, PromptTemplate};
pub use provider::CompletionProvider;
pub use providers::CohereProvider;
