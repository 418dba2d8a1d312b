use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ChunkFailure, Summary, SummaryError, SummaryMetadata};
use crate::llm::{Clock, CompletionProvider, Cooldown, LLMError, PromptTemplate};
use crate::processing::{segment_text, ChunkingError};

/// Configuration for the summarization reducer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReducerConfig {
    /// Maximum characters per chunk submitted to the provider
    pub max_chunk_size: usize,

    /// Maximum characters of joined partial summaries before a second
    /// condensation pass
    pub max_fold_size: usize,

    /// Minimum delay between consecutive provider calls
    pub cooldown: Duration,

    /// Abort on the first failed chunk instead of capturing it and continuing
    pub fail_fast: bool,
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: 2500,
            max_fold_size: 2000,
            cooldown: Duration::from_secs(6),
            fail_fast: false,
        }
    }
}

/// Drives segmented text through the completion provider and folds the
/// partial summaries into one result.
pub struct Reducer {
    provider: Arc<dyn CompletionProvider>,
    config: ReducerConfig,
    prompt: PromptTemplate,
    clock: Arc<dyn Clock>,
}

impl Reducer {
    /// Create a reducer around a provider, configuration, summarization
    /// prompt, and clock
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        config: ReducerConfig,
        prompt: PromptTemplate,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            provider,
            config,
            prompt,
            clock,
        }
    }

    /// Summarize `text`.
    ///
    /// One completion call per chunk, issued strictly sequentially with the
    /// configured cooldown between calls. Failed chunk calls are captured in
    /// the summary metadata (or abort the run when fail-fast is set); the
    /// surviving partial summaries are joined with single spaces. A joined
    /// result over `max_fold_size` is truncated to that bound and condensed
    /// by one more completion call, so the output never needs further
    /// chunking by the caller.
    pub async fn summarize(&self, text: &str) -> Result<Summary, SummaryError> {
        let chunks = segment_text(text, self.config.max_chunk_size).map_err(|e| match e {
            ChunkingError::InvalidChunkSize(msg) => SummaryError::ConfigError(msg),
        })?;
        if chunks.is_empty() {
            return Err(SummaryError::EmptyContent);
        }
        debug!("summarizing {} chunks", chunks.len());

        let mut cooldown = Cooldown::new(self.config.cooldown, self.clock.clone());
        let mut fragments: Vec<String> = Vec::with_capacity(chunks.len());
        let mut failures: Vec<ChunkFailure> = Vec::new();
        let mut last_error: Option<LLMError> = None;

        for chunk in &chunks {
            cooldown.wait().await;
            let prompt = self.prompt.format(&[("text", chunk.content.as_str())]);
            match self.provider.complete(&prompt, &self.prompt.params).await {
                Ok(response) => fragments.push(response.text.trim().to_string()),
                Err(e) => {
                    warn!("chunk {} completion failed: {}", chunk.chunk_order_index, e);
                    if self.config.fail_fast {
                        return Err(SummaryError::ChunkFailed {
                            index: chunk.chunk_order_index,
                            source: e,
                        });
                    }
                    failures.push(ChunkFailure {
                        chunk_index: chunk.chunk_order_index,
                        message: e.to_string(),
                    });
                    last_error = Some(e);
                }
            }
        }

        if fragments.is_empty() {
            // segment_text produced at least one chunk, so every call failed
            let last_error = last_error.unwrap_or_else(|| {
                LLMError::RequestFailed("no completions produced".to_string())
            });
            return Err(SummaryError::AllChunksFailed {
                failed: failures.len(),
                last_error,
            });
        }

        let mut combined = fragments.join(" ");
        let mut refolded = false;
        if combined.chars().count() > self.config.max_fold_size {
            let prefix: String = combined.chars().take(self.config.max_fold_size).collect();
            debug!(
                "joined summaries exceed {} chars, condensing",
                self.config.max_fold_size
            );
            cooldown.wait().await;
            let prompt = self.prompt.format(&[("text", prefix.as_str())]);
            let response = self
                .provider
                .complete(&prompt, &self.prompt.params)
                .await
                .map_err(SummaryError::FoldFailed)?;
            combined = response.text.trim().to_string();
            refolded = true;
        }

        Ok(Summary {
            metadata: SummaryMetadata {
                original_length: text.chars().count(),
                summary_length: combined.chars().count(),
                chunk_count: chunks.len(),
                failures,
                refolded,
            },
            text: combined,
        })
    }
}
