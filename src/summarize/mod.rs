//! Chunked, recursive summarization.
//!
//! The reducer segments input text, drives each chunk through the
//! completion provider sequentially with an enforced cooldown between
//! calls, and folds the partial summaries into one result, condensing
//! once more when the fold exceeds its size bound.

mod reducer;

pub use reducer::{Reducer, ReducerConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::llm::LLMError;

/// Errors that can occur during summary generation
#[derive(Error, Debug)]
pub enum SummaryError {
    /// Content is empty
    #[error("Empty content")]
    EmptyContent,

    /// Invalid reducer configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Every per-chunk completion call failed
    #[error("All {failed} chunk completions failed, last error: {last_error}")]
    AllChunksFailed {
        /// Number of failed chunk calls
        failed: usize,
        /// The last completion error observed
        last_error: LLMError,
    },

    /// A per-chunk completion call failed while fail-fast is enabled
    #[error("Chunk {index} completion failed: {source}")]
    ChunkFailed {
        /// Order index of the failed chunk
        index: usize,
        /// The completion error
        source: LLMError,
    },

    /// The second-stage condensation call failed
    #[error("Condensation call failed: {0}")]
    FoldFailed(LLMError),
}

/// A completion failure captured for one chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkFailure {
    /// Order index of the chunk whose call failed
    pub chunk_index: usize,

    /// The provider error message
    pub message: String,
}

/// Metadata about a generated summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetadata {
    /// Character length of the source text
    pub original_length: usize,

    /// Character length of the summary text
    pub summary_length: usize,

    /// Number of chunks the source was segmented into
    pub chunk_count: usize,

    /// Per-chunk completion failures captured during the run
    pub failures: Vec<ChunkFailure>,

    /// Whether the joined partial summaries needed a second condensation pass
    pub refolded: bool,
}

/// A generated summary with metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// The summary text
    pub text: String,

    /// Metadata about the summary
    pub metadata: SummaryMetadata,
}
