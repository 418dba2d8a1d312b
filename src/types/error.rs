use thiserror::Error;

use crate::processing::formats::FormatError;
use crate::processing::ChunkingError;
use crate::summarize::SummaryError;
use crate::types::llm::LLMError;

/// Top-level error type for pipeline operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Document text was empty after extraction
    #[error("Document text is empty")]
    EmptyInput,

    /// Completion provider errors
    #[error("LLM error: {0}")]
    LLM(#[from] LLMError),

    /// Segmentation errors
    #[error("Chunking error: {0}")]
    Chunking(#[from] ChunkingError),

    /// Summary generation errors
    #[error("Summary error: {0}")]
    Summary(#[from] SummaryError),

    /// Document format handling errors
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
