use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A contiguous, sentence-aligned piece of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChunk {
    /// The chunk text, trimmed of surrounding whitespace
    pub content: String,

    /// Character length of the trimmed content
    pub chars: usize,

    /// Order index of this chunk in the source document
    pub chunk_order_index: usize,
}

/// Errors that can occur during text segmentation
#[derive(Error, Debug)]
pub enum ChunkingError {
    /// Error when chunk size is invalid
    #[error("Invalid chunk size: {0}")]
    InvalidChunkSize(String),
}
