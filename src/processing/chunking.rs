use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::processing::types::{ChunkingError, TextChunk};

/// Configuration for text segmentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Maximum number of characters per chunk
    pub max_chunk_size: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: 2500,
        }
    }
}

/// Splits text into bounded, sentence-aligned chunks.
///
/// Each proposed window of `max_chunk_size` characters ends just after the
/// last period strictly inside it; a window without one is cut at the bound.
/// Chunks are trimmed and empty chunks discarded, so whitespace-only input
/// yields zero chunks. Stateless and deterministic.
///
/// # Arguments
/// * `text` - The text to segment
/// * `max_chunk_size` - Upper bound on chunk length in characters; must be positive
///
/// # Returns
/// The ordered, non-overlapping chunks, or an error
pub fn segment_text(text: &str, max_chunk_size: usize) -> Result<Vec<TextChunk>, ChunkingError> {
    if max_chunk_size == 0 {
        return Err(ChunkingError::InvalidChunkSize(
            "max_chunk_size must be positive".to_string(),
        ));
    }

    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let window_end = (start + max_chunk_size).min(chars.len());
        let end = if window_end == chars.len() {
            window_end
        } else {
            // Last period strictly after the window start, else a hard cut
            // at the bound. Never skips forward past the configured size.
            match chars[start..window_end].iter().rposition(|&c| c == '.') {
                Some(pos) if pos > 0 => start + pos + 1,
                _ => window_end,
            }
        };

        let content: String = chars[start..end].iter().collect();
        let content = content.trim();
        if !content.is_empty() {
            chunks.push(TextChunk {
                content: content.to_string(),
                chars: content.chars().count(),
                chunk_order_index: chunks.len(),
            });
        }
        start = end;
    }

    debug!("segmented {} chars into {} chunks", chars.len(), chunks.len());
    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunks_end_at_sentence_boundaries() {
        let text = "First sentence here. Second sentence there. Third one closes.";
        let chunks = segment_text(text, 30).unwrap();

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars <= 30);
            assert!(chunk.content.ends_with('.'));
        }
        assert_eq!(chunks[0].content, "First sentence here.");
    }

    #[test]
    fn test_short_text_yields_single_chunk() {
        let text = "  A short document.  ";
        let chunks = segment_text(text, 100).unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "A short document.");
        assert_eq!(chunks[0].chunk_order_index, 0);
    }

    #[test]
    fn test_hard_cut_without_periods() {
        let text = "abcdefghijklmnopqrstuvwxy";
        let chunks = segment_text(text, 10).unwrap();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].content, "abcdefghij");
        assert_eq!(chunks[1].content, "klmnopqrst");
        assert_eq!(chunks[2].content, "uvwxy");
    }

    #[test]
    fn test_whitespace_only_input_yields_no_chunks() {
        assert!(segment_text("   \n\t  ", 100).unwrap().is_empty());
        assert!(segment_text("", 100).unwrap().is_empty());
    }

    #[test]
    fn test_zero_chunk_size_is_rejected() {
        assert!(matches!(
            segment_text("some text", 0),
            Err(ChunkingError::InvalidChunkSize(_))
        ));
    }

    #[test]
    fn test_multibyte_text_respects_char_bound() {
        let text = "один два три. четыре пять шесть.";
        let chunks = segment_text(text, 15).unwrap();

        for chunk in &chunks {
            assert!(chunk.chars <= 15);
        }
    }
}
