//! Document processing functionality
//!
//! This module provides functionality for processing documents, including:
//! - Text segmentation into sentence-aligned chunks
//! - The immutable document model with truncation signaling
//! - Document format handling and text extraction

mod chunking;
mod types;

/// The immutable document model.
///
/// A document pairs extracted text with optional per-page text and a
/// truncation flag for oversize input.
pub mod document;

/// Document format handling and text extraction.
///
/// This module provides functionality for:
/// - Detecting document formats based on file extensions
/// - Enforcing the upload size bound before extraction
/// - Extracting text content from plain text, Markdown, PDF, and Word files
pub mod formats;

pub use chunking::{segment_text, ChunkingConfig};

pub use document::{Document, PageText};

pub use formats::{
    detect_format, get_format_handler, load_document, DocumentFormat, ExtractionOptions,
    FormatError, FormatHandler,
};

pub use types::{ChunkingError, TextChunk};
