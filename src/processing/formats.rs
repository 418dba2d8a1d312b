use std::fs;
use std::path::Path;

use docx_rs::read_docx;
use pdf_extract::extract_text as extract_pdf_text;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::processing::document::Document;

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Plain text files (.txt)
    PlainText,
    /// Markdown files (.md)
    Markdown,
    /// PDF files (.pdf)
    Pdf,
    /// Word documents (.docx)
    Word,
}

/// Errors that can occur during format handling
#[derive(Error, Debug)]
pub enum FormatError {
    /// Error when file format is not supported
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Error when reading file
    #[error("File read error: {0}")]
    FileReadError(#[from] std::io::Error),

    /// Error during format-specific processing
    #[error("Processing error: {0}")]
    ProcessingError(String),

    /// Error when file extension is missing
    #[error("Missing file extension")]
    MissingExtension,

    /// Error when the file exceeds the upload size bound
    #[error("File is {size} bytes, limit is {limit}")]
    FileTooLarge {
        /// Actual file size in bytes
        size: u64,
        /// Configured upload bound in bytes
        limit: u64,
    },

    /// Error when no readable text survived extraction
    #[error("No readable text found in document")]
    EmptyText,
}

/// Bounds applied while loading a document from a file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionOptions {
    /// Maximum file size accepted before extraction, in bytes
    pub max_upload_bytes: u64,

    /// Document truncation threshold, in characters
    pub max_document_chars: usize,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            max_upload_bytes: 10 * 1024 * 1024,
            max_document_chars: 100_000,
        }
    }
}

/// Trait for format-specific document handlers
#[async_trait::async_trait]
pub trait FormatHandler: Send + Sync {
    /// Extract text content from a file
    async fn extract_text(&self, file_path: &Path) -> Result<String, FormatError>;

    /// Get supported file extensions
    fn supported_extensions(&self) -> Vec<&'static str>;
}

/// Detect document format from file extension
pub fn detect_format(file_path: &Path) -> Result<DocumentFormat, FormatError> {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(FormatError::MissingExtension)?;

    match extension.to_lowercase().as_str() {
        "txt" => Ok(DocumentFormat::PlainText),
        "md" | "markdown" => Ok(DocumentFormat::Markdown),
        "pdf" => Ok(DocumentFormat::Pdf),
        "docx" => Ok(DocumentFormat::Word),
        _ => Err(FormatError::UnsupportedFormat(extension.to_string())),
    }
}

/// Get appropriate format handler for document type
pub fn get_format_handler(format: DocumentFormat) -> Box<dyn FormatHandler> {
    match format {
        DocumentFormat::PlainText | DocumentFormat::Markdown => Box::new(TextHandler),
        DocumentFormat::Pdf => Box::new(PdfHandler),
        DocumentFormat::Word => Box::new(WordHandler),
    }
}

/// Load a file into a [`Document`].
///
/// The upload size bound is enforced against the file metadata before any
/// bytes are read; the extracted text is subject to the document size bound.
pub async fn load_document(
    file_path: &Path,
    options: &ExtractionOptions,
) -> Result<Document, FormatError> {
    let size = fs::metadata(file_path)?.len();
    if size > options.max_upload_bytes {
        return Err(FormatError::FileTooLarge {
            size,
            limit: options.max_upload_bytes,
        });
    }

    let format = detect_format(file_path)?;
    let handler = get_format_handler(format);
    let text = handler.extract_text(file_path).await?;

    let document = Document::from_text(text, options.max_document_chars);
    if document.is_empty() {
        return Err(FormatError::EmptyText);
    }
    Ok(document)
}

/// Handler for plain text and markdown files
pub struct TextHandler;

#[async_trait::async_trait]
impl FormatHandler for TextHandler {
    async fn extract_text(&self, file_path: &Path) -> Result<String, FormatError> {
        Ok(fs::read_to_string(file_path)?)
    }

    fn supported_extensions(&self) -> Vec<&'static str> {
        vec!["txt", "md", "markdown"]
    }
}

/// Handler for PDF files
pub struct PdfHandler;

#[async_trait::async_trait]
impl FormatHandler for PdfHandler {
    async fn extract_text(&self, file_path: &Path) -> Result<String, FormatError> {
        extract_pdf_text(file_path)
            .map_err(|e| FormatError::ProcessingError(format!("PDF extraction error: {}", e)))
    }

    fn supported_extensions(&self) -> Vec<&'static str> {
        vec!["pdf"]
    }
}

/// Handler for Word documents
pub struct WordHandler;

#[async_trait::async_trait]
impl FormatHandler for WordHandler {
    async fn extract_text(&self, file_path: &Path) -> Result<String, FormatError> {
        let content = fs::read(file_path)?;

        let docx = read_docx(&content)
            .map_err(|e| FormatError::ProcessingError(format!("Word parsing error: {}", e)))?;

        let json: serde_json::Value = serde_json::from_str(&docx.json())
            .map_err(|e| FormatError::ProcessingError(format!("JSON parsing error: {}", e)))?;

        let mut text = String::new();
        collect_text_nodes(&json, &mut text);
        Ok(text)
    }

    fn supported_extensions(&self) -> Vec<&'static str> {
        vec!["docx"]
    }
}

/// Walks the docx-rs JSON tree collecting every `text` leaf in order
fn collect_text_nodes(value: &serde_json::Value, out: &mut String) {
    match value {
        serde_json::Value::Object(map) => {
            if let Some(text) = map.get("text").and_then(|v| v.as_str()) {
                if !out.is_empty() && !out.ends_with(' ') {
                    out.push(' ');
                }
                out.push_str(text);
            }
            for child in map.values() {
                collect_text_nodes(child, out);
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                collect_text_nodes(item, out);
            }
        }
        _ => {}
    }
}
