use serde::{Deserialize, Serialize};
use tracing::warn;

/// Text of a single page, kept for callers with paginated sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// One-based page number
    pub page_number: usize,

    /// Extracted text of the page
    pub text: String,
}

/// An immutable extracted document.
///
/// The text is fixed at construction; oversize input is cut at the
/// configured bound and flagged rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    text: String,
    pages: Vec<PageText>,
    truncated: bool,
}

impl Document {
    /// Build a document from extracted text, truncating past `max_chars`
    pub fn from_text(text: impl Into<String>, max_chars: usize) -> Self {
        let text = text.into();
        let mut truncated = false;
        let text = if text.chars().count() > max_chars {
            warn!("document exceeds {} characters, truncating", max_chars);
            truncated = true;
            text.chars().take(max_chars).collect()
        } else {
            text
        };

        Self {
            text,
            pages: Vec::new(),
            truncated,
        }
    }

    /// Build a document from ordered page texts.
    ///
    /// The document text is the trimmed page texts joined with newlines,
    /// subject to the same truncation bound as [`Document::from_text`];
    /// the pages themselves are kept verbatim for preview purposes.
    pub fn from_pages(pages: Vec<PageText>, max_chars: usize) -> Self {
        let joined = pages
            .iter()
            .map(|page| page.text.trim())
            .collect::<Vec<_>>()
            .join("\n");
        let mut document = Self::from_text(joined, max_chars);
        document.pages = pages;
        document
    }

    /// The extracted text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Per-page text, empty when the source was not paginated
    pub fn pages(&self) -> &[PageText] {
        &self.pages
    }

    /// Whether the text was cut at the document size bound
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// True when no readable text survived extraction
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
