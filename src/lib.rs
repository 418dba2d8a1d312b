//! docqa - a lightweight document summarization and Q&A pipeline
//!
//! This library takes extracted document text and, through an injected
//! completion provider, produces either a condensed summary or a set of
//! question/answer records. Both results render into plain text, tabular,
//! or heading/body output for caller-supplied sinks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Processing module for document and text manipulation.
///
/// Provides utilities for:
/// - Sentence-aligned text segmentation
/// - The immutable document model with truncation signaling
/// - Document format detection and text extraction
pub mod processing;

/// LLM module for completion provider operations.
///
/// Provides:
/// - The completion provider trait and the Cohere implementation
/// - Per-request cooldown enforcement over an injectable clock
/// - Fixed prompt templates with placeholder substitution
pub mod llm;

/// Chunked, recursive summarization.
pub mod summarize;

/// Question/answer record model and extraction.
pub mod qa;

/// Format-agnostic rendering of summaries and QA sets.
pub mod export;

/// Common types and configuration structures.
///
/// Contains:
/// - Error types and the crate-wide `Result` alias
/// - Types shared with the completion provider layer
pub mod types;

// Re-exports
pub use crate::processing::{Document, PageText};
pub use crate::qa::{QaRecord, QaSet};
pub use crate::summarize::Summary;
pub use crate::types::{Error, Result};

/// Configuration for the pipeline coordinator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocQaConfig {
    /// Segmentation and fold bounds plus call pacing
    pub reducer: summarize::ReducerConfig,

    /// Fixed prompt templates with their generation parameters
    pub prompts: llm::PromptSet,

    /// Upper bound on the generated question count
    pub max_questions: usize,

    /// Document truncation threshold in characters
    pub max_document_size: usize,
}

impl Default for DocQaConfig {
    fn default() -> Self {
        Self {
            reducer: summarize::ReducerConfig::default(),
            prompts: llm::PromptSet::default(),
            max_questions: 10,
            max_document_size: 100_000,
        }
    }
}

/// Coordinates summarization and QA generation for single documents.
///
/// Each operation is scoped to one request: nothing is shared between
/// calls beyond the provider, configuration, and clock, and dropping a
/// pending operation's future stops any further provider calls.
pub struct DocQa {
    provider: Arc<dyn llm::CompletionProvider>,
    config: DocQaConfig,
    clock: Arc<dyn llm::Clock>,
}

impl DocQa {
    /// Create a coordinator with default configuration
    pub fn new(provider: Arc<dyn llm::CompletionProvider>) -> Self {
        Self::with_config(provider, DocQaConfig::default())
    }

    /// Create a coordinator with custom configuration
    pub fn with_config(provider: Arc<dyn llm::CompletionProvider>, config: DocQaConfig) -> Self {
        Self {
            provider,
            config,
            clock: Arc::new(llm::TokioClock),
        }
    }

    /// Replace the clock, so tests can pace cooldowns without wall-clock
    /// delays
    pub fn with_clock(mut self, clock: Arc<dyn llm::Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The active configuration
    pub fn get_config(&self) -> &DocQaConfig {
        &self.config
    }

    /// Summarize a document.
    ///
    /// Chunk-level completion failures are captured in the summary metadata
    /// rather than aborting the request; the call fails only when every
    /// chunk call failed (or on the first failure with fail-fast set).
    pub async fn summarize(&self, document: &Document) -> Result<Summary> {
        if document.is_empty() {
            return Err(Error::EmptyInput);
        }
        let reducer = summarize::Reducer::new(
            self.provider.clone(),
            self.config.reducer.clone(),
            self.config.prompts.summarize.clone(),
            self.clock.clone(),
        );
        Ok(reducer.summarize(document.text()).await?)
    }

    /// Generate question/answer pairs from a document.
    ///
    /// Issues a single completion call and parses its output into records.
    /// A failed call is fatal for this flow; there is no per-chunk fallback.
    pub async fn generate_qa(&self, document: &Document, num_questions: usize) -> Result<QaSet> {
        if num_questions == 0 || num_questions > self.config.max_questions {
            return Err(Error::Config(format!(
                "num_questions must be between 1 and {}",
                self.config.max_questions
            )));
        }
        if document.is_empty() {
            return Err(Error::EmptyInput);
        }

        let template = &self.config.prompts.generate_qa;
        let prompt = template.format(&[
            ("num_questions", num_questions.to_string().as_str()),
            ("text", document.text()),
        ]);
        let response = self.provider.complete(&prompt, &template.params).await?;
        Ok(qa::parse_qa_text(&response.text))
    }

    /// Answer a caller-supplied question against a document.
    ///
    /// Issues a single completion call; a failed call is fatal for this
    /// flow.
    pub async fn answer(&self, document: &Document, question: &str) -> Result<QaRecord> {
        if document.is_empty() {
            return Err(Error::EmptyInput);
        }
        let question = question.trim();
        if question.is_empty() {
            return Err(Error::InvalidInput("question must not be empty".to_string()));
        }

        let template = &self.config.prompts.answer;
        let prompt = template.format(&[("text", document.text()), ("question", question)]);
        let response = self.provider.complete(&prompt, &template.params).await?;
        Ok(QaRecord {
            question: question.to_string(),
            answer: response.text.trim().to_string(),
            order: 0,
        })
    }
}
