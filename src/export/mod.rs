//! Format-agnostic rendering of summaries and QA sets.
//!
//! The renderer turns a summary or a QA set into a structured value for a
//! caller-supplied sink: plain text lines, a quoted table, or a tree of
//! heading/body blocks. Binary container encoding (DOCX, PDF) is the
//! sink's concern, not this module's.

use serde::{Deserialize, Serialize};

use crate::qa::QaSet;
use crate::summarize::Summary;

/// Heading used when rendering a summary as a document tree
const SUMMARY_HEADING: &str = "Document Summary";

/// Output shape selector for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderTarget {
    /// Plain text lines
    Plain,
    /// Header and quoted rows
    Tabular,
    /// Heading/body blocks
    Document,
}

/// A rendered value ready for a format-specific sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rendered {
    /// Plain text
    Plain(String),
    /// A table of quoted fields
    Table(Table),
    /// A heading/body document tree
    Document(DocTree),
}

/// A header plus rows of fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column names
    pub header: Vec<String>,

    /// Rows of unescaped field values
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Serialize as CSV.
    ///
    /// Every field is wrapped in double quotes with embedded quotes
    /// doubled, so commas and quotes inside fields survive the round trip.
    pub fn to_csv(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(self.header.join(","));
        for row in &self.rows {
            let quoted: Vec<String> = row.iter().map(|field| quote_field(field)).collect();
            lines.push(quoted.join(","));
        }
        lines.join("\n")
    }
}

fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// An ordered sequence of heading/body blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocTree {
    /// The blocks in document order
    pub blocks: Vec<DocBlock>,
}

/// One heading with its body text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocBlock {
    /// Block heading
    pub heading: String,

    /// Block body
    pub body: String,
}

/// Render a summary for the given target
pub fn render_summary(summary: &Summary, target: RenderTarget) -> Rendered {
    match target {
        RenderTarget::Plain => Rendered::Plain(summary.text.clone()),
        RenderTarget::Tabular => Rendered::Table(Table {
            header: vec!["Text".to_string()],
            rows: vec![vec![summary.text.clone()]],
        }),
        RenderTarget::Document => Rendered::Document(DocTree {
            blocks: vec![DocBlock {
                heading: SUMMARY_HEADING.to_string(),
                body: summary.text.clone(),
            }],
        }),
    }
}

/// Render a QA set for the given target
pub fn render_qa(qa: &QaSet, target: RenderTarget) -> Rendered {
    match target {
        RenderTarget::Plain => {
            let mut lines = Vec::with_capacity(qa.len() * 2);
            for record in qa.iter() {
                lines.push(format!("Q: {}", record.question));
                lines.push(format!("A: {}", record.answer));
            }
            Rendered::Plain(lines.join("\n"))
        }
        RenderTarget::Tabular => Rendered::Table(Table {
            header: vec!["Question".to_string(), "Answer".to_string()],
            rows: qa
                .iter()
                .map(|record| vec![record.question.clone(), record.answer.clone()])
                .collect(),
        }),
        RenderTarget::Document => Rendered::Document(DocTree {
            blocks: qa
                .iter()
                .map(|record| DocBlock {
                    heading: record.question.clone(),
                    body: record.answer.clone(),
                })
                .collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qa::QaRecord;

    fn sample_qa() -> QaSet {
        QaSet::from_records(vec![
            QaRecord {
                question: "What?".to_string(),
                answer: "This.".to_string(),
                order: 0,
            },
            QaRecord {
                question: "Why?".to_string(),
                answer: "Reasons.".to_string(),
                order: 1,
            },
        ])
    }

    #[test]
    fn test_plain_qa_renders_line_pairs() {
        let rendered = render_qa(&sample_qa(), RenderTarget::Plain);
        assert_eq!(
            rendered,
            Rendered::Plain("Q: What?\nA: This.\nQ: Why?\nA: Reasons.".to_string())
        );
    }

    #[test]
    fn test_document_qa_uses_questions_as_headings() {
        let rendered = render_qa(&sample_qa(), RenderTarget::Document);
        match rendered {
            Rendered::Document(tree) => {
                assert_eq!(tree.blocks.len(), 2);
                assert_eq!(tree.blocks[0].heading, "What?");
                assert_eq!(tree.blocks[0].body, "This.");
            }
            other => panic!("expected document tree, got {:?}", other),
        }
    }

    #[test]
    fn test_csv_quotes_embedded_separators_and_quotes() {
        let qa = QaSet::from_records(vec![QaRecord {
            question: "A,B".to_string(),
            answer: "C\"D".to_string(),
            order: 0,
        }]);
        match render_qa(&qa, RenderTarget::Tabular) {
            Rendered::Table(table) => {
                assert_eq!(table.to_csv(), "Question,Answer\n\"A,B\",\"C\"\"D\"");
            }
            other => panic!("expected table, got {:?}", other),
        }
    }
}
