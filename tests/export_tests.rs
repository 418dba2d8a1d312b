use docqa::export::{render_qa, render_summary, RenderTarget, Rendered};
use docqa::qa::{QaRecord, QaSet};
use docqa::summarize::{Summary, SummaryMetadata};

fn summary(text: &str) -> Summary {
    Summary {
        text: text.to_string(),
        metadata: SummaryMetadata {
            original_length: 100,
            summary_length: text.chars().count(),
            chunk_count: 1,
            failures: Vec::new(),
            refolded: false,
        },
    }
}

#[test]
fn test_summary_plain_is_the_text_itself() {
    let rendered = render_summary(&summary("The whole point."), RenderTarget::Plain);
    assert_eq!(rendered, Rendered::Plain("The whole point.".to_string()));
}

#[test]
fn test_summary_tabular_is_single_column() {
    match render_summary(&summary("Condensed."), RenderTarget::Tabular) {
        Rendered::Table(table) => {
            assert_eq!(table.header, vec!["Text".to_string()]);
            assert_eq!(table.rows, vec![vec!["Condensed.".to_string()]]);
            assert_eq!(table.to_csv(), "Text\n\"Condensed.\"");
        }
        other => panic!("expected table, got {:?}", other),
    }
}

#[test]
fn test_summary_document_has_fixed_heading() {
    match render_summary(&summary("Body text."), RenderTarget::Document) {
        Rendered::Document(tree) => {
            assert_eq!(tree.blocks.len(), 1);
            assert_eq!(tree.blocks[0].heading, "Document Summary");
            assert_eq!(tree.blocks[0].body, "Body text.");
        }
        other => panic!("expected document tree, got {:?}", other),
    }
}

#[test]
fn test_qa_plain_renders_q_a_line_pairs() {
    let qa = QaSet::from_records(vec![
        QaRecord {
            question: "First?".to_string(),
            answer: "One.".to_string(),
            order: 0,
        },
        QaRecord {
            question: "Second?".to_string(),
            answer: "Two.".to_string(),
            order: 1,
        },
    ]);

    assert_eq!(
        render_qa(&qa, RenderTarget::Plain),
        Rendered::Plain("Q: First?\nA: One.\nQ: Second?\nA: Two.".to_string())
    );
}

#[test]
fn test_qa_tabular_escapes_separators_and_quotes() {
    let qa = QaSet::from_records(vec![QaRecord {
        question: "A,B".to_string(),
        answer: "C\"D".to_string(),
        order: 0,
    }]);

    match render_qa(&qa, RenderTarget::Tabular) {
        Rendered::Table(table) => {
            assert_eq!(table.header, vec!["Question".to_string(), "Answer".to_string()]);
            let csv = table.to_csv();
            assert_eq!(csv, "Question,Answer\n\"A,B\",\"C\"\"D\"");
        }
        other => panic!("expected table, got {:?}", other),
    }
}

#[test]
fn test_qa_document_block_per_record() {
    let qa = QaSet::from_records(vec![
        QaRecord {
            question: "Heading one?".to_string(),
            answer: "Body one.".to_string(),
            order: 0,
        },
        QaRecord {
            question: "Heading two?".to_string(),
            answer: "".to_string(),
            order: 1,
        },
    ]);

    match render_qa(&qa, RenderTarget::Document) {
        Rendered::Document(tree) => {
            assert_eq!(tree.blocks.len(), 2);
            assert_eq!(tree.blocks[0].heading, "Heading one?");
            assert_eq!(tree.blocks[1].body, "");
        }
        other => panic!("expected document tree, got {:?}", other),
    }
}

#[test]
fn test_empty_qa_set_renders_empty_outputs() {
    let qa = QaSet::default();

    assert_eq!(render_qa(&qa, RenderTarget::Plain), Rendered::Plain(String::new()));
    match render_qa(&qa, RenderTarget::Tabular) {
        Rendered::Table(table) => {
            assert!(table.rows.is_empty());
            assert_eq!(table.to_csv(), "Question,Answer");
        }
        other => panic!("expected table, got {:?}", other),
    }
}
