use tracing::debug;

use super::QaSet;

/// Parses free-form "Q/A" formatted model output into ordered records.
///
/// Lines are scanned once. A trimmed line starting with `Q` opens a new
/// question: with a colon, the text after the first colon is the question
/// body, otherwise the whole trimmed line is. Every other non-empty line is
/// an answer fragment for the pending question; consecutive fragments are
/// joined with single spaces. A question still pending at end of input is
/// kept, with an empty answer if nothing accumulated.
pub fn parse_qa_text(raw: &str) -> QaSet {
    let mut set = QaSet::default();
    let mut question: Option<String> = None;
    let mut fragments: Vec<String> = Vec::new();

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(body) = question_body(trimmed) {
            if let Some(pending) = question.take() {
                set.push(pending, fragments.join(" "));
                fragments.clear();
            }
            question = Some(body);
        } else if question.is_some() {
            fragments.push(answer_fragment(trimmed).to_string());
        }
    }

    if let Some(pending) = question.take() {
        set.push(pending, fragments.join(" "));
    }

    debug!("extracted {} qa records", set.len());
    set
}

/// Returns the question body when the line is a question line.
///
/// The `Q` check is case-sensitive, matching the model's own formatting
/// convention.
fn question_body(trimmed: &str) -> Option<String> {
    if !trimmed.starts_with('Q') {
        return None;
    }
    match trimmed.split_once(':') {
        Some((_, body)) => Some(body.trim().to_string()),
        None => Some(trimmed.to_string()),
    }
}

/// Strips an `A:`/`A1:`-style label from an answer fragment.
///
/// Only exact labels are stripped; ordinary prose starting with `A`
/// passes through whole.
fn answer_fragment(trimmed: &str) -> &str {
    if let Some(rest) = trimmed.strip_prefix('A') {
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if let Some(body) = rest[digits_end..].strip_prefix(':') {
            return body.trim();
        }
    }
    trimmed
}
