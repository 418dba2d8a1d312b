use serde::{Deserialize, Serialize};

use crate::types::llm::LLMParams;

/// A fixed prompt template with `{name}` placeholders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptTemplate {
    /// Template text containing `{name}` placeholders
    pub text: String,

    /// Generation parameters used with this template
    pub params: LLMParams,
}

impl PromptTemplate {
    /// Create a template from text and generation parameters
    pub fn new(text: impl Into<String>, params: LLMParams) -> Self {
        Self {
            text: text.into(),
            params,
        }
    }

    /// Substitute the given variables into the template.
    ///
    /// Placeholders without a matching variable are left in place.
    pub fn format(&self, variables: &[(&str, &str)]) -> String {
        let mut formatted = self.text.clone();
        for (name, value) in variables {
            formatted = formatted.replace(&format!("{{{}}}", name), value);
        }
        formatted
    }
}

/// The fixed prompt set used by the pipeline.
///
/// Templates are caller-supplied inputs; the defaults reproduce the
/// summarization, question-generation, and answering prompts of the
/// upstream application along with their sampling parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptSet {
    /// Per-chunk (and fold) summarization prompt; placeholder: `{text}`
    pub summarize: PromptTemplate,

    /// Question generation prompt; placeholders: `{num_questions}`, `{text}`
    pub generate_qa: PromptTemplate,

    /// Direct answering prompt; placeholders: `{text}`, `{question}`
    pub answer: PromptTemplate,
}

impl Default for PromptSet {
    fn default() -> Self {
        Self {
            summarize: PromptTemplate::new(
                "Summarize this text clearly and concisely:\n\n{text}",
                LLMParams {
                    max_tokens: 300,
                    temperature: 0.4,
                },
            ),
            generate_qa: PromptTemplate::new(
                "Generate {num_questions} questions and answers from the following text:\n\n\
                 {text}\n\nFormat: Q1: ... A1: ... Q2: ... A2: ...",
                LLMParams {
                    max_tokens: 600,
                    temperature: 0.5,
                },
            ),
            answer: PromptTemplate::new(
                "Answer the question based on this text:\n\n{text}\n\nQuestion: {question}",
                LLMParams {
                    max_tokens: 200,
                    temperature: 0.3,
                },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_substitutes_variables() {
        let template = PromptTemplate::new("Answer {question} using {text}", LLMParams::default());
        let formatted = template.format(&[("question", "why?"), ("text", "the docs")]);
        assert_eq!(formatted, "Answer why? using the docs");
    }

    #[test]
    fn test_format_leaves_unknown_placeholders() {
        let template = PromptTemplate::new("{text} {missing}", LLMParams::default());
        let formatted = template.format(&[("text", "hello")]);
        assert_eq!(formatted, "hello {missing}");
    }

    #[test]
    fn test_default_prompts_carry_placeholders() {
        let prompts = PromptSet::default();
        assert!(prompts.summarize.text.contains("{text}"));
        assert!(prompts.generate_qa.text.contains("{num_questions}"));
        assert!(prompts.answer.text.contains("{question}"));
    }
}
