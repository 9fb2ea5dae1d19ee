//! Prompt templates for the topic Q&A session

use crate::core::question::Question;
use crate::topic::KnowledgeContext;

/// Templates for the instruction text sent to the model client
///
/// Pure string construction; no side effects.
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt for answering a user question strictly from the topic data.
    ///
    /// The model is told to answer only from the supplied data and to omit
    /// anything not present in it. The closing instruction about empty
    /// questions is a fallback only: the session intercepts blank input
    /// before a prompt is ever built.
    pub fn ask(context: &KnowledgeContext, question: &Question) -> String {
        format!(
            r#"Based on the following data:

{context}

You should only create the response based on the information given.
Information that is not found in the data above must not be presented
in the result. Your job is to answer the following question: {question}

If the question is empty, say that you can't process empty questions
and to try again."#,
            context = context.as_str(),
            question = question.content(),
        )
    }

    /// Prompt for reshaping one serialized exchange into a fixed JSON
    /// structure.
    ///
    /// The output is best-effort text from the model, not verified
    /// structured data; callers print it and never parse it back.
    pub fn export_message(serialized_message: &str) -> String {
        format!(
            r#"Based on the following data:

{serialized_message}

The response should keep the structure:
{{
  "user": ...,
  "assistant": ...
}}

You should only create a JSON structure from these data, without
altering their content."#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> KnowledgeContext {
        KnowledgeContext::new(vec![
            r#"[{"id":1,"title":"A"}]"#.to_string(),
            r#"[{"id":2,"title":"B"}]"#.to_string(),
        ])
    }

    #[test]
    fn test_ask_prompt_contains_context_and_question() {
        let question = Question::new("What issues exist?");
        let prompt = PromptTemplate::ask(&context(), &question);

        assert!(prompt.contains(r#"{"id":1,"title":"A"}"#));
        assert!(prompt.contains(r#"{"id":2,"title":"B"}"#));
        assert!(prompt.contains("What issues exist?"));
    }

    #[test]
    fn test_ask_prompt_restricts_model_to_given_data() {
        let question = Question::new("What issues exist?");
        let prompt = PromptTemplate::ask(&context(), &question);

        assert!(prompt.contains("only create the response based on the information given"));
        assert!(prompt.contains("must not be presented"));
        assert!(prompt.contains("can't process empty questions"));
    }

    #[test]
    fn test_export_prompt_keeps_message_and_shape() {
        let serialized = r#"{"user":"q","assistant":"a"}"#;
        let prompt = PromptTemplate::export_message(serialized);

        assert!(prompt.contains(serialized));
        assert!(prompt.contains("\"user\""));
        assert!(prompt.contains("\"assistant\""));
        assert!(prompt.contains("without\naltering their content"));
    }
}
