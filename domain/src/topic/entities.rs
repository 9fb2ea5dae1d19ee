//! Topic entities and the knowledge context

use serde::{Deserialize, Serialize};

/// One issue/comment record parsed from an input file (Entity)
///
/// Attributes are whatever the source format defines. The session treats
/// a topic only as serializable data and never inspects individual fields,
/// so the record is kept as an opaque JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topic(serde_json::Value);

impl Topic {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Access the underlying record
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Aggregated textual representation of all topics across all input
/// files for one session (Value Object)
///
/// Built exactly once at startup and immutable thereafter. Section order
/// follows the order input files were discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeContext {
    text: String,
    section_count: usize,
}

impl KnowledgeContext {
    /// Build the context from one serialized topic list per input file,
    /// in discovery order.
    pub fn new(sections: Vec<String>) -> Self {
        let section_count = sections.len();
        Self {
            text: sections.join("\n"),
            section_count,
        }
    }

    /// The full aggregated text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of input files that contributed a section
    pub fn section_count(&self) -> usize {
        self.section_count
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for KnowledgeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_topic_is_opaque_json() {
        let topic: Topic = serde_json::from_str(r#"{"id":1,"title":"A"}"#).unwrap();
        assert_eq!(topic.as_value()["title"], "A");

        // Transparent representation: serializes back to the bare record
        let text = serde_json::to_string(&topic).unwrap();
        assert_eq!(text, r#"{"id":1,"title":"A"}"#);
    }

    #[test]
    fn test_topic_list_serializes_as_array() {
        let topics = vec![
            Topic::new(json!({"id": 1, "title": "A"})),
            Topic::new(json!({"id": 2, "title": "B"})),
        ];
        let text = serde_json::to_string(&topics).unwrap();
        assert_eq!(text, r#"[{"id":1,"title":"A"},{"id":2,"title":"B"}]"#);
    }

    #[test]
    fn test_context_preserves_section_order() {
        let ctx = KnowledgeContext::new(vec![
            r#"[{"id":1,"title":"A"}]"#.to_string(),
            r#"[{"id":2,"title":"B"}]"#.to_string(),
        ]);

        assert_eq!(ctx.section_count(), 2);
        let first = ctx.as_str().find("\"title\":\"A\"").unwrap();
        let second = ctx.as_str().find("\"title\":\"B\"").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_empty_context() {
        let ctx = KnowledgeContext::new(Vec::new());
        assert!(ctx.is_empty());
        assert_eq!(ctx.section_count(), 0);
    }
}
