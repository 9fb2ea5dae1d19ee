//! JSON topic parser
//!
//! Default implementation of the external parse capability: each input
//! file is a JSON array of topic records. The records themselves stay
//! opaque; only the list structure is enforced.

use topichat_application::{ParseError, TopicParserPort};
use topichat_domain::Topic;

/// Parser for JSON topic export files
#[derive(Debug, Clone, Default)]
pub struct JsonTopicParser;

impl JsonTopicParser {
    pub fn new() -> Self {
        Self
    }
}

impl TopicParserPort for JsonTopicParser {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<Topic>, ParseError> {
        let value: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|e| ParseError::Malformed(e.to_string()))?;

        match value {
            serde_json::Value::Array(items) => {
                Ok(items.into_iter().map(Topic::new).collect())
            }
            _ => Err(ParseError::NotAList),
        }
    }
}
