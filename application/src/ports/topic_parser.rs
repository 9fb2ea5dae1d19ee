//! Topic parser port
//!
//! The document-parsing subsystem is an external capability:
//! `parse(bytes) -> list of Topic`. The default adapter reads JSON
//! topic exports; richer formats plug in behind the same trait.

use thiserror::Error;
use topichat_domain::Topic;

/// Errors raised while parsing one input file
///
/// A parse failure aborts aggregation for the whole run; bad files are
/// never skipped silently.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed topic data: {0}")]
    Malformed(String),

    #[error("topic data is not a list of records")]
    NotAList,
}

/// Parser turning one file's raw bytes into structured topics
pub trait TopicParserPort: Send + Sync {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<Topic>, ParseError>;
}
