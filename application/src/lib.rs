//! Application layer for topichat
//!
//! This crate contains use cases and port definitions. It depends only
//! on the domain layer; adapters for the ports live in the
//! infrastructure layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    export_sink::{ExportSink, StorageError},
    llm_gateway::{GatewayError, LlmGateway},
    topic_parser::{ParseError, TopicParserPort},
    topic_source::{SourceError, TopicSourcePort},
};
pub use use_cases::aggregate_topics::{AggregateError, AggregateTopicsUseCase};
pub use use_cases::ask_question::{AskError, AskQuestionUseCase};
pub use use_cases::export_last::{ExportLastError, ExportLastUseCase};
