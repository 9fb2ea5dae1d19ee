//! Infrastructure layer for topichat
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod cohere;
pub mod config;
pub mod export;
pub mod topics;

// Re-export commonly used types
pub use cohere::CohereGateway;
pub use config::{ConfigLoader, FileConfig};
pub use export::JsonFileExporter;
pub use topics::{FsTopicSource, JsonTopicParser};
