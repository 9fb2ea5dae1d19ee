//! Topic file discovery and parsing adapters

pub mod parser;
pub mod source;

pub use parser::JsonTopicParser;
pub use source::FsTopicSource;
