//! Conversation export adapters

pub mod file_exporter;

pub use file_exporter::JsonFileExporter;
