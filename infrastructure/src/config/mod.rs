//! Configuration file loading

pub mod file_config;
pub mod loader;

pub use file_config::{ExportSection, FileConfig, ModelSection, TopicsSection};
pub use loader::ConfigLoader;
