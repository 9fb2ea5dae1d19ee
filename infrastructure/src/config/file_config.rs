//! Configuration file schema

use serde::{Deserialize, Serialize};

/// Root configuration loaded from `topichat.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub model: ModelSection,
    pub topics: TopicsSection,
    pub export: ExportSection,
}

/// `[model]` section: which model answers and where to reach it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSection {
    pub name: String,
    pub base_url: String,
}

impl Default for ModelSection {
    fn default() -> Self {
        Self {
            name: "command-r".to_string(),
            base_url: "https://api.cohere.com".to_string(),
        }
    }
}

/// `[topics]` section: input file discovery
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicsSection {
    /// File extension matched when scanning the topics directory
    pub extension: String,
}

impl Default for TopicsSection {
    fn default() -> Self {
        Self {
            extension: "json".to_string(),
        }
    }
}

/// `[export]` section: durable chat export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// File name written into the working directory by Export Chat
    pub file_name: String,
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            file_name: "topichat-export.json".to_string(),
        }
    }
}
