//! Export sink port
//!
//! Durable serialization of the conversation history.

use std::path::PathBuf;
use thiserror::Error;
use topichat_domain::ConversationHistory;

/// Errors raised while writing an export artifact
///
/// Fatal for the export action only; the session reports it and
/// returns to the menu.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to write export file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Sink that persists the full conversation history
pub trait ExportSink: Send + Sync {
    /// Write the history as indented structured text, overwriting any
    /// previous export, and return the resolved file path.
    fn write_history(&self, history: &ConversationHistory) -> Result<PathBuf, StorageError>;
}
