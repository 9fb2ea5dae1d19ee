//! JSON file exporter
//!
//! Implements [`ExportSink`] by writing the whole conversation history
//! as an indented JSON array to a fixed file name, overwriting any
//! previous export.

use std::fs;
use std::path::PathBuf;
use topichat_application::{ExportSink, StorageError};
use topichat_domain::ConversationHistory;
use tracing::debug;

/// Exporter writing pretty-printed JSON into a target directory
pub struct JsonFileExporter {
    directory: PathBuf,
    file_name: String,
}

impl JsonFileExporter {
    pub fn new(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_name: file_name.into(),
        }
    }
}

impl ExportSink for JsonFileExporter {
    fn write_history(&self, history: &ConversationHistory) -> Result<PathBuf, StorageError> {
        let serialized = serde_json::to_string_pretty(history)?;
        let path = self.directory.join(&self.file_name);

        fs::write(&path, serialized).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;

        debug!("Exported {} messages to {}", history.len(), path.display());

        // Prefer the canonical form for the confirmation message
        Ok(fs::canonicalize(&path).unwrap_or(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use topichat_domain::Message;

    #[test]
    fn test_export_round_trips_every_entry() {
        let dir = tempdir().unwrap();
        let exporter = JsonFileExporter::new(dir.path(), "chat.json");

        let mut history = ConversationHistory::new();
        history.push(Message::new("q1", "a1"));
        history.push(Message::new("q2", "a2"));

        let path = exporter.write_history(&history).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        // Indented, human-readable output
        assert!(content.contains('\n'));

        let parsed: Vec<Message> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0], Message::new("q1", "a1"));
        assert_eq!(parsed[1], Message::new("q2", "a2"));
    }

    #[test]
    fn test_export_overwrites_previous_file() {
        let dir = tempdir().unwrap();
        let exporter = JsonFileExporter::new(dir.path(), "chat.json");

        let mut first = ConversationHistory::new();
        first.push(Message::new("old", "old"));
        exporter.write_history(&first).unwrap();

        let mut second = ConversationHistory::new();
        second.push(Message::new("new", "new"));
        let path = exporter.write_history(&second).unwrap();

        let parsed: Vec<Message> = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0], Message::new("new", "new"));
    }

    #[test]
    fn test_unwritable_directory_is_a_storage_error() {
        let exporter = JsonFileExporter::new("/no/such/directory", "chat.json");
        let err = exporter
            .write_history(&ConversationHistory::new())
            .unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
    }
}
