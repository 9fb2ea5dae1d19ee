//! Local file system topic source
//!
//! Implements [`TopicSourcePort`] by listing a directory and filtering
//! on the configured extension. Discovery order is sorted by file name
//! so the knowledge context is deterministic across runs.

use std::fs;
use std::path::{Path, PathBuf};
use topichat_application::{SourceError, TopicSourcePort};
use tracing::debug;

/// Topic source reading from the local file system
#[derive(Debug, Clone)]
pub struct FsTopicSource {
    extension: String,
}

impl FsTopicSource {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }
}

impl TopicSourcePort for FsTopicSource {
    fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
        let entries = fs::read_dir(dir).map_err(|source| SourceError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
            })
            .collect();

        if paths.is_empty() {
            return Err(SourceError::NoTopicFiles {
                path: dir.to_path_buf(),
                extension: self.extension.clone(),
            });
        }

        paths.sort();
        debug!("Discovered {} topic files in {}", paths.len(), dir.display());
        Ok(paths)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, SourceError> {
        fs::read(path).map_err(|source| SourceError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        })
    }
}
