//! Topic source port
//!
//! Defines how the aggregation use case discovers and reads topic
//! files. Keeping the file system behind a port lets the aggregation
//! invariants be tested without touching disk.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while locating or reading input files
///
/// All variants are fatal for the run: the session never starts from a
/// partial or empty knowledge context.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("'{path}' is not a readable directory: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no .{extension} topic files found in {path}")]
    NoTopicFiles { path: PathBuf, extension: String },

    #[error("failed to read {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Source of raw topic file bytes
pub trait TopicSourcePort: Send + Sync {
    /// List topic files under `dir` in deterministic discovery order.
    ///
    /// Fails if the directory cannot be read or contains no matching
    /// files; never returns an empty list.
    fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>, SourceError>;

    /// Read the raw bytes of one discovered file
    fn read(&self, path: &Path) -> Result<Vec<u8>, SourceError>;
}
