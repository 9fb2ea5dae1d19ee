//! Aggregate Topics use case.
//!
//! Merges topic data parsed from every input file into one immutable
//! [`KnowledgeContext`], built exactly once at session startup.

use crate::ports::topic_parser::{ParseError, TopicParserPort};
use crate::ports::topic_source::{SourceError, TopicSourcePort};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use topichat_domain::KnowledgeContext;
use tracing::{debug, info};

/// Errors that can occur during aggregation.
///
/// All of these are fatal: a partial knowledge context would silently
/// degrade answer quality, so the process exits instead of starting a
/// session over incomplete data.
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("failed to serialize topics from {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Use case for building the session's knowledge context.
///
/// For each discovered file, in discovery order: read bytes, hand them
/// to the parse capability, serialize the resulting topic list, and
/// append it as one context section. The context starts from an
/// explicit empty section list; there is no mutable accumulator.
pub struct AggregateTopicsUseCase {
    source: Arc<dyn TopicSourcePort>,
    parser: Arc<dyn TopicParserPort>,
}

impl AggregateTopicsUseCase {
    pub fn new(source: Arc<dyn TopicSourcePort>, parser: Arc<dyn TopicParserPort>) -> Self {
        Self { source, parser }
    }

    pub fn execute(&self, dir: &Path) -> Result<KnowledgeContext, AggregateError> {
        let paths = self.source.discover(dir)?;
        info!("Aggregating topics from {} input files", paths.len());

        let mut sections = Vec::with_capacity(paths.len());
        for path in &paths {
            let bytes = self.source.read(path)?;
            let topics = self
                .parser
                .parse(&bytes)
                .map_err(|source| AggregateError::Parse {
                    path: path.clone(),
                    source,
                })?;

            debug!("Parsed {} topics from {}", topics.len(), path.display());

            let serialized =
                serde_json::to_string(&topics).map_err(|source| AggregateError::Serialize {
                    path: path.clone(),
                    source,
                })?;
            sections.push(serialized);
        }

        Ok(KnowledgeContext::new(sections))
    }
}
