//! Topic data and the aggregated knowledge context

pub mod entities;

pub use entities::{KnowledgeContext, Topic};
