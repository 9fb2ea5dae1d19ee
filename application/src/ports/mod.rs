//! Port definitions
//!
//! Interfaces the application layer needs from the outside world.
//! Implementations (adapters) live in the infrastructure layer.

pub mod export_sink;
pub mod llm_gateway;
pub mod topic_parser;
pub mod topic_source;
