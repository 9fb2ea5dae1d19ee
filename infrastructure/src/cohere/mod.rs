//! Cohere chat API adapter

pub mod gateway;
pub mod protocol;

pub use gateway::CohereGateway;
