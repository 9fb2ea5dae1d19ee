//! LLM Gateway port
//!
//! Defines the interface for the remote text-completion service that
//! answers questions and reformats exports.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a model call
///
/// All of these are recovered locally by the session: the error is
/// reported to the user and the menu loop continues.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("no API key configured; set COHERE_API_KEY in the environment or a .env file")]
    MissingApiKey,

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("rate limited by the model service; try again in a moment")]
    RateLimited,

    #[error("network error: {0}")]
    Network(String),

    #[error("model request failed (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("unexpected model response: {0}")]
    InvalidResponse(String),
}

/// Gateway for model completions
///
/// One prompt in, one answer out. There is no session state on the
/// model side; every call carries its full instruction text.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send an instruction prompt and return the model's answer text
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError>;
}
