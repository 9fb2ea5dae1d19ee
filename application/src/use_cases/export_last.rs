//! Export Last use case.
//!
//! Delegates restructuring of the most recent exchange to the model and
//! returns the resulting text. This is a convenience transform, not a
//! source of truth: the output is printed, never parsed or persisted.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use std::sync::Arc;
use thiserror::Error;
use topichat_domain::{Message, PromptTemplate};
use tracing::debug;

/// Errors that can occur while exporting the last message.
#[derive(Error, Debug)]
pub enum ExportLastError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Use case for reshaping the last exchange via the model.
pub struct ExportLastUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl ExportLastUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, message: &Message) -> Result<String, ExportLastError> {
        let serialized = serde_json::to_string_pretty(message)?;
        let prompt = PromptTemplate::export_message(&serialized);
        debug!("Export prompt is {} bytes", prompt.len());

        Ok(self.gateway.complete(&prompt).await?)
    }
}
