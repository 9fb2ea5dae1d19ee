//! Ask Question use case.
//!
//! Executes one question/answer exchange: build the instruction prompt
//! from the knowledge context, call the model, return the answer text.
//! The caller appends to history only after this succeeds.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use std::sync::Arc;
use thiserror::Error;
use topichat_domain::{KnowledgeContext, PromptTemplate, Question};
use tracing::{debug, info};

/// Errors that can occur while answering a question.
#[derive(Error, Debug)]
pub enum AskError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("no response from model")]
    EmptyResponse,
}

/// Use case for answering one question from the knowledge context.
pub struct AskQuestionUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl AskQuestionUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(
        &self,
        context: &KnowledgeContext,
        question: &Question,
    ) -> Result<String, AskError> {
        let prompt = PromptTemplate::ask(context, question);
        debug!("Ask prompt is {} bytes", prompt.len());

        let answer = self.gateway.complete(&prompt).await?;
        if answer.trim().is_empty() {
            return Err(AskError::EmptyResponse);
        }

        info!("Model answered with {} bytes", answer.len());
        Ok(answer)
    }
}
