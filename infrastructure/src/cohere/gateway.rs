//! Cohere gateway adapter
//!
//! Implements [`LlmGateway`] against the Cohere chat API. The API key is
//! resolved from the environment at construction time but its absence is
//! only surfaced when the first completion is requested, so a session
//! over local data can start without credentials.

use crate::cohere::protocol::{ApiErrorBody, ChatRequest, ChatResponse};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use topichat_application::{GatewayError, LlmGateway};
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.cohere.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Adapter for the Cohere `/v1/chat` endpoint
pub struct CohereGateway {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl CohereGateway {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Self::http_client(),
            api_key: Some(api_key.into()),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Build a gateway with the key taken from `COHERE_API_KEY`, falling
    /// back to `APIKEY`. Never fails: a missing key becomes
    /// [`GatewayError::MissingApiKey`] on the first call.
    pub fn from_env(model: impl Into<String>) -> Self {
        let api_key = std::env::var("COHERE_API_KEY")
            .or_else(|_| std::env::var("APIKEY"))
            .ok();

        Self {
            client: Self::http_client(),
            api_key,
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (for self-hosted proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn http_client() -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default()
    }

    fn map_transport_error(err: reqwest::Error) -> GatewayError {
        if err.is_timeout() {
            GatewayError::Network("request timed out".to_string())
        } else {
            GatewayError::Network(err.to_string())
        }
    }

    async fn map_status_error(status: StatusCode, response: reqwest::Response) -> GatewayError {
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::Auth(message),
            StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited,
            _ => GatewayError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl LlmGateway for CohereGateway {
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or(GatewayError::MissingApiKey)?;

        let request = ChatRequest {
            model: &self.model,
            message: prompt,
        };

        debug!("Sending chat request to {} ({})", self.base_url, self.model);

        let response = self
            .client
            .post(format!("{}/v1/chat", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::map_status_error(status, response).await);
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Ok(body.text)
    }
}
