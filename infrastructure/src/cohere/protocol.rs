//! Wire types for the Cohere `/v1/chat` endpoint

use serde::{Deserialize, Serialize};

/// Request body for a chat completion
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub message: &'a str,
}

/// Successful chat response; only the answer text is consumed
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub text: String,
}

/// Error body returned on non-success status codes
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = ChatRequest {
            model: "command-r",
            message: "What issues exist?",
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "command-r");
        assert_eq!(value["message"], "What issues exist?");
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let body = r#"{"response_id":"abc","text":"Two issues.","finish_reason":"COMPLETE"}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text, "Two issues.");
    }

    #[test]
    fn test_error_body() {
        let body = r#"{"message":"invalid api token"}"#;
        let error: ApiErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(error.message, "invalid api token");
    }
}
