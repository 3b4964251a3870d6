//! AiClient trait implementation for GeminiClient, plus the model probe.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, Message};

use super::client::{error_detail, GeminiClient};

impl GeminiClient {
    /// Fetch the model resource once to confirm the key and model are accepted.
    pub async fn verify(&self) -> Result<(), AiError> {
        debug!(model = %self.config.model, "Gemini model probe");

        let response = self
            .http
            .get(self.model_url())
            .header("x-goog-api-key", &self.config.api_key)
            .send()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::Setup(error_detail(status, &text)));
        }

        Ok(())
    }
}

#[async_trait]
impl AiClient for GeminiClient {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(messages);
        let url = self.api_url();

        debug!(model = %self.config.model, messages = messages.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::RemoteService(error_detail(status, &text)));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::RemoteService(format!("malformed response: {e}")))?;

        self.parse_response(json)
    }
}
