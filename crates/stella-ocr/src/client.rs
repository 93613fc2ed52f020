use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use stella_config::ollama::OllamaConfig;

use crate::{OcrError, OcrProvider};

/// Client for the Ollama `/api/generate` endpoint
#[derive(Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    generate_url: String,
    model: String,
    prompt: String,
    timeout_seconds: u64,
}

impl OllamaClient {
    pub fn new(config: &OllamaConfig) -> Result<Self, OcrError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(OcrError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            generate_url: config.generate_url(),
            model: config.model.clone(),
            prompt: config.prompt.clone(),
            timeout_seconds: config.timeout_seconds,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transport_error(&self, error: reqwest::Error) -> OcrError {
        if error.is_timeout() {
            OcrError::Timeout {
                url: self.base_url.clone(),
                seconds: self.timeout_seconds,
            }
        } else {
            OcrError::Unreachable {
                url: self.base_url.clone(),
                source: error,
            }
        }
    }
}

#[async_trait]
impl OcrProvider for OllamaClient {
    fn name(&self) -> &str {
        "Ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn recognize(&self, image_bytes: &[u8]) -> Result<String, OcrError> {
        let request = GenerateRequest::new(&self.model, &self.prompt, image_bytes);

        tracing::debug!(model = %self.model, bytes = image_bytes.len(), "Sending generate request");

        let response = self
            .client
            .post(&self.generate_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        tracing::debug!(%status, "Generate response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OcrError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        let parsed: GenerateResponse = serde_json::from_str(&body)?;
        parsed.into_text()
    }
}

/// Non-streaming generate request carrying a single image
#[derive(Debug, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub images: Vec<String>,
    pub stream: bool,
}

impl GenerateRequest {
    pub fn new(model: &str, prompt: &str, image_bytes: &[u8]) -> Self {
        Self {
            model: model.to_string(),
            prompt: prompt.to_string(),
            images: vec![general_purpose::STANDARD.encode(image_bytes)],
            stream: false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl GenerateResponse {
    /// Extracted text, or the service's own error when no text came back
    pub fn into_text(self) -> Result<String, OcrError> {
        let text = self.response.unwrap_or_default();

        if text.is_empty() {
            if let Some(error) = self.error {
                return Err(OcrError::Service(error));
            }
        }

        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_expected_shape() {
        let request = GenerateRequest::new("olmocr", "read it", b"abc");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "model": "olmocr",
                "prompt": "read it",
                "images": ["YWJj"],
                "stream": false,
            })
        );
    }

    #[test]
    fn text_wins_over_error() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"response": " HELLO \n", "error": "ignored"}"#).unwrap();
        assert_eq!(response.into_text().unwrap(), "HELLO");
    }

    #[test]
    fn empty_text_surfaces_error() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"response": "", "error": "model not loaded"}"#).unwrap();
        let err = response.into_text().unwrap_err();
        assert_eq!(err.to_string(), "model not loaded");
    }

    #[test]
    fn neither_field_is_empty_text() {
        let response: GenerateResponse = serde_json::from_str(r#"{"done": true}"#).unwrap();
        assert_eq!(response.into_text().unwrap(), "");
    }
}
