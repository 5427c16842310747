//! Ollama chat API backend.

use super::{Backend, Message, ModelError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "qwen2.5:3b";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
    options: ApiOptions,
}

#[derive(Debug, Serialize)]
struct ApiOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    message: ApiMessage,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    content: String,
}

/// Builder for creating an Ollama backend.
#[derive(Debug, Clone)]
pub struct OllamaBackendBuilder {
    endpoint: String,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl OllamaBackendBuilder {
    /// Create a new builder for the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL of the Ollama server.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the sampling temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the backend.
    pub fn build(self) -> Result<OllamaBackend, ModelError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ModelError::Network(e.to_string()))?;

        let url = format!("{}/api/chat", self.endpoint.trim_end_matches('/'));
        Ok(OllamaBackend {
            client,
            url,
            model: self.model,
            temperature: self.temperature,
        })
    }
}

/// Ollama chat backend (non-streaming).
pub struct OllamaBackend {
    client: reqwest::Client,
    url: String,
    model: String,
    temperature: f32,
}

impl OllamaBackend {
    /// Create a builder for the Ollama backend.
    pub fn builder(model: impl Into<String>) -> OllamaBackendBuilder {
        OllamaBackendBuilder::new(model)
    }
}

impl std::fmt::Display for OllamaBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ollama({}, {})", self.model, self.url)
    }
}

impl Backend for OllamaBackend {
    async fn complete(&self, messages: &[Message]) -> Result<String, ModelError> {
        let request = ApiRequest {
            model: &self.model,
            messages,
            stream: false,
            options: ApiOptions {
                temperature: self.temperature,
            },
        };

        debug!(model = %self.model, messages = messages.len(), "Sending chat request");

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Api(format!("{status}: {body}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))?;

        Ok(api_response.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_shape() {
        let messages = [Message::system("sys"), Message::user("hi")];
        let request = ApiRequest {
            model: "qwen2.5:3b",
            messages: &messages,
            stream: false,
            options: ApiOptions { temperature: 0.5 },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "qwen2.5:3b",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "hi"}
                ],
                "stream": false,
                "options": {"temperature": 0.5}
            })
        );
    }

    #[test]
    fn backend_display() {
        let backend = OllamaBackend::builder("llama3")
            .endpoint("http://10.0.0.2:11434/")
            .build()
            .unwrap();
        assert_eq!(backend.to_string(), "ollama(llama3, http://10.0.0.2:11434/api/chat)");
    }
}
