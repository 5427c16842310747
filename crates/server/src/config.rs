//! Configuration loading from herald.toml.

use runtime::mcp::{self, McpServerConfig};
use runtime::{ModelError, OllamaBackend, model::ollama};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// Top-level configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// HTTP front-end settings.
    #[serde(default)]
    pub server: ServerSection,

    /// Completion endpoint settings.
    #[serde(default)]
    pub model: ModelSection,

    /// Tool server settings.
    #[serde(default)]
    pub tools: ToolsSection,

    /// Replaces the built-in system prompt.
    pub system_prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ModelSection {
    /// Base URL of the Ollama server.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model to use.
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_model_timeout")]
    pub timeout_secs: u64,
}

impl Default for ModelSection {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_model_timeout(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ToolsSection {
    /// Streamable HTTP endpoint of the MCP server.
    #[serde(default = "default_tools_url")]
    pub url: String,

    #[serde(default = "default_tools_timeout")]
    pub timeout_secs: u64,
}

impl Default for ToolsSection {
    fn default() -> Self {
        Self {
            url: default_tools_url(),
            timeout_secs: default_tools_timeout(),
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 5000))
}

fn default_endpoint() -> String {
    ollama::DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    ollama::DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    ollama::DEFAULT_TEMPERATURE
}

fn default_model_timeout() -> u64 {
    ollama::DEFAULT_TIMEOUT.as_secs()
}

fn default_tools_url() -> String {
    "http://localhost:8000/mcp".to_string()
}

fn default_tools_timeout() -> u64 {
    mcp::DEFAULT_TIMEOUT.as_secs()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration.
    pub fn default_config() -> Self {
        Self {
            server: ServerSection::default(),
            model: ModelSection::default(),
            tools: ToolsSection::default(),
            system_prompt: None,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.model.timeout_secs == 0 {
            return Err(ConfigError::Invalid("model.timeout_secs must be positive".into()));
        }
        if self.tools.timeout_secs == 0 {
            return Err(ConfigError::Invalid("tools.timeout_secs must be positive".into()));
        }
        if !self.model.temperature.is_finite() || self.model.temperature < 0.0 {
            return Err(ConfigError::Invalid(
                "model.temperature must be a non-negative number".into(),
            ));
        }
        Ok(())
    }

    /// Build the completion backend.
    pub fn backend(&self) -> Result<OllamaBackend, ModelError> {
        OllamaBackend::builder(&self.model.model)
            .endpoint(&self.model.endpoint)
            .temperature(self.model.temperature)
            .timeout(Duration::from_secs(self.model.timeout_secs))
            .build()
    }

    /// Describe the tool server.
    pub fn tool_server(&self) -> McpServerConfig {
        McpServerConfig::new("tools", &self.tools.url)
            .with_timeout(Duration::from_secs(self.tools.timeout_secs))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:5000".parse().unwrap());
        assert_eq!(config.model.endpoint, "http://localhost:11434");
        assert_eq!(config.model.model, "qwen2.5:3b");
        assert_eq!(config.model.temperature, 0.7);
        assert_eq!(config.tools.url, "http://localhost:8000/mcp");
        assert_eq!(config.tools.timeout_secs, 15);
        assert!(config.system_prompt.is_none());
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::parse(
            r#"
            system_prompt = "Be terse."

            [server]
            bind = "127.0.0.1:8080"

            [model]
            endpoint = "http://10.0.0.5:11434"
            model = "llama3.2"
            temperature = 0.2

            [tools]
            url = "http://tools:9000/mcp"
            timeout_secs = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind.port(), 8080);
        assert_eq!(config.model.model, "llama3.2");
        assert_eq!(config.model.timeout_secs, 120);
        assert_eq!(config.system_prompt.as_deref(), Some("Be terse."));

        let tools = config.tool_server();
        assert_eq!(tools.url, "http://tools:9000/mcp");
        assert_eq!(tools.timeout, Duration::from_secs(5));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = Config::parse("[tools]\ntimeout_secs = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn negative_temperature_is_rejected() {
        let err = Config::parse("[model]\ntemperature = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn bad_bind_address_is_parse_error() {
        let err = Config::parse("[server]\nbind = \"nowhere\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn backend_builds_from_config() {
        let backend = Config::default_config().backend().unwrap();
        assert_eq!(
            backend.to_string(),
            "ollama(qwen2.5:3b, http://localhost:11434/api/chat)"
        );
    }
}
