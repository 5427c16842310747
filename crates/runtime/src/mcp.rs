//! MCP (Model Context Protocol) client integration.
//!
//! Talks to a remote tool server over the Streamable HTTP transport using the
//! official rmcp SDK.
//!
//! # Example
//!
//! ```no_run
//! use runtime::mcp::{McpClient, McpServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = McpServerConfig::new("weather", "http://localhost:8000/mcp");
//! let client = McpClient::connect(&config).await?;
//!
//! let mut arguments = serde_json::Map::new();
//! arguments.insert("ciudad".into(), "Madrid".into());
//! let result = client.call_tool("obtener_clima", arguments).await?;
//! println!("{:?}", result.content);
//!
//! client.shutdown().await?;
//! # Ok(())
//! # }
//! ```

use rmcp::{
    ServiceExt,
    model::{CallToolRequestParams, CallToolResult},
    service::{ClientInitializeError, RoleClient, RunningService, ServiceError},
    transport::StreamableHttpClientTransport,
};
use serde_json::{Map, Value};
use std::time::Duration;
use tokio::task::JoinError;
use tracing::debug;

/// Default timeout for each MCP phase (connect, call).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Where a remote MCP server lives.
#[derive(Debug, Clone)]
pub struct McpServerConfig {
    pub name: String,
    pub url: String,
    pub timeout: Duration,
}

impl McpServerConfig {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// An initialized session with a remote MCP server.
///
/// End it with [`McpClient::shutdown`]. Once a server has handed out a
/// session id, the transport deletes that session whenever it stops, even
/// when the handshake itself fails part-way.
pub struct McpClient {
    name: String,
    service: RunningService<RoleClient, ()>,
}

impl McpClient {
    /// Connect and run the initialize handshake.
    pub async fn connect(config: &McpServerConfig) -> Result<Self, ClientInitializeError> {
        let transport = StreamableHttpClientTransport::from_uri(config.url.as_str());
        let service = ().serve(transport).await?;

        if let Some(info) = service.peer().peer_info() {
            debug!(
                server = %config.name,
                remote = %info.server_info.name,
                protocol = %info.protocol_version,
                "MCP session initialized"
            );
        }

        Ok(Self {
            name: config.name.clone(),
            service,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Call a tool with the given name and arguments.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Map<String, Value>,
    ) -> Result<CallToolResult, ServiceError> {
        let params = CallToolRequestParams {
            name: name.to_string().into(),
            arguments: Some(arguments),
            meta: None,
            task: None,
        };

        self.service.call_tool(params).await
    }

    /// Stop the session and release it on the server.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        let reason = self.service.cancel().await?;
        debug!(server = %self.name, ?reason, "MCP session closed");
        Ok(())
    }
}
