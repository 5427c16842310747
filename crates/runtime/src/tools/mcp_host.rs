//! MCP-backed tool host.

use super::{RemoteOutput, ToolError, ToolHost, error_marker};
use crate::mcp::{McpClient, McpServerConfig};
use serde_json::{Map, Value};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Tool host backed by a remote MCP server.
///
/// Every invocation opens its own session, makes one call, and shuts the
/// session down again before returning, whether or not the call succeeded.
#[derive(Debug, Clone)]
pub struct McpToolHost {
    config: McpServerConfig,
}

impl McpToolHost {
    pub fn new(config: McpServerConfig) -> Self {
        Self { config }
    }

    /// The server this host dispatches to.
    pub fn config(&self) -> &McpServerConfig {
        &self.config
    }

    async fn call(&self, name: &str, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        let limit = self.config.timeout;
        let expired = || ToolError::Timeout(limit.as_millis());

        let client = timeout(limit, McpClient::connect(&self.config))
            .await
            .map_err(|_| expired())??;

        let result = timeout(limit, client.call_tool(name, arguments))
            .await
            .map_err(|_| expired());

        if let Err(e) = client.shutdown().await {
            warn!(server = %self.config.name, error = %e, "Failed to shut down MCP session");
        }

        let result = result??;
        RemoteOutput::from(result).normalize()
    }
}

impl ToolHost for McpToolHost {
    async fn invoke(&self, name: &str, arguments: Map<String, Value>) -> Value {
        info!(server = %self.config.name, tool = name, "Invoking tool");

        match self.call(name, arguments).await {
            Ok(value) => {
                debug!(tool = name, %value, "Tool returned");
                value
            }
            Err(e) => {
                warn!(tool = name, error = %e, "Tool invocation failed");
                error_marker(e)
            }
        }
    }
}
