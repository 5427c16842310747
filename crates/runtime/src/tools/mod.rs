//! Tool execution against remote MCP servers.

pub mod errors;
mod host;
mod mcp_host;
mod output;

pub use errors::ToolError;
pub use host::{ToolHost, error_marker};
pub use mcp_host::McpToolHost;
pub use output::RemoteOutput;
