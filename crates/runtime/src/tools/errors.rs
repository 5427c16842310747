use rmcp::service::{ClientInitializeError, ServiceError};
use thiserror::Error;

/// Errors that can occur during tool execution.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("timeout after {0}ms")]
    Timeout(u128),
    #[error("tool reported an error: {0}")]
    Reported(String),
    #[error("failed to connect: {0}")]
    Connect(#[from] ClientInitializeError),
    #[error("tool call failed: {0}")]
    Call(#[from] ServiceError),
}
