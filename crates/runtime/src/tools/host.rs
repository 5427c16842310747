//! Tool host trait.

use serde_json::{Map, Value};
use std::future::Future;

/// Trait for tool execution hosts.
///
/// Invocation never fails: implementations fold every failure into an
/// error marker value (`{"error": "..."}`) so the model can narrate it.
pub trait ToolHost: Send + Sync {
    /// Invoke a tool by name.
    fn invoke(
        &self,
        name: &str,
        arguments: Map<String, Value>,
    ) -> impl Future<Output = Value> + Send;
}

/// Build the error marker handed back to the model.
pub fn error_marker(message: impl std::fmt::Display) -> Value {
    serde_json::json!({ "error": format!("Error executing tool: {message}") })
}
