//! Herald runtime: tool-call detection and two-turn orchestration.
//!
//! This crate provides the core of the assistant: a completion backend
//! abstraction, a tolerant parser for tool-call directives embedded in model
//! output, an MCP-backed tool host, and the orchestrator that ties them into
//! a single turn.
//!
//! # Overview
//!
//! - **Backend**: a trait abstracting the completion endpoint (Ollama).
//! - **Directive**: the `USE_TOOL:` / `ARGS:` request found in a reply.
//! - **ToolHost**: a trait for invoking named tools; [`McpToolHost`] talks to
//!   a remote MCP server through [`McpClient`].
//! - **Orchestrator**: runs one turn: completion, optional tool call,
//!   follow-up completion.
//!
//! # Example
//!
//! ```no_run
//! use runtime::{McpServerConfig, McpToolHost, Message, OllamaBackend, Orchestrator};
//!
//! # async fn example() -> Result<(), runtime::ModelError> {
//! let backend = OllamaBackend::builder("qwen2.5:3b").build()?;
//! let tools = McpToolHost::new(McpServerConfig::new("tools", "http://localhost:8000/mcp"));
//! let orchestrator = Orchestrator::new(backend, tools);
//!
//! let mut history: Vec<Message> = Vec::new();
//! let reply = orchestrator.ask("What's the weather in Madrid?", &mut history).await;
//! println!("{}", reply.text);
//! # Ok(())
//! # }
//! ```

mod directive;
pub mod mcp;
pub mod model;
mod orchestrator;
mod prompt;
pub mod tools;

pub use directive::{ARGS_MARKER, Directive, TOOL_MARKER};
pub use mcp::{McpClient, McpServerConfig};
pub use model::{Backend, Message, ModelError, OllamaBackend, OllamaBackendBuilder, Role};
pub use orchestrator::{Orchestrator, Reply};
pub use prompt::SYSTEM_PROMPT;
pub use tools::{McpToolHost, RemoteOutput, ToolError, ToolHost};
