//! The two-turn tool-call protocol.
//!
//! A turn sends the conversation to the model once. If the reply carries a
//! [`Directive`], the named tool is invoked, its result is appended to the
//! history, and the model is asked a second time for the final answer. The
//! second reply is returned as-is and never scanned for further directives.

use crate::directive::Directive;
use crate::model::{Backend, Message, ModelError};
use crate::prompt::SYSTEM_PROMPT;
use crate::tools::ToolHost;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The outcome of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Final answer for the caller.
    pub text: String,
    /// Name of the tool invoked during the turn, if any.
    pub tool: Option<String>,
}

/// Drives a single caller turn against a backend and a tool host.
///
/// Holds no per-turn state, so one instance can serve concurrent turns.
pub struct Orchestrator<B, T> {
    backend: B,
    tools: T,
    system: Arc<str>,
}

impl<B: Backend, T: ToolHost> Orchestrator<B, T> {
    /// Create an orchestrator using the built-in system prompt.
    pub fn new(backend: B, tools: T) -> Self {
        Self {
            backend,
            tools,
            system: Arc::from(SYSTEM_PROMPT),
        }
    }

    /// Replace the system prompt.
    pub fn with_system(mut self, system: impl Into<Arc<str>>) -> Self {
        self.system = system.into();
        self
    }

    /// The system prompt sent first in every conversation.
    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn tools(&self) -> &T {
        &self.tools
    }

    /// Answer `prompt` in the context of `history`.
    ///
    /// When a tool is invoked, exactly two messages are appended to
    /// `history`: the model's directive-bearing reply and a user message
    /// carrying the tool result. Otherwise `history` is left untouched.
    /// Failures never escape; they come back as the reply text.
    pub async fn ask(&self, prompt: &str, history: &mut Vec<Message>) -> Reply {
        let mut conversation = Vec::with_capacity(history.len() + 4);
        conversation.push(Message::system(&*self.system));
        conversation.extend(history.iter().cloned());
        conversation.push(Message::user(prompt));

        debug!(messages = conversation.len(), "Requesting first completion");
        let first = match self.backend.complete(&conversation).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "First completion failed");
                return Reply {
                    text: connection_error(&e),
                    tool: None,
                };
            }
        };

        let Directive::Call { name, arguments } = Directive::parse(&first) else {
            debug!("No directive in reply");
            return Reply {
                text: first,
                tool: None,
            };
        };

        info!(tool = %name, arguments = arguments.len(), "Directive detected");
        let result = self.tools.invoke(&name, arguments).await;

        let appended = [
            Message::assistant(first),
            Message::user(format!("Result of {name}: {result}")),
        ];
        history.extend(appended.iter().cloned());
        conversation.extend(appended);

        debug!(messages = conversation.len(), "Requesting second completion");
        let text = match self.backend.complete(&conversation).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, tool = %name, "Second completion failed");
                connection_error(&e)
            }
        };

        Reply {
            text,
            tool: Some(name),
        }
    }
}

fn connection_error(error: &ModelError) -> String {
    format!("Connection error: {error}")
}
