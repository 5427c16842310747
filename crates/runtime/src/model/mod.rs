//! Completion backends and conversation types.

pub mod errors;
pub mod ollama;
pub mod types;

pub use errors::ModelError;
pub use ollama::{OllamaBackend, OllamaBackendBuilder};
pub use types::{Backend, Message, Role};
