//! Herald HTTP front-end.
//!
//! Exposes the orchestrator over HTTP:
//!
//! - `POST /ask` with `{"prompt": "...", "historial": [...]}` answers with
//!   `{"response": "..."}`, or `400 {"error": "..."}` for a bad body.
//! - `GET /health` answers `{"status": "ok"}`.

pub mod config;
mod error;
mod routes;

pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use routes::{router, serve};
