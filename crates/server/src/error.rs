//! Server error types.

use crate::config::ConfigError;
use std::net::SocketAddr;
use thiserror::Error;

/// Startup and serving errors.
///
/// Request handling never produces these; they only end the process.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Configuration is invalid or unreadable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The completion backend could not be built.
    #[error(transparent)]
    Model(#[from] runtime::ModelError),

    /// The listener could not be bound.
    #[error("failed to bind HTTP listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an error.
    #[error("HTTP server error: {0}")]
    Serve(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
