use thiserror::Error;

/// Errors from completion endpoint calls.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// A network error occurred during the API call.
    #[error("network: {0}")]
    Network(String),

    /// The endpoint returned a non-success status.
    #[error("provider api: {0}")]
    Api(String),

    /// The endpoint response could not be parsed.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}
