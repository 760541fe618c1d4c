//! Typed request errors surfaced by the HTTP channels.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error produced by a single request attempt.
///
/// The channels make exactly one attempt per call; retries and token refresh
/// are not their concern, so every failure maps onto one of these variants
/// and propagates unchanged through the service layer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network unreachable, timeout).
    #[error("request failed: {0}")]
    Network(String),

    /// The request body could not be serialized; nothing was sent.
    #[error("could not encode request body: {0}")]
    Encode(String),

    /// The server answered with a non-2xx status.
    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded into the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// The call was made outside a browser environment.
    #[error("not available on the server")]
    Unavailable,
}
