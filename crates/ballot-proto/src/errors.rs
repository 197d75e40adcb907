//! Error types for channel payload handling.

use thiserror::Error;

/// Result type alias for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors raised while decoding or encoding host shell payloads.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The host pushed a message on a channel the widget does not listen to.
    #[error("unknown channel: {0}")]
    UnknownChannel(String),

    /// The payload is not valid JSON for the channel's shape.
    #[error("malformed {channel} payload: {source}")]
    Decode {
        /// Channel the payload arrived on.
        channel: &'static str,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A payload could not be serialized.
    #[error("failed to encode {channel} payload: {source}")]
    Encode {
        /// Channel the payload was destined for.
        channel: &'static str,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}
