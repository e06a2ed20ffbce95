//! Error types for the wire layer.

use thiserror::Error;

/// Errors that can occur on a wire session.
#[derive(Debug, Error)]
pub enum WireError {
    /// The peer closed its end of the channel.
    ///
    /// Terminal for the session, not for the process. On the worker side
    /// this is the normal end-of-input signal, not a fault.
    #[error("channel closed by peer")]
    Closed,

    /// A frame could not be encoded for sending.
    #[error("frame encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// A received frame could not be decoded.
    #[error("frame decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The peer broke the request/reply discipline.
    #[error("protocol violation: {0}")]
    Protocol(String),
}
