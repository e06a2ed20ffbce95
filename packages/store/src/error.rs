//! Error types for the store layer.

use thiserror::Error;

/// Errors from the persistence adapter.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The backing file could not be read or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The saved collection could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The collection could not be encoded for saving.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Errors that can occur in the contact store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persistence collaborator failed during save or load.
    ///
    /// A mutation that hits this error has been rolled back in memory:
    /// it was never acknowledged and is not observable afterwards.
    #[error("store unavailable: {0}")]
    Unavailable(#[from] PersistError),
}
