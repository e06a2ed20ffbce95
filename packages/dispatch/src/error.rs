//! Error types for the dispatch layer.

use thiserror::Error;

/// Errors surfaced to producers.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The bounded queue stayed full for the whole enqueue timeout.
    ///
    /// The request was never delivered; the producer decides whether to
    /// retry or abandon it.
    #[error("request queue full")]
    QueueFull,

    /// The worker went away without completing the request.
    #[error("dispatch worker gone before completing the request")]
    WorkerGone,

    /// The operation reached the store and the store failed.
    #[error(transparent)]
    Store(#[from] cardfile_store::StoreError),
}
