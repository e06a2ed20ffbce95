//! Backend selection: one surface over both dispatch topologies.
//!
//! The menu does not care whether its operations travel through the
//! shared-memory queue or across the wire; this module folds both into a
//! single blocking API and owns the graceful shutdown of whichever is
//! active.

use std::sync::Arc;
use std::thread::JoinHandle;

use thiserror::Error;

use cardfile_dispatch::{DispatchConfig, DispatchError, Dispatcher, Operation, Reply};
use cardfile_store::{Contact, ContactStore, Persistence};
use cardfile_wire::{WireClient, WireError, WireRequest, WireResponse};

/// Errors surfaced to the menu.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Wire(#[from] WireError),

    /// The wire worker reported a store failure.
    #[error("{0}")]
    Failed(String),

    /// The peer answered with a reply that does not fit the request.
    #[error("unexpected reply to {0}")]
    UnexpectedReply(&'static str),
}

/// The active dispatch topology behind the menu.
pub enum Backend {
    /// Bounded queue + worker thread sharing the store with this thread.
    Queue { dispatcher: Dispatcher },
    /// Isolated worker owning its store, reached over a duplex channel.
    Wire {
        client: WireClient,
        worker: JoinHandle<Result<(), WireError>>,
    },
}

impl Backend {
    /// Start the shared-memory topology over an already-open store.
    pub fn queue(store: Arc<ContactStore>, config: DispatchConfig) -> std::io::Result<Self> {
        let dispatcher = Dispatcher::start(store, config)?;
        Ok(Backend::Queue { dispatcher })
    }

    /// Start the message-passing topology; the worker opens its own store
    /// from the given persistence adapter.
    pub fn wire(persist: Box<dyn Persistence>) -> std::io::Result<Self> {
        let (client, worker) = cardfile_wire::spawn(persist)?;
        Ok(Backend::Wire { client, worker })
    }

    /// Append a contact.
    pub fn insert(&mut self, name: &str, phone: &str) -> Result<(), BackendError> {
        let name = name.to_string();
        let phone = phone.to_string();
        match self {
            Backend::Queue { dispatcher } => {
                let ticket = dispatcher.submit(Operation::Insert { name, phone })?;
                match ticket.wait()? {
                    Reply::Inserted => Ok(()),
                    _ => Err(BackendError::UnexpectedReply("insert")),
                }
            }
            Backend::Wire { client, .. } => {
                match client.call(WireRequest::Insert { name, phone })? {
                    WireResponse::Inserted => Ok(()),
                    WireResponse::Failed { message } => Err(BackendError::Failed(message)),
                    _ => Err(BackendError::UnexpectedReply("insert")),
                }
            }
        }
    }

    /// Snapshot the collection.
    pub fn list(&mut self) -> Result<Vec<Contact>, BackendError> {
        match self {
            Backend::Queue { dispatcher } => {
                let ticket = dispatcher.submit(Operation::List)?;
                match ticket.wait()? {
                    Reply::Contacts(contacts) => Ok(contacts),
                    _ => Err(BackendError::UnexpectedReply("list")),
                }
            }
            Backend::Wire { client, .. } => match client.call(WireRequest::List)? {
                WireResponse::Contacts { contacts } => Ok(contacts),
                WireResponse::Failed { message } => Err(BackendError::Failed(message)),
                _ => Err(BackendError::UnexpectedReply("list")),
            },
        }
    }

    /// Case-insensitive lookup; `None` means no match.
    pub fn find(&mut self, name: &str) -> Result<Option<Contact>, BackendError> {
        let name = name.to_string();
        match self {
            Backend::Queue { dispatcher } => {
                let ticket = dispatcher.submit(Operation::Find { name })?;
                match ticket.wait()? {
                    Reply::Found(contact) => Ok(Some(contact)),
                    Reply::NotFound { .. } => Ok(None),
                    _ => Err(BackendError::UnexpectedReply("find")),
                }
            }
            Backend::Wire { client, .. } => match client.call(WireRequest::Find { name })? {
                WireResponse::Found { contact } => Ok(Some(contact)),
                WireResponse::NotFound { .. } => Ok(None),
                WireResponse::Failed { message } => Err(BackendError::Failed(message)),
                _ => Err(BackendError::UnexpectedReply("find")),
            },
        }
    }

    /// Graceful shutdown of whichever topology is active.
    ///
    /// Queue: drain the bounded queue, join the worker. Wire: send `Quit`,
    /// wait for the acknowledgment, join the worker.
    pub fn close(self) -> Result<(), BackendError> {
        match self {
            Backend::Queue { dispatcher } => {
                dispatcher.shutdown();
                Ok(())
            }
            Backend::Wire { client, worker } => {
                client.quit()?;
                match worker.join() {
                    Ok(session) => Ok(session?),
                    Err(_) => Err(BackendError::Failed("wire worker panicked".into())),
                }
            }
        }
    }
}
