//! Wire protocol messages.
//!
//! Requests and responses are serialized as internally-tagged JSON frames.
//! Four request kinds multiplex over one duplex channel without framing
//! because every request gets exactly one reply before the next is sent.

use serde::{Deserialize, Serialize};

use cardfile_store::Contact;

/// A request frame sent from the client to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "request", rename_all = "snake_case")]
pub enum WireRequest {
    /// Append a contact.
    Insert { name: String, phone: String },
    /// Snapshot the collection.
    List,
    /// Look up a contact by name, case-insensitively.
    Find { name: String },
    /// Ask the worker to acknowledge and terminate its loop.
    Quit,
}

/// A response frame sent from the worker back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "response", rename_all = "snake_case")]
pub enum WireResponse {
    /// The insert was applied and persisted.
    Inserted,
    /// The collection snapshot, in insertion order.
    Contacts { contacts: Vec<Contact> },
    /// The first matching contact.
    Found { contact: Contact },
    /// No contact matched. A normal result, not a fault.
    NotFound { name: String },
    /// The operation reached the store and the store failed.
    Failed { message: String },
    /// Final acknowledgment of a `Quit`; the worker stops after sending it.
    Bye,
}
