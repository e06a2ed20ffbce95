//! Operation and reply variants.
//!
//! The worker dispatches on a closed set of operation kinds. Keeping this a
//! tagged enum (rather than boxed callables) keeps the dispatch table
//! exhaustively checkable.

use cardfile_store::Contact;

/// An operation a producer can ask the worker to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Append a contact.
    Insert { name: String, phone: String },
    /// Snapshot the collection.
    List,
    /// Look up the first contact matching a name, case-insensitively.
    Find { name: String },
}

impl Operation {
    /// Short kind label, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::Insert { .. } => "insert",
            Operation::List => "list",
            Operation::Find { .. } => "find",
        }
    }
}

/// The successful outcome of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The insert was applied and persisted.
    Inserted,
    /// The collection snapshot, in insertion order.
    Contacts(Vec<Contact>),
    /// The first matching contact.
    Found(Contact),
    /// No contact matched. A normal result, not a fault.
    NotFound { name: String },
}
