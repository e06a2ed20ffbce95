//! cardfile dispatch: serialized operation dispatch over a bounded queue.
//!
//! Producers submit operations through the [`Dispatcher`]; a single
//! long-lived worker thread drains the bounded [`RequestQueue`] and applies
//! each operation against the shared [`ContactStore`] in acceptance order.
//!
//! Guarantees:
//! - operations are applied serially, in the order the queue accepted them
//! - a saturated queue rejects synchronously (`QueueFull`), never silently
//! - every accepted request is completed exactly once, even during shutdown
//!   (the worker drains the queue after being told to stop)
//!
//! [`ContactStore`]: cardfile_store::ContactStore

mod error;
mod facade;
mod op;
mod queue;
mod request;
mod worker;

pub use error::DispatchError;
pub use facade::{DispatchConfig, Dispatcher};
pub use op::{Operation, Reply};
pub use queue::{QueueFull, RequestQueue};
pub use request::{Request, Ticket};
pub use worker::Worker;
