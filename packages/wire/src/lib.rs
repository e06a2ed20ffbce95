//! cardfile wire: the message-passing topology.
//!
//! The alternative to the shared-memory dispatcher: the worker lives in an
//! isolated execution context that exclusively owns its [`ContactStore`],
//! and is reachable only through a duplex [`Endpoint`] carrying serialized
//! frames. No memory is shared, so no gate contention is possible on the
//! requester side; correctness rests on strict request/reply alternation,
//! which [`WireClient`] enforces by construction.
//!
//! [`ContactStore`]: cardfile_store::ContactStore

mod client;
mod error;
mod protocol;
mod session;
mod transport;

pub use client::WireClient;
pub use error::WireError;
pub use protocol::{WireRequest, WireResponse};
pub use session::{serve, spawn};
pub use transport::Endpoint;
