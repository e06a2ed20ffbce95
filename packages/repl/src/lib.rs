//! # cardfile-repl
//!
//! The interactive front end for cardfile: a numbered menu over either
//! dispatch topology.
//!
//! ```text
//! Menu:
//!   1. Add a contact
//!   2. List contacts
//!   3. Find a contact
//!   4. Quit
//! ```
//!
//! The menu core is written against the [`MenuHost`] trait so the same
//! loop runs on a real terminal (reedline) or on a scripted host in tests.
//! The backend is chosen at startup: the bounded-queue dispatcher sharing
//! a store with the menu thread, or a wire worker reached only through a
//! duplex message channel.

pub mod backend;
pub mod host;
pub mod menu;

pub use backend::{Backend, BackendError};
pub use host::{HostError, MenuHost, TerminalHost};
pub use menu::Menu;
