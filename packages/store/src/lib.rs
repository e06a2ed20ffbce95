//! cardfile store: the shared contact collection.
//!
//! This layer owns the data everything else dispatches against:
//! - `Contact`: an immutable name/phone record
//! - `Gate`: the mutual-exclusion primitive guarding the collection
//! - `ContactStore`: the shared, append-only collection itself
//! - `Persistence`: the adapter seam for loading/saving the collection
//!
//! Access discipline: every `ContactStore` operation runs inside a
//! gate-held critical section, so no caller ever observes a
//! partially-applied mutation from another thread.

mod error;
mod gate;
mod persist;
mod record;
mod store;

pub use error::{PersistError, StoreError};
pub use gate::{Gate, GatePass};
pub use persist::{Ephemeral, JsonFile, Persistence};
pub use record::Contact;
pub use store::ContactStore;
