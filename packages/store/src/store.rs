//! The shared contact store.

use parking_lot::Mutex;

use crate::error::StoreError;
use crate::gate::Gate;
use crate::persist::Persistence;
use crate::record::Contact;

/// The shared, append-only contact collection.
///
/// Every operation enters a critical section through the [`Gate`] before
/// touching the collection, so operations are serialized even when the store
/// is reachable from several threads at once. The inner mutex exists only to
/// satisfy aliasing rules; the gate is what provides mutual exclusion, and
/// the inner lock is never contended while the discipline holds.
///
/// `insert` persists the full collection synchronously, still inside the
/// critical section: a mutation is acknowledged only once it is durable.
pub struct ContactStore {
    gate: Gate,
    inner: Mutex<Inner>,
}

struct Inner {
    contacts: Vec<Contact>,
    persist: Box<dyn Persistence>,
}

impl ContactStore {
    /// Open the store, loading the saved collection through the adapter.
    pub fn open(mut persist: Box<dyn Persistence>) -> Result<Self, StoreError> {
        let contacts = persist.load()?;
        tracing::info!(count = contacts.len(), "contact store opened");
        Ok(Self {
            gate: Gate::binary(),
            inner: Mutex::new(Inner { contacts, persist }),
        })
    }

    /// Append a contact and persist the collection.
    ///
    /// On persistence failure the append is rolled back before the error
    /// propagates, so memory and the saved collection never disagree.
    pub fn insert(&self, name: &str, phone: &str) -> Result<(), StoreError> {
        let _pass = self.gate.acquire();
        let mut inner = self.inner.lock();

        inner.contacts.push(Contact::new(name, phone));
        let Inner { contacts, persist } = &mut *inner;
        if let Err(e) = persist.save(contacts) {
            contacts.pop();
            tracing::warn!(error = %e, "insert rolled back, save failed");
            return Err(e.into());
        }
        Ok(())
    }

    /// A snapshot of the collection, in insertion order.
    ///
    /// The returned Vec is detached from live storage and safe to read
    /// after the critical section ends.
    pub fn list(&self) -> Vec<Contact> {
        let _pass = self.gate.acquire();
        self.inner.lock().contacts.clone()
    }

    /// First contact whose name matches case-insensitively, if any.
    pub fn find(&self, name: &str) -> Option<Contact> {
        let _pass = self.gate.acquire();
        self.inner
            .lock()
            .contacts
            .iter()
            .find(|c| c.name_matches(name))
            .cloned()
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        let _pass = self.gate.acquire();
        self.inner.lock().contacts.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
