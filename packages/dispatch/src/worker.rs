//! The dispatch worker.
//!
//! A single consumer loop: the only code allowed to call
//! [`RequestQueue::dequeue`]. It applies each request against the shared
//! store and completes it exactly once. Store failures are captured into
//! the completion slot and never abort the loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use cardfile_store::ContactStore;

use crate::op::{Operation, Reply};
use crate::queue::RequestQueue;
use crate::request::Request;

/// The single consumer of a [`RequestQueue`].
pub struct Worker;

impl Worker {
    /// Spawn the worker thread.
    ///
    /// The loop runs while `running` is set, then keeps draining until the
    /// queue reports empty, so no accepted request is ever discarded. `poll`
    /// is how long each idle `dequeue` waits before re-checking the flag.
    pub fn spawn(
        queue: Arc<RequestQueue>,
        store: Arc<ContactStore>,
        running: Arc<AtomicBool>,
        poll: Duration,
    ) -> std::io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name("cardfile-dispatch".into())
            .spawn(move || Self::run(&queue, &store, &running, poll))
    }

    fn run(queue: &RequestQueue, store: &ContactStore, running: &AtomicBool, poll: Duration) {
        tracing::info!("dispatch worker started");

        // Drain-on-shutdown: keep pulling after `running` clears until the
        // queue is empty.
        while running.load(Ordering::Acquire) || !queue.is_empty() {
            let Some(request) = queue.dequeue(poll) else {
                continue; // idle poll, re-check the flag
            };
            Self::serve(store, request);
        }

        tracing::info!("dispatch worker drained and stopped");
    }

    fn serve(store: &ContactStore, request: Request) {
        tracing::debug!(op = request.operation().kind(), "applying request");

        let (op, done) = request.into_parts();
        let result = match op {
            Operation::Insert { name, phone } => store
                .insert(&name, &phone)
                .map(|()| Reply::Inserted)
                .map_err(Into::into),
            Operation::List => Ok(Reply::Contacts(store.list())),
            Operation::Find { name } => Ok(match store.find(&name) {
                Some(contact) => Reply::Found(contact),
                None => Reply::NotFound { name },
            }),
        };

        if let Err(ref e) = result {
            tracing::warn!(error = %e, "request failed, completing with error");
        }
        // Producer may have dropped its ticket; completion is best-effort.
        let _ = done.send(result);
    }
}
