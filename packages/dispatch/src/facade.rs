//! The submission facade.
//!
//! [`Dispatcher`] is the boundary API producers see: submit an operation,
//! get a [`Ticket`], await the reply. Shutdown clears the worker's running
//! flag and joins it; the worker drains every accepted request first.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use cardfile_store::ContactStore;

use crate::error::DispatchError;
use crate::op::Operation;
use crate::queue::RequestQueue;
use crate::request::{Request, Ticket};
use crate::worker::Worker;

/// Tuning for a dispatcher instance.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Fixed queue capacity.
    pub capacity: usize,
    /// How long `submit` waits for a free slot before reporting `QueueFull`.
    pub enqueue_timeout: Duration,
    /// How long the worker's idle dequeue waits before re-checking the
    /// running flag.
    pub poll_interval: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            capacity: 5,
            enqueue_timeout: Duration::from_millis(250),
            poll_interval: Duration::from_millis(50),
        }
    }
}

/// Facade over one bounded queue and its single worker.
pub struct Dispatcher {
    queue: Arc<RequestQueue>,
    running: Arc<AtomicBool>,
    enqueue_timeout: Duration,
    worker: Option<JoinHandle<()>>,
}

impl Dispatcher {
    /// Start a dispatcher over the given shared store.
    pub fn start(store: Arc<ContactStore>, config: DispatchConfig) -> std::io::Result<Self> {
        let queue = Arc::new(RequestQueue::new(config.capacity));
        let running = Arc::new(AtomicBool::new(true));

        let worker = Worker::spawn(
            Arc::clone(&queue),
            store,
            Arc::clone(&running),
            config.poll_interval,
        )?;

        tracing::info!(capacity = config.capacity, "dispatcher started");
        Ok(Self {
            queue,
            running,
            enqueue_timeout: config.enqueue_timeout,
            worker: Some(worker),
        })
    }

    /// Submit an operation for serialized execution.
    ///
    /// Returns a [`Ticket`] once the queue accepts the request, or
    /// [`DispatchError::QueueFull`] if it stayed saturated for the whole
    /// enqueue timeout. Accepted operations are applied in acceptance order.
    pub fn submit(&self, op: Operation) -> Result<Ticket, DispatchError> {
        let (request, ticket) = Request::new(op);
        match self.queue.enqueue(request, self.enqueue_timeout) {
            Ok(()) => Ok(ticket),
            Err(rejected) => {
                tracing::debug!(op = rejected.0.operation().kind(), "queue full");
                Err(DispatchError::QueueFull)
            }
        }
    }

    /// Occupied queue slots, for observability.
    pub fn backlog(&self) -> usize {
        self.queue.len()
    }

    /// Stop accepting work and join the worker after it drains the queue.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::error!("dispatch worker panicked");
            }
        }
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::Reply;
    use cardfile_store::Ephemeral;

    fn shared_store() -> Arc<ContactStore> {
        Arc::new(ContactStore::open(Box::new(Ephemeral::new())).unwrap())
    }

    #[test]
    fn submit_and_wait_round_trip() {
        let store = shared_store();
        let dispatcher = Dispatcher::start(Arc::clone(&store), DispatchConfig::default()).unwrap();

        let ticket = dispatcher
            .submit(Operation::Insert {
                name: "Ada".into(),
                phone: "111".into(),
            })
            .unwrap();
        assert_eq!(ticket.wait().unwrap(), Reply::Inserted);

        let ticket = dispatcher.submit(Operation::List).unwrap();
        match ticket.wait().unwrap() {
            Reply::Contacts(contacts) => assert_eq!(contacts.len(), 1),
            other => panic!("unexpected reply: {other:?}"),
        }

        dispatcher.shutdown();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn find_miss_is_not_found() {
        let dispatcher = Dispatcher::start(shared_store(), DispatchConfig::default()).unwrap();

        let ticket = dispatcher
            .submit(Operation::Find {
                name: "nobody".into(),
            })
            .unwrap();
        assert_eq!(
            ticket.wait().unwrap(),
            Reply::NotFound {
                name: "nobody".into()
            }
        );
    }

    #[test]
    fn drop_without_shutdown_still_drains() {
        let store = shared_store();
        {
            let dispatcher =
                Dispatcher::start(Arc::clone(&store), DispatchConfig::default()).unwrap();
            let _ticket = dispatcher
                .submit(Operation::Insert {
                    name: "Bob".into(),
                    phone: "222".into(),
                })
                .unwrap();
            // Dispatcher dropped here without an explicit shutdown.
        }
        assert_eq!(store.len(), 1);
    }
}
