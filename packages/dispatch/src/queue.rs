//! The bounded request queue.
//!
//! A fixed-capacity FIFO with an explicit overflow policy: producers that
//! cannot get a slot within their timeout get the request handed back in
//! [`QueueFull`] instead of a silent drop. Consumers poll with a timeout so
//! the worker can interleave queue waits with its shutdown-flag checks.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use thiserror::Error;

use crate::request::Request;

/// Rejection returned when the queue stayed full for the whole timeout.
///
/// Carries the undelivered request so ownership reverts to the producer,
/// which can retry or abandon it.
#[derive(Error)]
#[error("queue full, request not accepted")]
pub struct QueueFull(pub Request);

impl std::fmt::Debug for QueueFull {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("QueueFull")
            .field(&self.0.operation().kind())
            .finish()
    }
}

/// Fixed-capacity FIFO of pending requests.
pub struct RequestQueue {
    capacity: usize,
    slots: Mutex<VecDeque<Request>>,
    not_empty: Condvar,
    not_full: Condvar,
}

impl RequestQueue {
    /// Create a queue with the given fixed capacity.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "queue capacity must be at least 1");
        Self {
            capacity,
            slots: Mutex::new(VecDeque::with_capacity(capacity)),
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
        }
    }

    /// The capacity fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }

    /// Append a request, waiting up to `timeout` for a free slot.
    ///
    /// Returns `Err(QueueFull)` with the request if no slot freed up in
    /// time. An accepted request will be delivered to the consumer in FIFO
    /// order.
    pub fn enqueue(&self, request: Request, timeout: Duration) -> Result<(), QueueFull> {
        let deadline = Instant::now() + timeout;
        let mut slots = self.slots.lock();

        while slots.len() == self.capacity {
            let remaining = match deadline.checked_duration_since(Instant::now()) {
                Some(remaining) if !remaining.is_zero() => remaining,
                _ => return Err(QueueFull(request)),
            };
            // Re-arm against the original deadline across spurious wakeups.
            if self.not_full.wait_for(&mut slots, remaining).timed_out()
                && slots.len() == self.capacity
            {
                return Err(QueueFull(request));
            }
        }

        slots.push_back(request);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Remove the oldest request, waiting up to `timeout` for one to arrive.
    ///
    /// `None` is the idle poll, not an error: it lets the single consumer
    /// check its running flag without blocking forever.
    pub fn dequeue(&self, timeout: Duration) -> Option<Request> {
        let deadline = Instant::now() + timeout;
        let mut slots = self.slots.lock();

        while slots.is_empty() {
            let remaining = deadline.checked_duration_since(Instant::now())?;
            if remaining.is_zero() {
                return None;
            }
            if self.not_empty.wait_for(&mut slots, remaining).timed_out() && slots.is_empty() {
                return None;
            }
        }

        let request = slots.pop_front();
        self.not_full.notify_one();
        request
    }
}
