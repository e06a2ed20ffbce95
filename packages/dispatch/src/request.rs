//! The request / completion-ticket pair.
//!
//! A producer builds a [`Request`] and keeps the matching [`Ticket`]. The
//! request travels through the queue to the worker; the worker completes it
//! exactly once, which wakes the ticket holder. The completion sender is
//! consumed by [`Request::complete`], so a second completion does not
//! compile; a request dropped without completion surfaces to the producer
//! as [`DispatchError::WorkerGone`].

use crossbeam_channel::{bounded, Receiver, Sender};

use crate::error::DispatchError;
use crate::op::{Operation, Reply};

type Completion = Result<Reply, DispatchError>;

/// An operation in flight, owned by the queue and then by the worker.
pub struct Request {
    op: Operation,
    done: Sender<Completion>,
}

impl Request {
    /// Build a request and the ticket its producer waits on.
    pub fn new(op: Operation) -> (Self, Ticket) {
        let (done, wake) = bounded(1);
        (Self { op, done }, Ticket { wake })
    }

    /// The operation to apply.
    pub fn operation(&self) -> &Operation {
        &self.op
    }

    /// Complete the request, consuming it.
    ///
    /// A send failure means the producer dropped its ticket and stopped
    /// caring about the result; that is not the worker's problem.
    pub fn complete(self, result: Completion) {
        let _ = self.done.send(result);
    }

    /// Split into the operation and a completion-only remainder.
    pub(crate) fn into_parts(self) -> (Operation, Sender<Completion>) {
        (self.op, self.done)
    }
}

/// The producer's handle for awaiting a request's result.
pub struct Ticket {
    wake: Receiver<Completion>,
}

impl Ticket {
    /// Block until the worker completes the request.
    pub fn wait(self) -> Result<Reply, DispatchError> {
        match self.wake.recv() {
            Ok(result) => result,
            // Sender dropped without completing: the worker is gone.
            Err(_) => Err(DispatchError::WorkerGone),
        }
    }
}
