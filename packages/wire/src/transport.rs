//! The duplex channel transport.
//!
//! An [`Endpoint`] pair models two isolated execution contexts connected by
//! one bidirectional pipe. Each endpoint's sends arrive at the other's
//! receives, in order. Frames are serialized JSON text: nothing that
//! crosses the pipe aliases live state on either side.

use crossbeam_channel::{bounded, Receiver, Sender};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::WireError;

/// One end of a duplex message pipe.
pub struct Endpoint {
    tx: Sender<String>,
    rx: Receiver<String>,
}

impl Endpoint {
    /// Create a connected endpoint pair with the given per-direction
    /// buffer capacity.
    pub fn pair(capacity: usize) -> (Endpoint, Endpoint) {
        let (tx1, rx1) = bounded(capacity);
        let (tx2, rx2) = bounded(capacity);

        (
            Endpoint { tx: tx1, rx: rx2 },
            Endpoint { tx: tx2, rx: rx1 },
        )
    }

    /// Serialize and send one message. Blocks while the pipe buffer is
    /// full; order of delivery matches order of sending.
    pub fn send<T: Serialize>(&self, message: &T) -> Result<(), WireError> {
        let frame = serde_json::to_string(message).map_err(WireError::Encode)?;
        self.tx.send(frame).map_err(|_| WireError::Closed)
    }

    /// Block until the next message arrives and deserialize it.
    ///
    /// A disconnected peer yields [`WireError::Closed`]; callers decide
    /// whether that is end-of-input or a fault.
    pub fn receive<T: DeserializeOwned>(&self) -> Result<T, WireError> {
        let frame = self.rx.recv().map_err(|_| WireError::Closed)?;
        serde_json::from_str(&frame).map_err(WireError::Decode)
    }
}
