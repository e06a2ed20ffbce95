//! The worker-side session loop.
//!
//! The wire worker exclusively owns its store: single-threaded ownership
//! inside one execution context, so no exclusion gate is contended here.
//! The loop answers one request per received frame, acknowledges `Quit`
//! before terminating, and treats a closed channel as end-of-input.

use std::thread::{self, JoinHandle};

use cardfile_store::{ContactStore, Persistence};

use crate::client::WireClient;
use crate::error::WireError;
use crate::protocol::{WireRequest, WireResponse};
use crate::transport::Endpoint;

/// Default per-direction frame buffer for spawned sessions.
const DEFAULT_PIPE_CAPACITY: usize = 8;

/// Run the worker session loop until `Quit` or channel close.
///
/// Store failures are answered with a `Failed` frame and the session
/// continues; only the transport ending stops the loop.
pub fn serve(endpoint: Endpoint, store: ContactStore) -> Result<(), WireError> {
    tracing::info!("wire session started");

    loop {
        let request = match endpoint.receive::<WireRequest>() {
            Ok(request) => request,
            // Peer gone: end of input, not a fault.
            Err(WireError::Closed) => {
                tracing::info!("peer closed the channel, session over");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        tracing::debug!(?request, "serving request");
        let response = match request {
            WireRequest::Insert { name, phone } => match store.insert(&name, &phone) {
                Ok(()) => WireResponse::Inserted,
                Err(e) => WireResponse::Failed {
                    message: e.to_string(),
                },
            },
            WireRequest::List => WireResponse::Contacts {
                contacts: store.list(),
            },
            WireRequest::Find { name } => match store.find(&name) {
                Some(contact) => WireResponse::Found { contact },
                None => WireResponse::NotFound { name },
            },
            WireRequest::Quit => {
                // Acknowledge before terminating so the requester is never
                // left waiting on a severed channel.
                endpoint.send(&WireResponse::Bye)?;
                tracing::info!("quit acknowledged, session over");
                return Ok(());
            }
        };

        match endpoint.send(&response) {
            Ok(()) => {}
            // The requester vanished mid-session; same end-of-session
            // treatment as a closed receive side.
            Err(WireError::Closed) => return Ok(()),
            Err(e) => return Err(e),
        }
    }
}

/// Start an isolated worker thread owning its own store.
///
/// Returns the client end of the pipe and the worker's join handle. The
/// store is created inside the worker context from the given persistence
/// adapter, so no store state ever crosses the channel.
pub fn spawn(
    persist: Box<dyn Persistence>,
) -> std::io::Result<(WireClient, JoinHandle<Result<(), WireError>>)> {
    let (near, far) = Endpoint::pair(DEFAULT_PIPE_CAPACITY);

    let worker = thread::Builder::new()
        .name("cardfile-wire".into())
        .spawn(move || {
            let store = match ContactStore::open(persist) {
                Ok(store) => store,
                Err(e) => {
                    tracing::error!(error = %e, "wire worker could not open its store");
                    // Dropping `far` here closes the channel; the client
                    // observes Closed on its next call.
                    return Err(WireError::Protocol(format!("store unavailable: {e}")));
                }
            };
            serve(far, store)
        })?;

    Ok((WireClient::new(near), worker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardfile_store::{Contact, Ephemeral};

    fn local_store() -> ContactStore {
        ContactStore::open(Box::new(Ephemeral::new())).unwrap()
    }

    #[test]
    fn serve_answers_until_quit() {
        let (client, worker_end) = Endpoint::pair(4);
        let session = thread::spawn(move || serve(worker_end, local_store()));

        client
            .send(&WireRequest::Insert {
                name: "Ada".into(),
                phone: "111".into(),
            })
            .unwrap();
        assert_eq!(
            client.receive::<WireResponse>().unwrap(),
            WireResponse::Inserted
        );

        client.send(&WireRequest::Quit).unwrap();
        assert_eq!(client.receive::<WireResponse>().unwrap(), WireResponse::Bye);

        session.join().unwrap().unwrap();
    }

    #[test]
    fn serve_treats_disconnect_as_end_of_input() {
        let (client, worker_end) = Endpoint::pair(4);
        let session = thread::spawn(move || serve(worker_end, local_store()));

        drop(client);
        // A severed channel ends the session cleanly, it is not an error.
        session.join().unwrap().unwrap();
    }

    #[test]
    fn store_failure_answers_failed_and_continues() {
        let (client, worker_end) = Endpoint::pair(4);
        let failing = ContactStore::open(Box::new(Ephemeral::new().fail_saves())).unwrap();
        let session = thread::spawn(move || serve(worker_end, failing));

        client
            .send(&WireRequest::Insert {
                name: "Ada".into(),
                phone: "111".into(),
            })
            .unwrap();
        assert!(matches!(
            client.receive::<WireResponse>().unwrap(),
            WireResponse::Failed { .. }
        ));

        // The session survived the failure.
        client.send(&WireRequest::List).unwrap();
        assert_eq!(
            client.receive::<WireResponse>().unwrap(),
            WireResponse::Contacts {
                contacts: Vec::new()
            }
        );

        client.send(&WireRequest::Quit).unwrap();
        assert_eq!(client.receive::<WireResponse>().unwrap(), WireResponse::Bye);
        session.join().unwrap().unwrap();
    }

    #[test]
    fn find_round_trip_through_the_pipe() {
        let (client, worker_end) = Endpoint::pair(4);
        let session = thread::spawn(move || serve(worker_end, local_store()));

        client
            .send(&WireRequest::Insert {
                name: "Bob".into(),
                phone: "222".into(),
            })
            .unwrap();
        client.receive::<WireResponse>().unwrap();

        client.send(&WireRequest::Find { name: "bob".into() }).unwrap();
        assert_eq!(
            client.receive::<WireResponse>().unwrap(),
            WireResponse::Found {
                contact: Contact::new("Bob", "222")
            }
        );

        client.send(&WireRequest::Quit).unwrap();
        client.receive::<WireResponse>().unwrap();
        session.join().unwrap().unwrap();
    }
}
