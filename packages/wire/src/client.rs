//! The requester-side client.

use crate::error::WireError;
use crate::protocol::{WireRequest, WireResponse};
use crate::transport::Endpoint;

/// Blocking client for a wire worker.
///
/// Strict request/reply alternation is the protocol discipline that lets a
/// single duplex channel multiplex all request kinds without framing.
/// `call` takes `&mut self` and always performs send-then-receive, so a
/// second request cannot be issued while a reply is outstanding.
pub struct WireClient {
    endpoint: Endpoint,
}

impl WireClient {
    pub(crate) fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    /// Send one request and block for its reply.
    pub fn call(&mut self, request: WireRequest) -> Result<WireResponse, WireError> {
        self.endpoint.send(&request)?;
        self.endpoint.receive()
    }

    /// Ask the worker to stop and wait for its acknowledgment.
    ///
    /// Consumes the client: the channel is severed only after `Bye`
    /// arrives, so the worker is never cut off mid-response.
    pub fn quit(mut self) -> Result<(), WireError> {
        match self.call(WireRequest::Quit)? {
            WireResponse::Bye => Ok(()),
            other => Err(WireError::Protocol(format!(
                "expected quit acknowledgment, got {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session;
    use cardfile_store::Ephemeral;

    #[test]
    fn insert_then_list_sees_the_insert() {
        let (mut client, worker) = session::spawn(Box::new(Ephemeral::new())).unwrap();

        assert_eq!(
            client
                .call(WireRequest::Insert {
                    name: "Bob".into(),
                    phone: "222".into(),
                })
                .unwrap(),
            WireResponse::Inserted
        );

        // Strict alternation: the insert was answered before this was
        // sent, so the listing cannot be stale.
        match client.call(WireRequest::List).unwrap() {
            WireResponse::Contacts { contacts } => {
                assert_eq!(contacts.len(), 1);
                assert_eq!(contacts[0].name, "Bob");
            }
            other => panic!("unexpected response: {other:?}"),
        }

        client.quit().unwrap();
        worker.join().unwrap().unwrap();
    }

    #[test]
    fn quit_waits_for_acknowledgment() {
        let (client, worker) = session::spawn(Box::new(Ephemeral::new())).unwrap();

        client.quit().unwrap();
        // The worker had already sent Bye by the time quit() returned.
        worker.join().unwrap().unwrap();
    }

    #[test]
    fn call_after_worker_death_reports_closed() {
        let (mut client, worker) = session::spawn(Box::new(Ephemeral::new())).unwrap();

        client.call(WireRequest::Quit).unwrap();
        worker.join().unwrap().unwrap();

        assert!(matches!(
            client.call(WireRequest::List),
            Err(WireError::Closed)
        ));
    }

    #[test]
    fn find_miss_is_not_found() {
        let (mut client, worker) = session::spawn(Box::new(Ephemeral::new())).unwrap();

        assert_eq!(
            client
                .call(WireRequest::Find {
                    name: "nobody".into()
                })
                .unwrap(),
            WireResponse::NotFound {
                name: "nobody".into()
            }
        );

        client.quit().unwrap();
        worker.join().unwrap().unwrap();
    }
}
