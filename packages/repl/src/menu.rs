//! The interactive menu loop.
//!
//! Presents the numbered menu, collects input through a [`MenuHost`], and
//! forwards each action to the active [`Backend`]. End of input is a quit
//! request, so a piped script always shuts the backend down cleanly.

use cardfile_store::Contact;

use crate::backend::Backend;
use crate::host::{HostError, MenuHost};

const MENU: &str = "\n=== Contact Book ===\n1. Add a contact\n2. List contacts\n3. Find a contact\n4. Quit";

/// Menu core bound to one backend for its lifetime.
pub struct Menu {
    backend: Backend,
}

impl Menu {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Run the loop until the user quits or input ends, then close the
    /// backend. Only host I/O failures abort the loop early.
    pub fn run(mut self, host: &mut impl MenuHost) -> Result<(), HostError> {
        loop {
            host.write_line(MENU)?;
            let Some(choice) = host.read_line("Choose an option")? else {
                break;
            };

            match choice.trim() {
                "1" => self.add(host)?,
                "2" => self.list(host)?,
                "3" => self.find(host)?,
                "4" => break,
                "" => {}
                other => host.write_error(&format!("unknown option '{other}'"))?,
            }
        }

        host.write_line("Goodbye!")?;
        if let Err(e) = self.backend.close() {
            host.write_error(&format!("shutdown: {e}"))?;
        }
        Ok(())
    }

    fn add(&mut self, host: &mut impl MenuHost) -> Result<(), HostError> {
        let Some(name) = host.read_line("Name")? else {
            return Ok(());
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            return host.write_error("a contact needs a name");
        }

        let Some(phone) = host.read_line("Phone")? else {
            return Ok(());
        };
        let phone = phone.trim().to_string();

        match self.backend.insert(&name, &phone) {
            Ok(()) => host.write_line(&format!("Contact '{name}' added.")),
            Err(e) => host.write_error(&e.to_string()),
        }
    }

    fn list(&mut self, host: &mut impl MenuHost) -> Result<(), HostError> {
        let contacts = match self.backend.list() {
            Ok(contacts) => contacts,
            Err(e) => return host.write_error(&e.to_string()),
        };

        if contacts.is_empty() {
            return host.write_line("No contacts yet.");
        }

        host.write_line(&format!("{:<20} {:<15}", "Name", "Phone"))?;
        host.write_line(&"-".repeat(35))?;
        for contact in &contacts {
            host.write_line(&render_row(contact))?;
        }
        Ok(())
    }

    fn find(&mut self, host: &mut impl MenuHost) -> Result<(), HostError> {
        let Some(name) = host.read_line("Name")? else {
            return Ok(());
        };
        let name = name.trim();

        match self.backend.find(name) {
            Ok(Some(contact)) => host.write_line(&format!("Found: {contact}")),
            Ok(None) => host.write_line(&format!("No contact found with name '{name}'.")),
            Err(e) => host.write_error(&e.to_string()),
        }
    }
}

fn render_row(contact: &Contact) -> String {
    format!("{:<20} {:<15}", contact.name, contact.phone)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cardfile_dispatch::DispatchConfig;
    use cardfile_store::{ContactStore, Ephemeral};

    use super::*;
    use crate::host::test_host::TestHost;

    fn menu_over_queue() -> Menu {
        let store = Arc::new(ContactStore::open(Box::new(Ephemeral::new())).unwrap());
        Menu::new(Backend::queue(store, DispatchConfig::default()).unwrap())
    }

    fn menu_over_wire() -> Menu {
        Menu::new(Backend::wire(Box::new(Ephemeral::new())).unwrap())
    }

    #[test]
    fn add_then_list_shows_the_contact() {
        let mut host = TestHost::with_inputs(vec!["1", "Ada", "111", "2", "4"]);
        menu_over_queue().run(&mut host).unwrap();

        assert!(host.output_contains("Contact 'Ada' added."));
        assert!(host.output_contains("Ada"));
        assert!(host.output_contains("111"));
        assert!(host.output_contains("Goodbye!"));
    }

    #[test]
    fn list_with_no_contacts() {
        let mut host = TestHost::with_inputs(vec!["2", "4"]);
        menu_over_queue().run(&mut host).unwrap();

        assert!(host.output_contains("No contacts yet."));
    }

    #[test]
    fn find_is_case_insensitive() {
        let mut host = TestHost::with_inputs(vec!["1", "Ada", "111", "3", "ADA", "4"]);
        menu_over_queue().run(&mut host).unwrap();

        assert!(host.output_contains("Found: Ada <111>"));
    }

    #[test]
    fn find_miss_reports_the_name() {
        let mut host = TestHost::with_inputs(vec!["3", "nobody", "4"]);
        menu_over_queue().run(&mut host).unwrap();

        assert!(host.output_contains("No contact found with name 'nobody'."));
    }

    #[test]
    fn unknown_option_is_reported() {
        let mut host = TestHost::with_inputs(vec!["9", "4"]);
        menu_over_queue().run(&mut host).unwrap();

        assert_eq!(host.errors, vec!["unknown option '9'"]);
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut host = TestHost::with_inputs(vec!["1", "   ", "4"]);
        menu_over_queue().run(&mut host).unwrap();

        assert!(host.errors.iter().any(|e| e.contains("needs a name")));
    }

    #[test]
    fn end_of_input_quits_cleanly() {
        let mut host = TestHost::with_inputs(vec!["1", "Ada", "111"]);
        menu_over_queue().run(&mut host).unwrap();

        assert!(host.output_contains("Goodbye!"));
    }

    #[test]
    fn wire_backend_drives_the_same_menu() {
        let mut host = TestHost::with_inputs(vec!["1", "Bob", "222", "3", "bob", "4"]);
        menu_over_wire().run(&mut host).unwrap();

        assert!(host.output_contains("Contact 'Bob' added."));
        assert!(host.output_contains("Found: Bob <222>"));
    }
}
