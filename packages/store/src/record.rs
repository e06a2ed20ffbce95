//! The contact record.

use serde::{Deserialize, Serialize};

/// A single contact card.
///
/// Contacts are immutable once created: updating a card means inserting a
/// new one. Name uniqueness is not enforced; lookups return the first match
/// in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl Contact {
    /// Create a new contact card.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Case-insensitive name match, the comparison used by lookups.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_match_is_case_insensitive() {
        let contact = Contact::new("Ada", "111");
        assert!(contact.name_matches("ada"));
        assert!(contact.name_matches("ADA"));
        assert!(contact.name_matches("Ada"));
        assert!(!contact.name_matches("Adam"));
    }

    #[test]
    fn serializes_as_name_phone_pair() {
        let contact = Contact::new("Bob", "222");
        let json = serde_json::to_string(&contact).unwrap();
        assert_eq!(json, r#"{"name":"Bob","phone":"222"}"#);

        let back: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(back, contact);
    }

    #[test]
    fn display_shows_name_and_phone() {
        let contact = Contact::new("Ada", "111");
        assert_eq!(format!("{}", contact), "Ada <111>");
    }
}
