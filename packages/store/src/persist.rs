//! Persistence adapters for the contact collection.
//!
//! The store calls `load` once at startup and `save` after every mutation.
//! The saved format is an ordered JSON array of `{name, phone}` records.

use std::fs;
use std::path::PathBuf;

use crate::error::PersistError;
use crate::record::Contact;

/// Adapter seam between the store and whatever holds the saved collection.
///
/// Implementations can use real files or in-memory state for testing.
pub trait Persistence: Send {
    /// Load the saved collection. An absent backing file is an empty
    /// collection, not an error.
    fn load(&mut self) -> Result<Vec<Contact>, PersistError>;

    /// Save the full collection, replacing whatever was saved before.
    fn save(&mut self, contacts: &[Contact]) -> Result<(), PersistError>;
}

/// Persistence backed by a JSON file on local disk.
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    /// Create a file-backed adapter. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Persistence for JsonFile {
    fn load(&mut self) -> Result<Vec<Contact>, PersistError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&self.path)?;
        serde_json::from_str(&text).map_err(PersistError::Decode)
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<(), PersistError> {
        let text = serde_json::to_string(contacts).map_err(PersistError::Encode)?;
        fs::write(&self.path, text)?;
        tracing::debug!(path = %self.path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }
}

/// In-memory persistence for tests and throwaway sessions.
///
/// Holds the "saved" collection in a Vec so round-trips can be asserted
/// without touching disk. Can be configured to fail, to exercise the
/// store's unavailability path.
#[derive(Default)]
pub struct Ephemeral {
    saved: Vec<Contact>,
    fail_saves: bool,
}

impl Ephemeral {
    /// Create an empty in-memory adapter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adapter pre-populated with saved contacts.
    pub fn with_saved(saved: Vec<Contact>) -> Self {
        Self {
            saved,
            fail_saves: false,
        }
    }

    /// Make every subsequent `save` fail with an I/O error.
    pub fn fail_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// The collection as last saved.
    pub fn saved(&self) -> &[Contact] {
        &self.saved
    }
}

impl Persistence for Ephemeral {
    fn load(&mut self) -> Result<Vec<Contact>, PersistError> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<(), PersistError> {
        if self.fail_saves {
            return Err(PersistError::Io(std::io::Error::other(
                "ephemeral adapter configured to fail",
            )));
        }
        self.saved = contacts.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_file_load_missing_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = JsonFile::new(dir.path().join("contacts.json"));
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn json_file_round_trip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = JsonFile::new(dir.path().join("contacts.json"));

        let contacts = vec![
            Contact::new("Ada", "111"),
            Contact::new("Bob", "222"),
            Contact::new("ada", "333"),
        ];
        file.save(&contacts).unwrap();

        let loaded = file.load().unwrap();
        assert_eq!(loaded, contacts);
    }

    #[test]
    fn json_file_save_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = JsonFile::new(dir.path().join("contacts.json"));

        file.save(&[Contact::new("Ada", "111")]).unwrap();
        file.save(&[Contact::new("Bob", "222")]).unwrap();

        let loaded = file.load().unwrap();
        assert_eq!(loaded, vec![Contact::new("Bob", "222")]);
    }

    #[test]
    fn json_file_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        fs::write(&path, "not json at all").unwrap();

        let mut file = JsonFile::new(&path);
        assert!(matches!(file.load(), Err(PersistError::Decode(_))));
    }

    #[test]
    fn ephemeral_round_trip() {
        let mut mem = Ephemeral::new();
        mem.save(&[Contact::new("Ada", "111")]).unwrap();
        assert_eq!(mem.load().unwrap(), vec![Contact::new("Ada", "111")]);
    }

    #[test]
    fn ephemeral_fail_saves() {
        let mut mem = Ephemeral::new().fail_saves();
        let err = mem.save(&[Contact::new("Ada", "111")]).unwrap_err();
        assert!(matches!(err, PersistError::Io(_)));
    }
}
