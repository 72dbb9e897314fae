//! In-memory selection store for tests and single-run sessions

use std::collections::HashMap;
use std::sync::Mutex;

use crate::storage::{SelectionStore, StorageError};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed an entry, e.g. a previously persisted selection.
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl SelectionStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .entries
            .lock()
            .expect("store mutex poisoned")
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let store = InMemoryStore::new();
        assert!(store.get("selectedLanguage").unwrap().is_none());

        store.set("selectedLanguage", "fr").unwrap();
        assert_eq!(store.get("selectedLanguage").unwrap().as_deref(), Some("fr"));
    }

    #[test]
    fn test_with_entry() {
        let store = InMemoryStore::new().with_entry("selectedLanguage", "en");
        assert_eq!(store.get("selectedLanguage").unwrap().as_deref(), Some("en"));
    }
}
