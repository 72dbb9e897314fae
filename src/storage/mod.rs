//! Persisted language selection
//!
//! The active language survives across sessions as a single key-value
//! entry behind the [`SelectionStore`] port, the analog of the browser's
//! local storage scope. The file-backed implementation persists a small
//! JSON state file; the in-memory implementation backs tests.

pub mod file;
pub mod memory;

pub use file::FileSelectionStore;
pub use memory::InMemoryStore;

use thiserror::Error;

/// Errors from reading or writing the selection state
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O failure on the state file
    #[error("state file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// State file exists but does not parse
    #[error("state file corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Get/set string values by key, surviving process restarts for the
/// persistent implementations.
pub trait SelectionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
