//! JSON file selection store
//!
//! State is a single small JSON document; writes go to a temp file first
//! and are renamed into place so a crash mid-write cannot leave a torn
//! file behind.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::{SelectionStore, StorageError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreState {
    entries: BTreeMap<String, String>,

    /// Last write time
    updated_at: Option<DateTime<Utc>>,
}

/// File-backed [`SelectionStore`].
pub struct FileSelectionStore {
    path: PathBuf,
}

impl FileSelectionStore {
    /// Open a store at `path`; the file is created lazily on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<StoreState, StorageError> {
        if !self.path.exists() {
            return Ok(StoreState::default());
        }
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let state = serde_json::from_reader(reader)?;
        Ok(state)
    }

    fn save(&self, state: &StoreState) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.path.with_extension("json.tmp");
        let file = File::create(&temp_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, state)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(path = %self.path.display(), "selection state saved");
        Ok(())
    }
}

impl SelectionStore for FileSelectionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let state = self.load()?;
        Ok(state.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut state = self.load().unwrap_or_default();
        state.entries.insert(key.to_string(), value.to_string());
        state.updated_at = Some(Utc::now());
        self.save(&state)
    }
}
