//! Local translation store.
//!
//! Persists a single JSON-serialized [`TranslationTable`] in one
//! well-known slot: `translations.json` under the configured data
//! directory. The slot is always replaced wholesale; snapshots are never
//! merged. Usage is single-writer per process, so no locking is needed.

use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use crate::types::TranslationTable;

/// File name of the persistent slot inside the data directory.
const STORE_FILE_NAME: &str = "translations.json";

/// Errors raised when writing the persistent slot.
///
/// Reads never error: see [`TranslationStore::load`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// The slot (or its parent directory) could not be written.
    #[error("Failed to write translation store: {0}")]
    Io(#[from] std::io::Error),

    /// The table could not be serialized to JSON.
    #[error("Failed to serialize translation table: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Reads and writes the persisted translation table.
#[derive(Debug, Clone)]
pub struct TranslationStore {
    /// Full path of the persistent slot.
    path: PathBuf,
}

impl TranslationStore {
    /// Create a store rooted at `data_dir`. Nothing is touched on disk
    /// until the first [`save`](Self::save).
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self { path: data_dir.as_ref().join(STORE_FILE_NAME) }
    }

    /// Path of the persistent slot.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted table.
    ///
    /// An absent slot, an unreadable file, and invalid JSON all yield an
    /// empty table. An empty store is the expected initial state, so none
    /// of these conditions is surfaced to the caller.
    #[must_use]
    pub fn load(&self) -> TranslationTable {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) => {
                tracing::debug!(path = %self.path.display(), %error, "Translation store not readable, starting empty");
                return TranslationTable::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(table) => table,
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "Translation store holds invalid JSON, starting empty");
                TranslationTable::new()
            }
        }
    }

    /// Serialize `table` and overwrite the slot.
    ///
    /// Subsequent [`load`](Self::load) calls, including after a process
    /// restart, observe exactly this value (last write wins).
    pub fn save(&self, table: &TranslationTable) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string(table)?;
        std::fs::write(&self.path, json)?;

        tracing::debug!(path = %self.path.display(), entries = table.len(), "Translation store updated");
        Ok(())
    }
}
