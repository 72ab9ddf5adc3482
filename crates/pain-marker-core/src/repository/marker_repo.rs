//! Marker Repository
//!
//! Persists the whole [`MarkerStore`] as one JSON entry:
//! `{"front": [...], "back": [...]}`. There is no schema version.

use thiserror::Error;

use super::traits::{KeyValueStorage, StorageError};
use crate::domain::MarkerStore;

/// Default storage key
pub const DEFAULT_STORAGE_KEY: &str = "painMarkers";

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("stored markers are malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Reads and writes the marker store under a single key
#[derive(Debug, Clone)]
pub struct MarkerRepository<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> MarkerRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Serialize both views and write them
    pub fn save(&self, store: &MarkerStore) -> Result<(), RepositoryError> {
        let json = serde_json::to_string(store)?;
        self.storage.set_item(&self.key, &json)?;
        Ok(())
    }

    /// Read the stored markers; `Ok(None)` when nothing has been saved yet
    pub fn load(&self) -> Result<Option<MarkerStore>, RepositoryError> {
        let Some(json) = self.storage.get_item(&self.key)? else {
            return Ok(None);
        };
        let mut store: MarkerStore = serde_json::from_str(&json)?;
        let dropped = store.dedupe();
        if dropped > 0 {
            log::warn!("[Repo] Dropped {} markers with repeated ids", dropped);
        }
        Ok(Some(store))
    }

    /// Save, logging instead of failing. Never retried.
    pub fn persist(&self, store: &MarkerStore) {
        match self.save(store) {
            Ok(()) => log::debug!("[Repo] Saved markers under `{}`", self.key),
            Err(e) => log::warn!("[Repo] Could not save markers: {}", e),
        }
    }

    /// Load at startup. Missing, unreadable or malformed data gives an empty store.
    pub fn load_or_default(&self) -> MarkerStore {
        match self.load() {
            Ok(Some(store)) => {
                log::info!("[Repo] Loaded markers from `{}`", self.key);
                store
            }
            Ok(None) => {
                log::debug!("[Repo] No saved markers under `{}`", self.key);
                MarkerStore::default()
            }
            Err(e) => {
                log::warn!("[Repo] Could not load markers: {}", e);
                MarkerStore::default()
            }
        }
    }
}
