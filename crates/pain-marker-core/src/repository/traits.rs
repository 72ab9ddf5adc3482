//! Repository Layer - Storage Trait
//!
//! Durable string key-value storage. The browser implementation wraps
//! `localStorage`; tests use [`InMemoryStorage`](super::InMemoryStorage).

use thiserror::Error;

/// Errors raised by a storage backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    /// Backend missing (no window, storage disabled, private mode)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    /// Quota exceeded and similar
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Synchronous string key-value storage
pub trait KeyValueStorage {
    /// Read a value; `Ok(None)` when the key is absent
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}
