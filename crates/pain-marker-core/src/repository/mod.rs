//! Repository Layer
//!
//! Key-value storage abstraction and marker persistence.

mod marker_repo;
mod memory;
mod traits;

#[cfg(test)]
mod tests;

pub use marker_repo::{MarkerRepository, RepositoryError, DEFAULT_STORAGE_KEY};
pub use memory::InMemoryStorage;
pub use traits::{KeyValueStorage, StorageError};
