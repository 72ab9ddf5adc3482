//! Domain Layer - Core Entity Trait
//!
//! The basic contract for domain entities: a unique, hashable identifier.

use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Point lies outside the body acceptance region
    #[error("Point ({x:.1}, {y:.1}) is outside the body region")]
    OutsideBody { x: f64, y: f64 },
    /// Identifier already present in the view
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
