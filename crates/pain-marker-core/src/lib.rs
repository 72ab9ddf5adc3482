//! Pain Marker Core
//!
//! Layered architecture:
//! - domain: markers, pain levels, body views and the marker store
//! - geometry: letterbox coordinate mapping and the body acceptance region
//! - repository: key-value storage abstraction and marker persistence
//! - export: PNG composition plan and artifact naming
//! - config: application configuration
//!
//! Nothing in this crate touches the browser. The UI crate supplies the
//! clock, the random source, the screen rectangles and the storage backend.

pub mod config;
pub mod domain;
pub mod export;
pub mod geometry;
pub mod repository;

pub use config::{AppConfig, ConfigError, ExportStyle, Labels, LogLevel};
pub use domain::{
    BodyView, DomainError, DomainResult, Entity, IdGenerator, Marker, MarkerId, MarkerStore,
    PainLevel,
};
pub use export::{ExportCircle, ExportPlan};
pub use geometry::{LogicalPoint, ScreenRect, BODY_REGION, LOGICAL_HEIGHT, LOGICAL_WIDTH};
pub use repository::{
    InMemoryStorage, KeyValueStorage, MarkerRepository, RepositoryError, StorageError,
};
