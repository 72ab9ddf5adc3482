//! Domain Layer
//!
//! Markers, pain levels, body views and the two-view marker store.
//! This layer has NO external dependencies (except serde and thiserror).

mod entity;
mod level;
mod marker;
mod marker_store;
mod view;

pub use entity::{DomainError, DomainResult, Entity};
pub use level::PainLevel;
pub use marker::{IdGenerator, Marker, MarkerId};
pub use marker_store::MarkerStore;
pub use view::BodyView;
