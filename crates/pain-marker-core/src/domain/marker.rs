//! Marker Entity
//!
//! A single recorded pain point in logical coordinates.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::level::PainLevel;
use crate::geometry::LogicalPoint;

/// Marker identifier: a millisecond timestamp plus a random fraction.
///
/// Compared by bit pattern so it can key maps and `<For>` lists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerId(f64);

impl MarkerId {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Stable hashable key
    pub fn key(self) -> u64 {
        self.0.to_bits()
    }
}

impl PartialEq for MarkerId {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for MarkerId {}

impl std::hash::Hash for MarkerId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out strictly increasing ids for the lifetime of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IdGenerator {
    last: Option<f64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the next id from the current time (ms) and a random value in [0, 1).
    pub fn next(&mut self, now_ms: f64, random: f64) -> MarkerId {
        let fraction = random.clamp(0.0, 0.999_999);
        let mut candidate = now_ms.floor() + fraction;
        if let Some(last) = self.last {
            if candidate <= last {
                candidate = last.floor() + 1.0 + fraction;
            }
        }
        self.last = Some(candidate);
        MarkerId(candidate)
    }

    /// Make sure ids handed out later stay above everything already stored
    pub fn observe(&mut self, id: MarkerId) {
        if self.last.map_or(true, |last| id.0 > last) {
            self.last = Some(id.0);
        }
    }
}

/// A pain marker as stored and persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub level: PainLevel,
    pub color: String,
    #[serde(rename = "bgColor")]
    pub bg_color: String,
    pub id: MarkerId,
}

impl Marker {
    /// Create a marker with the level's color pair
    pub fn new(point: LogicalPoint, level: PainLevel, id: MarkerId) -> Self {
        Self {
            x: point.x,
            y: point.y,
            level,
            color: level.color().to_string(),
            bg_color: level.bg_color().to_string(),
            id,
        }
    }

    pub fn position(&self) -> LogicalPoint {
        LogicalPoint::new(self.x, self.y)
    }
}

impl Entity for Marker {
    type Id = MarkerId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
