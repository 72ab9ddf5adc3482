//! Marker Store
//!
//! Ordered marker sequences for both body views. Insertion order is
//! drawing order.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};
use super::marker::{IdGenerator, Marker, MarkerId};
use super::view::BodyView;
use crate::geometry::BODY_REGION;

/// Markers for the front and back views.
///
/// Both views are always present; a missing key in stored JSON loads as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkerStore {
    #[serde(default)]
    front: Vec<Marker>,
    #[serde(default)]
    back: Vec<Marker>,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self, view: BodyView) -> &[Marker] {
        match view {
            BodyView::Front => &self.front,
            BodyView::Back => &self.back,
        }
    }

    fn markers_mut(&mut self, view: BodyView) -> &mut Vec<Marker> {
        match view {
            BodyView::Front => &mut self.front,
            BodyView::Back => &mut self.back,
        }
    }

    pub fn len(&self, view: BodyView) -> usize {
        self.markers(view).len()
    }

    pub fn contains(&self, view: BodyView, id: MarkerId) -> bool {
        self.markers(view).iter().any(|m| m.id() == id)
    }

    /// Append a marker to `view`.
    ///
    /// Rejects points outside the body acceptance region and ids already
    /// present in the view.
    pub fn add(&mut self, view: BodyView, marker: Marker) -> DomainResult<()> {
        let point = marker.position();
        if !BODY_REGION.contains(point) {
            return Err(DomainError::OutsideBody { x: point.x, y: point.y });
        }
        if self.contains(view, marker.id) {
            return Err(DomainError::Conflict(format!(
                "marker {} already exists in {} view",
                marker.id,
                view.key()
            )));
        }
        self.markers_mut(view).push(marker);
        Ok(())
    }

    /// Remove the first marker with `id`; returns it if found
    pub fn remove(&mut self, view: BodyView, id: MarkerId) -> Option<Marker> {
        let markers = self.markers_mut(view);
        let index = markers.iter().position(|m| m.id() == id)?;
        Some(markers.remove(index))
    }

    /// Empty one view, returning how many markers were dropped
    pub fn clear(&mut self, view: BodyView) -> usize {
        let markers = self.markers_mut(view);
        let count = markers.len();
        markers.clear();
        count
    }

    /// Drop repeated ids inside each view, keeping the first occurrence.
    /// Returns the number of markers removed.
    pub fn dedupe(&mut self) -> usize {
        let mut removed = 0;
        for view in BodyView::ALL {
            let markers = self.markers_mut(view);
            let mut seen = std::collections::HashSet::new();
            let before = markers.len();
            markers.retain(|m| seen.insert(m.id()));
            removed += before - markers.len();
        }
        removed
    }

    /// Advance `ids` past every stored identifier
    pub fn seed_ids(&self, ids: &mut IdGenerator) {
        for view in BodyView::ALL {
            for marker in self.markers(view) {
                ids.observe(marker.id);
            }
        }
    }
}
