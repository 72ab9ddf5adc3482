//! Body View
//!
//! The two body orientations, each with its own marker sequence.

use serde::{Deserialize, Serialize};

/// Front or back of the body silhouette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyView {
    #[default]
    Front,
    Back,
}

impl BodyView {
    pub const ALL: [BodyView; 2] = [BodyView::Front, BodyView::Back];

    /// Key used in the persisted JSON object
    pub fn key(self) -> &'static str {
        match self {
            BodyView::Front => "front",
            BodyView::Back => "back",
        }
    }

    /// Id of the `<svg>` drawing surface
    pub fn surface_id(self) -> &'static str {
        match self {
            BodyView::Front => "front-body",
            BodyView::Back => "back-body",
        }
    }

    /// Id of the container toggled by the view switch
    pub fn container_id(self) -> &'static str {
        match self {
            BodyView::Front => "front-view",
            BodyView::Back => "back-view",
        }
    }
}
