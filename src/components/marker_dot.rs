//! Marker Dot Component
//!
//! One marker circle. Tapping it removes the marker without adding a new
//! one underneath.

use leptos::prelude::*;
use leptos_tap::{bind_mark_taps, use_tap_listeners};
use pain_marker_core::{BodyView, Marker};

use crate::context::use_app_context;
use crate::store::{store_remove_marker, use_app_store};

/// Radius of an on-screen marker in viewBox units
const MARKER_RADIUS: &str = "8";

#[component]
pub fn MarkerDot(marker: Marker, view: BodyView) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let dot = NodeRef::<leptos::svg::Circle>::new();
    let id = marker.id;

    use_tap_listeners(dot, move |element| {
        bind_mark_taps(element, move || {
            ctx.with_repo(|repo| store_remove_marker(&store, repo, view, id));
        })
    });

    view! {
        <circle
            node_ref=dot
            class="pain-marker-svg"
            cx=marker.x.to_string()
            cy=marker.y.to_string()
            r=MARKER_RADIUS
            fill=marker.color
            stroke="white"
            stroke-width="2"
            opacity="0.8"
            style="cursor: pointer;"
        />
    }
}
