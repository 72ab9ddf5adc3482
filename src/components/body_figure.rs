//! Body Figure Component
//!
//! One view's drawing surface: silhouette plus that view's markers, in
//! insertion order so later markers sit on top.

use leptos::prelude::*;
use leptos_tap::{bind_surface_taps, use_tap_listeners, Tap};
use pain_marker_core::{BodyView, ScreenRect, LOGICAL_HEIGHT, LOGICAL_WIDTH};

use crate::components::marker_dot::MarkerDot;
use crate::components::silhouette::Silhouette;
use crate::context::use_app_context;
use crate::store::{store_add_marker, use_app_store, AppStateStoreFields};

#[component]
pub fn BodyFigure(view: BodyView) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let surface = NodeRef::<leptos::svg::Svg>::new();

    use_tap_listeners(surface, move |element| {
        bind_surface_taps(element, move |tap: Tap| {
            let rect = ScreenRect::new(tap.rect.left, tap.rect.top, tap.rect.width, tap.rect.height);
            match rect.to_logical(tap.client_x, tap.client_y) {
                Some(point) => {
                    ctx.with_repo(|repo| store_add_marker(&store, repo, view, point));
                }
                None => {
                    let (dx, dy) = tap.offset();
                    log::debug!("[Body] Tap at ({:.0}, {:.0}) in letterbox margin ignored", dx, dy);
                }
            }
        })
    });

    let is_active = move || store.view().get() == view;
    let view_box = format!("0 0 {} {}", LOGICAL_WIDTH, LOGICAL_HEIGHT);

    view! {
        <div
            id=view.container_id()
            class=move || container_class(is_active())
            style:display=move || container_display(is_active())
        >
            <svg
                id=view.surface_id()
                node_ref=surface
                viewBox=view_box
                preserveAspectRatio="xMidYMid meet"
            >
                <Silhouette view=view />
                <For
                    each=move || store.markers().read().markers(view).to_vec()
                    key=|marker| marker.id.key()
                    children=move |marker| view! { <MarkerDot marker=marker view=view /> }
                />
            </svg>
        </div>
    }
}

fn container_class(active: bool) -> &'static str {
    if active {
        "body-view active"
    } else {
        "body-view"
    }
}

/// Only the active view is laid out
fn container_display(active: bool) -> &'static str {
    if active {
        ""
    } else {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_view_is_hidden() {
        assert_eq!(container_display(false), "none");
        assert_eq!(container_class(false), "body-view");
    }

    #[test]
    fn test_active_view_is_shown() {
        assert_eq!(container_display(true), "");
        assert_eq!(container_class(true), "body-view active");
    }
}
