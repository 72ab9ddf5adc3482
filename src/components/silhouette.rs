//! Body Silhouette
//!
//! Static outline drawn in the 200×400 viewBox under the markers.

use leptos::prelude::*;
use pain_marker_core::BodyView;

const OUTLINE: &str = "M88 66 L112 66 L114 80 C140 82 150 92 152 110 L166 200 \
    C168 212 160 214 156 204 L140 130 L138 210 L136 250 L132 392 L110 392 \
    L104 260 L100 240 L96 260 L90 392 L68 392 L64 250 L62 210 L60 130 L44 204 \
    C40 214 32 212 34 200 L48 110 C50 92 60 82 86 80 Z";

const SPINE: &str = "M100 86 L100 236";
const SHOULDER_BLADES: &str = "M76 112 Q86 128 92 112 M108 112 Q114 128 124 112";
const COLLAR: &str = "M78 92 Q100 100 122 92";

#[component]
pub fn Silhouette(view: BodyView) -> impl IntoView {
    view! {
        <g class="silhouette" fill="#f3e0d2" stroke="#c9a58c" stroke-width="2">
            <ellipse cx="100" cy="40" rx="22" ry="27" />
            <path d=OUTLINE />
            {match view {
                BodyView::Front => view! {
                    <g fill="none" stroke-width="1.5">
                        <path d=COLLAR />
                        <circle cx="100" cy="196" r="2" />
                    </g>
                }.into_any(),
                BodyView::Back => view! {
                    <g fill="none" stroke-width="1.5">
                        <path d=SPINE />
                        <path d=SHOULDER_BLADES />
                    </g>
                }.into_any(),
            }}
        </g>
    }
}
