//! Level Selector Component
//!
//! Four single-select buttons choosing the level of new markers.

use leptos::prelude::*;
use pain_marker_core::PainLevel;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Pain level buttons
#[component]
pub fn LevelSelector() -> impl IntoView {
    let store = use_app_store();
    let labels = use_app_context().labels();

    view! {
        <div class="level-selector">
            <span class="level-heading">{labels.level_heading.clone()}</span>
            {PainLevel::ALL.into_iter().map(|level| {
                let is_selected = move || store.level().get() == level;
                view! {
                    <button
                        class=move || if is_selected() { "level-btn active" } else { "level-btn" }
                        data-level=level.value().to_string()
                        style=format!("background-color: {}; border-color: {};", level.bg_color(), level.color())
                        on:click=move |_| *store.level().write() = level
                    >
                        <span class="level-number">{level.value().to_string()}</span>
                        <span class="level-label">{labels.level_label(level).to_string()}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
