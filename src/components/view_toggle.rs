//! View Toggle Component
//!
//! Front/back switch. Switching only changes which view is shown; both
//! marker lists stay in the store.

use leptos::prelude::*;
use pain_marker_core::BodyView;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Front/back toggle buttons
#[component]
pub fn ViewToggle() -> impl IntoView {
    let store = use_app_store();
    let labels = use_app_context().labels();

    view! {
        <div class="view-toggle">
            {BodyView::ALL.into_iter().map(|view| {
                let is_active = move || store.view().get() == view;
                view! {
                    <button
                        class=move || if is_active() { "toggle-btn active" } else { "toggle-btn" }
                        data-view=view.key()
                        on:click=move |_| {
                            if store.view().get_untracked() != view {
                                log::debug!("[View] Switched to {}", view.key());
                                *store.view().write() = view;
                            }
                        }
                    >
                        {labels.view_label(view).to_string()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
