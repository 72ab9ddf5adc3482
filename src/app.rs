//! Pain Marker App
//!
//! Root component: level selector, view toggle, the two body figures and
//! the action bar.

use leptos::prelude::*;
use pain_marker_core::{AppConfig, BodyView, MarkerRepository};
use reactive_stores::Store;

use crate::components::{ActionBar, BodyFigure, LevelSelector, NoticeToast, ViewToggle};
use crate::context::AppContext;
use crate::storage::LocalStorage;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Rehydrate once; anything unreadable starts empty
    let repo = MarkerRepository::new(LocalStorage, config.storage_key.clone());
    let markers = repo.load_or_default();
    log::info!(
        "[APP] Starting with {} front / {} back markers",
        markers.len(BodyView::Front),
        markers.len(BodyView::Back)
    );

    let labels = config.labels.clone();
    provide_context(Store::new(AppState::with_markers(markers)));
    provide_context(AppContext::new(config, repo));

    view! {
        <div class="pain-marker-app">
            <h1>{labels.title}</h1>
            <LevelSelector />
            <ViewToggle />
            <div class="body-container">
                <BodyFigure view=BodyView::Front />
                <BodyFigure view=BodyView::Back />
            </div>
            <p class="hint">{labels.hint}</p>
            <ActionBar />
            <NoticeToast />
        </div>
    }
}
