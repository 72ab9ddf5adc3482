//! Action Bar Component
//!
//! Clear, save and share for the active view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::clear_confirm_button::ClearConfirmButton;
use crate::context::use_app_context;
use crate::export::{self, ShareOutcome};
use crate::store::{store_clear_view, store_show_notice, store_snapshot, use_app_store, AppStateStoreFields};

#[component]
pub fn ActionBar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let labels = ctx.labels();

    let clear = move |_: ()| {
        let view = store.view().get_untracked();
        ctx.with_repo(|repo| store_clear_view(&store, repo, view));
    };

    let save = move |_| {
        let view = store.view().get_untracked();
        let markers = store_snapshot(&store, view);
        let config = ctx.config();
        spawn_local(async move {
            if let Err(e) = export::save_view(view, markers, config).await {
                log::error!("[Export] Save failed: {}", e);
            }
        });
    };

    let share = move |_| {
        let view = store.view().get_untracked();
        let markers = store_snapshot(&store, view);
        let config = ctx.config();
        let notice = config.labels.share_fallback_notice.clone();
        let notice_ms = config.notice_ms;
        spawn_local(async move {
            match export::share_view(view, markers, config).await {
                Ok(ShareOutcome::Shared) => {}
                Ok(ShareOutcome::Downloaded) => store_show_notice(&store, notice, notice_ms),
                Err(e) => log::error!("[Export] Share failed: {}", e),
            }
        });
    };

    view! {
        <div class="action-bar">
            <ClearConfirmButton
                label=labels.clear.clone()
                prompt=labels.clear_prompt.clone()
                on_confirm=clear
            />
            <button class="action-btn save-btn" id="save-btn" on:click=save>
                {labels.save.clone()}
            </button>
            <button class="action-btn share-btn" id="share-btn" on:click=share>
                {labels.share.clone()}
            </button>
        </div>
    }
}
