//! Notice Toast Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Shows the store's pending notice, if any
#[component]
pub fn NoticeToast() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.notice().get().is_some()>
            <div class="notice-toast" role="status">
                {move || store.notice().get().map(|notice| notice.message).unwrap_or_default()}
            </div>
        </Show>
    }
}
