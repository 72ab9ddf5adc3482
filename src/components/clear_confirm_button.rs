//! Clear Confirm Button Component
//!
//! Inline confirmation before the active view's markers are cleared.

use leptos::prelude::*;

/// Clear button with inline ✓/✗ confirmation
///
/// # Arguments
/// * `label` - Caption of the initial button
/// * `prompt` - Question shown while confirming
/// * `on_confirm` - Callback to execute when user confirms
#[component]
pub fn ClearConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button class="action-btn clear-btn" id="clear-btn" on:click=move |_| set_confirming.set(true)>
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="clear-confirm">
                <span class="clear-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "✗"
                </button>
            </span>
        </Show>
    }
}
