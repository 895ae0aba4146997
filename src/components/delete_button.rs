//! Delete Button Component
//!
//! Delete affordance shared by both todo variants; only the styling differs.

use leptos::prelude::*;

/// # Arguments
/// * `button_class` - CSS class, e.g. "delete-btn" or "delete-btn danger"
/// * `on_delete` - Callback to execute on click
#[component]
pub fn DeleteButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_class
            on:click=move |ev| {
                ev.stop_propagation();
                on_delete.run(());
            }
        >
            "Delete"
        </button>
    }
}
