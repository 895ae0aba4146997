//! Connection Badge Component
//!
//! Advisory database status shown above the search form.

use leptos::prelude::*;
use repair_desk_core::view::ConnectionStatus;

#[component]
pub fn ConnectionBadge(#[prop(into)] status: Signal<ConnectionStatus>) -> impl IntoView {
    view! {
        <div class="connection-badge">
            <span class=move || if status.get().is_failure() { "status-failed" } else { "status-ok" }>
                {move || status.get().label()}
            </span>
        </div>
    }
}
