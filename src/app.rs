//! Repair Desk Frontend App
//!
//! Connects to the database, then shows the todo views and the engineer search.

use leptos::prelude::*;
use leptos::task::spawn_local;
use repair_desk_core::view::TodoOrder;
use repair_desk_core::SharedGateway;
use tracing::error;

use crate::components::{AppView, TodoList, TodoVariant, ViewTabBar, WorkerSearch};
use crate::connection;
use crate::context::AppContext;
use crate::logging;

#[derive(Clone)]
enum Connection {
    Pending,
    Ready(SharedGateway),
    Unavailable(String),
}

#[component]
pub fn App() -> impl IntoView {
    let (status, set_status) = signal(Connection::Pending);

    spawn_local(async move {
        match connection::connect().await {
            Ok(gateway) => set_status.set(Connection::Ready(gateway)),
            Err(e) => {
                error!(error = %e, "[APP] configuration unavailable");
                set_status.set(Connection::Unavailable(e));
            }
        }
    });

    view! {
        <div class="app-layout">
            {move || match status.get() {
                Connection::Pending => view! {
                    <p class="app-status">"Connecting..."</p>
                }.into_any(),
                Connection::Ready(gateway) => view! {
                    <Workbench gateway=gateway />
                }.into_any(),
                Connection::Unavailable(message) => view! {
                    <div class="app-status app-error">
                        <h1>"Configuration error"</h1>
                        <p>{message}</p>
                        <p>"Provide config.json with `url` and `anon_key` next to index.html."</p>
                        <pre class="app-log">{logging::recent().join("\n")}</pre>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

/// Views sharing one injected gateway
#[component]
fn Workbench(gateway: SharedGateway) -> impl IntoView {
    provide_context(AppContext::new(gateway));
    let (current_view, set_current_view) = signal(AppView::TodoApp);

    view! {
        <ViewTabBar current_view=current_view set_current_view=set_current_view />

        <main class="main-content">
            {move || match current_view.get() {
                AppView::TodoApp => view! {
                    <TodoList order=TodoOrder::IdAscending variant=TodoVariant::Card />
                }.into_any(),
                AppView::TodoList => view! {
                    <TodoList order=TodoOrder::NewestFirst variant=TodoVariant::Compact />
                }.into_any(),
                AppView::WorkerSearch => view! { <WorkerSearch /> }.into_any(),
            }}
        </main>
    }
}
