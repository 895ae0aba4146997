//! View Tab Bar Component
//!
//! Tab bar for switching between the todo views and the engineer search.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    TodoApp,
    TodoList,
    WorkerSearch,
}

impl AppView {
    pub const ALL: [AppView; 3] = [AppView::TodoApp, AppView::TodoList, AppView::WorkerSearch];

    pub fn label(self) -> &'static str {
        match self {
            AppView::TodoApp => "Todo App",
            AppView::TodoList => "Todo List",
            AppView::WorkerSearch => "엔지니어 검색",
        }
    }
}

#[component]
pub fn ViewTabBar(
    current_view: ReadSignal<AppView>,
    set_current_view: WriteSignal<AppView>,
) -> impl IntoView {
    view! {
        <nav class="view-tab-bar">
            {AppView::ALL.iter().map(|&tab| {
                let is_active = move || current_view.get() == tab;
                view! {
                    <button
                        class=move || if is_active() { "view-tab active" } else { "view-tab" }
                        on:click=move |_| set_current_view.set(tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
