//! Todo List Component
//!
//! One parametrized list view: server ordering and presentation are props.
//! Every add/toggle/delete is followed by a full re-fetch.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use repair_desk_core::domain::Todo;
use repair_desk_core::view::{Liveness, TodoListState, TodoOrder};
use repair_desk_core::SyncError;

use super::{NewTodoForm, TodoRow};
use crate::context::AppContext;

/// Presentation of a todo view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoVariant {
    /// Plain panel with a loading placeholder
    Compact,
    /// Card layout, red delete buttons, no loading placeholder
    Card,
}

impl TodoVariant {
    pub fn heading(self) -> &'static str {
        match self {
            TodoVariant::Compact => "Todo List",
            TodoVariant::Card => "Todo App",
        }
    }

    pub fn container_class(self) -> &'static str {
        match self {
            TodoVariant::Compact => "todo-panel compact",
            TodoVariant::Card => "todo-panel card",
        }
    }

    pub fn shows_loading(self) -> bool {
        matches!(self, TodoVariant::Compact)
    }

    pub fn title_class(self, completed: bool) -> &'static str {
        match (self, completed) {
            (_, false) => "todo-title",
            (TodoVariant::Compact, true) => "todo-title done faded",
            (TodoVariant::Card, true) => "todo-title done muted",
        }
    }

    pub fn delete_class(self) -> &'static str {
        match self {
            TodoVariant::Compact => "delete-btn",
            TodoVariant::Card => "delete-btn danger",
        }
    }
}

/// Await a mutation and apply the re-fetched snapshot if the view is still mounted
fn spawn_mutation<F>(
    alive: Liveness,
    state: RwSignal<TodoListState>,
    mutation: F,
    apply: fn(&mut TodoListState, Result<Vec<Todo>, SyncError>),
) where
    F: Future<Output = Result<Vec<Todo>, SyncError>> + 'static,
{
    spawn_local(async move {
        let result = mutation.await;
        alive.guard(move || state.update(move |s| apply(s, result)));
    });
}

#[component]
pub fn TodoList(order: TodoOrder, variant: TodoVariant) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let service = ctx.todo_service(order);
    let state = RwSignal::new(TodoListState::new());

    let alive = Liveness::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.retire()
    });

    // Initial load
    {
        let service = service.clone();
        let alive = alive.clone();
        spawn_local(async move {
            let result = service.fetch().await;
            alive.guard(move || state.update(move |s| s.apply_load(result)));
        });
    }

    let on_add = Callback::new({
        let service = service.clone();
        let alive = alive.clone();
        move |_: ()| {
            let Some(title) = state.with_untracked(TodoListState::submission) else {
                return;
            };
            let service = service.clone();
            spawn_mutation(
                alive.clone(),
                state,
                async move { service.add(&title).await },
                TodoListState::apply_add,
            );
        }
    });

    let on_toggle = Callback::new({
        let service = service.clone();
        let alive = alive.clone();
        move |id: i64| {
            let Some(completed) = state.with_untracked(|s| s.completed_of(id)) else {
                return;
            };
            let service = service.clone();
            spawn_mutation(
                alive.clone(),
                state,
                async move { service.toggle(id, completed).await },
                TodoListState::apply_refresh,
            );
        }
    });

    let on_delete = Callback::new(move |id: i64| {
        let service = service.clone();
        spawn_mutation(
            alive.clone(),
            state,
            async move { service.delete(id).await },
            TodoListState::apply_refresh,
        );
    });

    let is_loading = move || variant.shows_loading() && state.with(|s| s.loading);

    view! {
        <Show when=is_loading>
            <div class="loading">"Loading..."</div>
        </Show>
        <section class=variant.container_class() hidden=is_loading>
            <h1>{variant.heading()}</h1>
            <NewTodoForm state=state on_submit=on_add />
            <ul class="todo-items">
                <For
                    each=move || state.with(|s| s.todos.clone())
                    key=|todo| (todo.id, todo.completed, todo.title.clone())
                    children=move |todo| view! {
                        <TodoRow
                            todo=todo
                            variant=variant
                            on_toggle=on_toggle
                            on_delete=on_delete
                        />
                    }
                />
            </ul>
        </section>
    }
}
