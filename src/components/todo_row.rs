//! Todo Row Component
//!
//! Individual todo in a list.

use leptos::prelude::*;
use repair_desk_core::domain::Todo;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use super::todo_list::TodoVariant;
use super::DeleteButton;

/// A single todo row with checkbox and delete button
#[component]
pub fn TodoRow(
    todo: Todo,
    variant: TodoVariant,
    on_toggle: Callback<i64>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let id = todo.id;
    let completed = todo.completed;

    view! {
        <li class="todo-row">
            <input
                type="checkbox"
                class="todo-check"
                prop:checked=completed
                on:change=move |ev| {
                    // The box follows the re-fetched snapshot, never the click
                    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                        input.set_checked(completed);
                    }
                    on_toggle.run(id);
                }
            />
            <span class=variant.title_class(completed)>{todo.title}</span>
            <DeleteButton
                button_class=variant.delete_class()
                on_delete=Callback::new(move |_: ()| on_delete.run(id))
            />
        </li>
    }
}
