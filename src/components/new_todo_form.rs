//! New Todo Form Component
//!
//! Draft input bound to the view model; blank drafts are dropped on submit.

use leptos::prelude::*;
use repair_desk_core::view::TodoListState;

#[component]
pub fn NewTodoForm(
    state: RwSignal<TodoListState>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="new-todo-form"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <input
                type="text"
                placeholder="Add new todo..."
                prop:value=move || state.with(|s| s.draft.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    state.update(|s| s.set_draft(text));
                }
            />
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}
