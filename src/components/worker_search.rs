//! Worker Search Component
//!
//! Repair request form: describe the problem, pick a region, list the
//! engineers registered there.

use leptos::prelude::*;
use leptos::task::spawn_local;
use repair_desk_core::domain::regions;
use repair_desk_core::view::{Liveness, RequestField, WorkerSearchState};

use super::{ConnectionBadge, WorkerCard};
use crate::context::AppContext;

#[component]
pub fn WorkerSearch() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let service = ctx.worker_service();
    let state = RwSignal::new(WorkerSearchState::new());

    let alive = Liveness::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.retire()
    });

    // Connectivity probe on mount
    {
        let service = service.clone();
        let alive = alive.clone();
        spawn_local(async move {
            let status = service.probe().await;
            alive.guard(move || state.update(|s| s.set_connection(status)));
        });
    }

    let set_field = move |field: RequestField, value: String| {
        state.update(|s| s.set_field(field, value));
    };

    let on_search = move |_: leptos::ev::MouseEvent| {
        let mut started = None;
        state.update(|s| started = s.begin_search());
        let Some(query) = started else {
            return;
        };
        let description = state.with_untracked(|s| s.request.description.clone());
        let service = service.clone();
        let alive = alive.clone();
        spawn_local(async move {
            let result = service.search(&description, &query).await;
            alive.guard(move || state.update(|s| s.finish_search(&query, result)));
        });
    };

    let request = move || state.with(|s| s.request.clone());
    let connection = Signal::derive(move || state.with(|s| s.connection));

    view! {
        <div class="worker-search">
            <h2 class="worker-search-title">"수리 요청 및 엔지니어 검색"</h2>

            <ConnectionBadge status=connection />

            <div class="request-form">
                <div class="form-field">
                    <label for="description">"수리 요청사항"</label>
                    <textarea
                        id="description"
                        name=RequestField::Description.name()
                        placeholder="수리가 필요한 내용을 자세히 설명해주세요."
                        prop:value=move || request().description
                        on:input=move |ev| set_field(RequestField::Description, event_target_value(&ev))
                    />
                </div>

                <div class="form-row">
                    <div class="form-field">
                        <label for="city">"시/도"</label>
                        <select
                            id="city"
                            name=RequestField::City.name()
                            prop:value=move || request().city
                            on:change=move |ev| set_field(RequestField::City, event_target_value(&ev))
                        >
                            <option value="">"시/도 선택"</option>
                            {regions::cities().map(|city| view! {
                                <option value=city>{city}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-field">
                        <label for="district">"시/군/구"</label>
                        <select
                            id="district"
                            name=RequestField::District.name()
                            prop:value=move || request().district
                            disabled=move || request().city.is_empty()
                            on:change=move |ev| set_field(RequestField::District, event_target_value(&ev))
                        >
                            <option value="">"시/군/구 선택"</option>
                            {move || regions::districts(&request().city).iter().map(|&district| view! {
                                <option value=district>{district}</option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-actions">
                    <button
                        class="search-btn"
                        disabled=move || !state.with(WorkerSearchState::can_search)
                        on:click=on_search
                    >
                        "엔지니어 검색"
                    </button>
                </div>
            </div>

            {move || state.with(|s| s.error.clone()).map(|message| view! {
                <div class="search-error">{message}</div>
            })}

            <Show when=move || state.with(|s| s.loading)>
                <div class="search-loading">"검색 중..."</div>
            </Show>

            <Show when=move || state.with(|s| !s.workers.is_empty())>
                <div class="worker-results">
                    <h3>"추천 엔지니어"</h3>
                    <For
                        each=move || state.with(|s| s.workers.clone())
                        key=|worker| worker.id.clone()
                        children=|worker| view! { <WorkerCard worker=worker /> }
                    />
                </div>
            </Show>
        </div>
    }
}
