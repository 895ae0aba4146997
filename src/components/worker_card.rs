//! Worker Card Component

use leptos::prelude::*;
use repair_desk_core::domain::Worker;

/// One recommended engineer with a dialable phone link
#[component]
pub fn WorkerCard(worker: Worker) -> impl IntoView {
    let href = worker.phone_href();
    let region = format!("{} {}", worker.city, worker.district);

    view! {
        <div class="worker-card">
            <div class="worker-card-body">
                <div>
                    <h4 class="worker-name">{worker.name}</h4>
                    <p class="worker-region">{region}</p>
                </div>
                <a class="worker-phone" href=href>{worker.phone}</a>
            </div>
        </div>
    }
}
