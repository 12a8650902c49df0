//! Spinner shown while a page or dashboard section is waiting on the API.

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator(#[prop(into, default = "Loading...".to_owned())] label: String) -> impl IntoView {
    view! {
        <div class="loading-indicator" role="status">
            <span class="loading-indicator__spinner" aria-hidden="true"></span>
            <span class="loading-indicator__label">{label}</span>
        </div>
    }
}
