//! Non-fatal error banner for the dashboard.
//!
//! The only retry path is a full page reload.

use leptos::prelude::*;

#[component]
pub fn ErrorDisplay(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-display" role="alert">
            <p class="error-display__message">{message}</p>
            <button class="btn error-display__retry" on:click=move |_| crate::util::reload_page()>
                "Retry"
            </button>
        </div>
    }
}

/// Contextual "No ... data found." notice inside a section.
#[component]
pub fn Advisory(message: &'static str) -> impl IntoView {
    view! { <p class="advisory">{message}</p> }
}
