//! Top navigation bar shown on every public page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AccountKind, AuthState};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let signed_in = move || auth.get().session.is_some();
    let is_company = move || auth.get().session.is_some_and(|s| s.kind() == AccountKind::Company);
    let display_name = move || {
        auth.get()
            .session
            .map(|s| s.display_name().to_owned())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        crate::util::auth::sign_out(auth);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"RentRide"</a>
            <a class="navbar__link" href="/about">"About"</a>
            <a class="navbar__link" href="/contact">"Contact"</a>
            <a class="navbar__link" href="/terms">"Terms"</a>
            <span class="navbar__spacer"></span>
            <Show
                when=signed_in
                fallback=|| {
                    view! {
                        <a class="navbar__link" href="/login">"Log in"</a>
                        <a class="btn btn--primary" href="/signup">"Sign up"</a>
                    }
                }
            >
                <Show when=is_company>
                    <a class="navbar__link" href="/dashboard">"Dashboard"</a>
                    <a class="navbar__link" href="/dashboard/damage-reports">"Damage reports"</a>
                </Show>
                <span class="navbar__self">{display_name}</span>
                <button class="btn navbar__logout" on:click=on_logout.clone()>
                    "Log out"
                </button>
            </Show>
        </nav>
    }
}
