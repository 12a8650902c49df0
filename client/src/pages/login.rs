//! Login page for customers and rental companies.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiError;
use crate::net::types::AuthResponse;
use crate::state::auth::{AccountKind, AuthState, Session};
use crate::util::validate::validate_login;

/// Where a login attempt leaves the visitor.
#[derive(Debug, PartialEq)]
enum LoginOutcome {
    SignedIn(Session),
    /// Customer account exists but the email is not verified yet.
    NeedsVerification(String),
    Failed(String),
}

fn login_outcome(result: Result<AuthResponse, ApiError>, kind: AccountKind, email: &str) -> LoginOutcome {
    match result {
        Ok(resp) => match Session::from_auth_response(resp, kind) {
            Some(session) => LoginOutcome::SignedIn(session),
            None => LoginOutcome::Failed("Unexpected login response from server.".to_owned()),
        },
        Err(e) if kind == AccountKind::User && e.status() == Some(403) => {
            LoginOutcome::NeedsVerification(email.to_owned())
        }
        Err(e) => LoginOutcome::Failed(format!("Login failed: {e}")),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let kind = RwSignal::new(AccountKind::User);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        let account = kind.get_untracked();
        busy.set(true);
        info.set("Signing in...".to_owned());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            use crate::net::api;

            let result = match account {
                AccountKind::User => api::login_user(&request).await,
                AccountKind::Company => api::login_company(&request).await,
            };
            match login_outcome(result, account, &request.email) {
                LoginOutcome::SignedIn(session) => {
                    crate::state::auth::persist_session(&session);
                    auth.update(|a| a.session = Some(session));
                    info.set(String::new());
                    navigate(account.landing_route(), NavigateOptions::default());
                }
                LoginOutcome::NeedsVerification(address) => {
                    crate::util::storage::set_cookie(crate::util::storage::COOKIE_UNVERIFIED_EMAIL, &address);
                    navigate("/verify", NavigateOptions::default());
                }
                LoginOutcome::Failed(message) => info.set(message),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Log in"</h1>
                <div class="auth-card__toggle">
                    <button
                        class="auth-card__tab"
                        class:auth-card__tab--active=move || kind.get() == AccountKind::User
                        on:click=move |_| kind.set(AccountKind::User)
                    >
                        "Customer"
                    </button>
                    <button
                        class="auth-card__tab"
                        class:auth-card__tab--active=move || kind.get() == AccountKind::Company
                        on:click=move |_| kind.set(AccountKind::Company)
                    >
                        "Company"
                    </button>
                </div>
                <form class="form" on:submit=on_submit>
                    <input
                        class="form__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="form__input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Log in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="form__message">{move || info.get()}</p>
                </Show>
                <div class="auth-card__links">
                    <a href="/forgot-password">"Forgot password?"</a>
                    <a href="/signup">"Create an account"</a>
                </div>
            </div>
        </div>
    }
}
