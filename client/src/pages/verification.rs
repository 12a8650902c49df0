//! Email verification with a rate-limited "resend code" action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached after signup or after a login attempt on an unverified account;
//! both store the address in the `unverifiedEmail` cookie. The resend button
//! is disabled for [`RESEND_COOLDOWN_SECS`] after each use.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::verification::{RESEND_COOLDOWN_SECS, ResendCooldown};
use crate::util::storage;
use crate::util::validate::validate_code;

#[component]
pub fn VerificationPage() -> impl IntoView {
    let navigate = use_navigate();

    let email = RwSignal::new(None::<String>);
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let cooldown = RwSignal::new(ResendCooldown::default());

    Effect::new(move || {
        email.set(storage::get_cookie(storage::COOKIE_UNVERIFIED_EMAIL));
    });

    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    let alive_cleanup = alive.clone();
    on_cleanup(move || alive_cleanup.store(false, std::sync::atomic::Ordering::Relaxed));

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(address) = email.get_untracked() else {
            info.set("No pending verification. Sign up or log in first.".to_owned());
            return;
        };
        let code_value = match validate_code(&code.get_untracked()) {
            Ok(value) => value,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set("Verifying...".to_owned());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_email(&address, &code_value).await {
                Ok(()) => {
                    storage::remove_cookie(storage::COOKIE_UNVERIFIED_EMAIL);
                    info.set("Email verified. You can now log in.".to_owned());
                    navigate("/login", NavigateOptions::default());
                }
                Err(e) => info.set(format!("Verification failed: {e}")),
            }
            busy.set(false);
        });
    };

    let on_resend = move |_| {
        if !cooldown.get_untracked().can_resend() {
            return;
        }
        let Some(address) = email.get_untracked() else {
            return;
        };
        cooldown.update(ResendCooldown::start);

        #[cfg(feature = "hydrate")]
        {
            let alive_task = alive.clone();
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                    if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                        break;
                    }
                    if !cooldown.try_update(ResendCooldown::tick).unwrap_or(false) {
                        break;
                    }
                }
            });
        }

        leptos::task::spawn_local(async move {
            match crate::net::api::resend_code(&address).await {
                Ok(()) => info.set(format!("A new code was sent to {address}.")),
                Err(e) => info.set(format!("Could not resend code: {e}")),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Verify your email"</h1>
                <p class="auth-card__subtitle">
                    {move || match email.get() {
                        Some(address) => format!("Enter the code we sent to {address}."),
                        None => "No pending verification found.".to_owned(),
                    }}
                </p>
                <form class="form" on:submit=on_verify>
                    <input
                        class="form__input form__input--code"
                        type="text"
                        inputmode="numeric"
                        placeholder="123456"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Verify"
                    </button>
                </form>
                <button
                    class="btn"
                    title=format!("Available once every {RESEND_COOLDOWN_SECS} seconds")
                    disabled=move || !cooldown.get().can_resend() || email.get().is_none()
                    on:click=on_resend
                >
                    {move || cooldown.get().button_label()}
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="form__message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
