//! Start a password reset by email.

use leptos::prelude::*;

use crate::util::validate::validate_email;

/// Shown whether or not the address has an account.
const SENT_MESSAGE: &str = "If an account exists for that address, a reset link is on its way.";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let address = match validate_email(&email.get_untracked()) {
            Ok(address) => address,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set("Sending...".to_owned());

        leptos::task::spawn_local(async move {
            match crate::net::api::forgot_password(&address).await {
                Ok(()) => info.set(SENT_MESSAGE.to_owned()),
                Err(e) => info.set(format!("Could not send reset link: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Forgot password"</h1>
                <form class="form" on:submit=on_submit>
                    <input
                        class="form__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Send reset link"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="form__message">{move || info.get()}</p>
                </Show>
                <div class="auth-card__links">
                    <a href="/login">"Back to log in"</a>
                </div>
            </div>
        </div>
    }
}
