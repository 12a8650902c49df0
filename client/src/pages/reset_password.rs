//! Finish a password reset using the token from the emailed link.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::util::validate::validate_new_password;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let params = use_params_map();
    let token = move || params.read().get("token").unwrap_or_default();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let new_password = match validate_new_password(&password.get_untracked(), &confirm.get_untracked()) {
            Ok(value) => value,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        let reset_token = token();
        if reset_token.is_empty() {
            info.set("This reset link is invalid.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Saving...".to_owned());

        leptos::task::spawn_local(async move {
            match crate::net::api::reset_password(&reset_token, &new_password).await {
                Ok(()) => {
                    done.set(true);
                    info.set("Password updated. You can now log in.".to_owned());
                }
                Err(e) => info.set(format!("Reset failed: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Choose a new password"</h1>
                <Show when=move || !done.get()>
                    <form class="form" on:submit=on_submit>
                        <input
                            class="form__input"
                            type="password"
                            placeholder="New password (8+ characters)"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <input
                            class="form__input"
                            type="password"
                            placeholder="Confirm new password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Update password"
                        </button>
                    </form>
                </Show>
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
