//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes apply identical redirect behavior once the persisted session
//! has been read.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AccountKind, AuthState};

/// True once auth has loaded and no session of `required` kind is present.
pub fn should_redirect(state: &AuthState, required: AccountKind) -> bool {
    !state.loading && state.session.as_ref().map(|s| s.kind()) != Some(required)
}

/// Redirect to `/login` whenever [`should_redirect`] holds.
pub fn install_auth_redirect<F>(auth: RwSignal<AuthState>, required: AccountKind, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect(&auth.get(), required) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Sign out: drop persisted values and clear the shared session.
pub fn sign_out(auth: RwSignal<AuthState>) {
    crate::state::auth::clear_session();
    auth.update(|a| a.session = None);
}
