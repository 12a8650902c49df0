//! Session state for signed-in customers and rental companies.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides an `RwSignal<AuthState>` that starts `loading` and is filled
//! from [`load_session`] once the browser is available. Login pages call
//! [`persist_session`]; logout calls [`clear_session`]. Guards wait for
//! `loading` to clear before redirecting.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AuthResponse, CompanyAccount, UserAccount};
use crate::util::storage;

/// Which login endpoint and landing route a sign-in uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccountKind {
    #[default]
    User,
    Company,
}

impl AccountKind {
    /// Route to open after a successful sign-in.
    pub fn landing_route(self) -> &'static str {
        match self {
            Self::User => "/",
            Self::Company => "/dashboard",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Identity {
    User(UserAccount),
    Company(CompanyAccount),
}

/// A signed-in customer or company with its API token.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub identity: Identity,
    pub token: String,
}

impl Session {
    /// Build a session from a login reply, taking the account matching `kind`.
    pub fn from_auth_response(resp: AuthResponse, kind: AccountKind) -> Option<Self> {
        let identity = match kind {
            AccountKind::User => Identity::User(resp.user?),
            AccountKind::Company => Identity::Company(resp.company?),
        };
        Some(Self { identity, token: resp.token })
    }

    pub fn kind(&self) -> AccountKind {
        match self.identity {
            Identity::User(_) => AccountKind::User,
            Identity::Company(_) => AccountKind::Company,
        }
    }

    pub fn display_name(&self) -> &str {
        match &self.identity {
            Identity::User(user) => &user.name,
            Identity::Company(company) => &company.name,
        }
    }

    pub fn user(&self) -> Option<&UserAccount> {
        match &self.identity {
            Identity::User(user) => Some(user),
            Identity::Company(_) => None,
        }
    }

    pub fn company(&self) -> Option<&CompanyAccount> {
        match &self.identity {
            Identity::Company(company) => Some(company),
            Identity::User(_) => None,
        }
    }
}

/// Authentication state shared through context.
///
/// `loading` stays true until the browser has read the persisted session, so
/// guarded pages do not redirect during hydration.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    pub fn pending() -> Self {
        Self { session: None, loading: true }
    }

    pub fn user(&self) -> Option<&UserAccount> {
        self.session.as_ref().and_then(Session::user)
    }

    pub fn company(&self) -> Option<&CompanyAccount> {
        self.session.as_ref().and_then(Session::company)
    }
}

/// Read the session persisted by [`persist_session`].
pub fn load_session() -> Option<Session> {
    let token = storage::load_token()?;
    let identity = if let Some(user) = storage::load_json_cookie::<UserAccount>(storage::COOKIE_USER) {
        Identity::User(user)
    } else {
        Identity::Company(storage::load_json_cookie::<CompanyAccount>(storage::COOKIE_COMPANY)?)
    };
    Some(Session { identity, token })
}

/// Write the session to cookies (7 days) and mirror token/user id to `localStorage`.
pub fn persist_session(session: &Session) {
    storage::set_cookie(storage::COOKIE_TOKEN, &session.token);
    storage::set_local(storage::LOCAL_TOKEN, &session.token);
    match &session.identity {
        Identity::User(user) => {
            storage::remove_cookie(storage::COOKIE_COMPANY);
            storage::save_json_cookie(storage::COOKIE_USER, user);
            storage::set_local(storage::LOCAL_USER_ID, &user.id);
        }
        Identity::Company(company) => {
            storage::remove_cookie(storage::COOKIE_USER);
            storage::remove_local(storage::LOCAL_USER_ID);
            storage::save_json_cookie(storage::COOKIE_COMPANY, company);
        }
    }
}

/// Forget every persisted session value.
pub fn clear_session() {
    for name in [storage::COOKIE_USER, storage::COOKIE_COMPANY, storage::COOKIE_TOKEN] {
        storage::remove_cookie(name);
    }
    storage::remove_local(storage::LOCAL_TOKEN);
    storage::remove_local(storage::LOCAL_USER_ID);
}
