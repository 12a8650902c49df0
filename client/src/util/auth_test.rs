use super::*;
use crate::net::types::{CompanyAccount, UserAccount};
use crate::state::auth::{Identity, Session};

fn user_session() -> Session {
    Session {
        identity: Identity::User(UserAccount {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
        }),
        token: "t".to_owned(),
    }
}

fn company_session() -> Session {
    Session {
        identity: Identity::Company(CompanyAccount {
            id: "c1".to_owned(),
            name: "Acme".to_owned(),
            email: "ops@acme.test".to_owned(),
        }),
        token: "t".to_owned(),
    }
}

#[test]
fn should_redirect_when_not_loading_and_session_missing() {
    let state = AuthState { session: None, loading: false };
    assert!(should_redirect(&state, AccountKind::Company));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { session: None, loading: true };
    assert!(!should_redirect(&state, AccountKind::Company));
}

#[test]
fn should_redirect_customer_away_from_company_routes() {
    let state = AuthState { session: Some(user_session()), loading: false };
    assert!(should_redirect(&state, AccountKind::Company));
}

#[test]
fn should_not_redirect_matching_company() {
    let state = AuthState { session: Some(company_session()), loading: false };
    assert!(!should_redirect(&state, AccountKind::Company));
}
