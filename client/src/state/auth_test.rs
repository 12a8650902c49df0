use super::*;

fn user() -> UserAccount {
    UserAccount { id: "u1".to_owned(), name: "Bilal".to_owned(), email: "bilal@example.com".to_owned() }
}

fn company() -> CompanyAccount {
    CompanyAccount { id: "c1".to_owned(), name: "Acme Rentals".to_owned(), email: "ops@acme.test".to_owned() }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_session() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(!state.loading);
}

#[test]
fn auth_state_pending_is_loading() {
    let state = AuthState::pending();
    assert!(state.session.is_none());
    assert!(state.loading);
}

// =============================================================
// Session construction
// =============================================================

#[test]
fn session_from_user_login() {
    let resp = AuthResponse { token: "t1".to_owned(), user: Some(user()), company: None };
    let session = Session::from_auth_response(resp, AccountKind::User).unwrap();
    assert_eq!(session.kind(), AccountKind::User);
    assert_eq!(session.display_name(), "Bilal");
    assert_eq!(session.token, "t1");
    assert!(session.company().is_none());
}

#[test]
fn session_from_company_login() {
    let resp = AuthResponse { token: "t2".to_owned(), user: None, company: Some(company()) };
    let session = Session::from_auth_response(resp, AccountKind::Company).unwrap();
    assert_eq!(session.kind(), AccountKind::Company);
    assert_eq!(session.company().unwrap().id, "c1");
}

#[test]
fn session_requires_matching_account() {
    let resp = AuthResponse { token: "t3".to_owned(), user: Some(user()), company: None };
    assert!(Session::from_auth_response(resp, AccountKind::Company).is_none());
}

#[test]
fn auth_state_accessors_follow_identity() {
    let state = AuthState {
        session: Some(Session { identity: Identity::Company(company()), token: "t".to_owned() }),
        loading: false,
    };
    assert!(state.user().is_none());
    assert_eq!(state.company().unwrap().name, "Acme Rentals");
}

#[test]
fn landing_routes_per_kind() {
    assert_eq!(AccountKind::User.landing_route(), "/");
    assert_eq!(AccountKind::Company.landing_route(), "/dashboard");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_session_without_browser_is_none() {
    assert!(load_session().is_none());
}
