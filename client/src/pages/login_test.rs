use super::*;
use crate::net::types::{CompanyAccount, UserAccount};

fn user_response() -> AuthResponse {
    AuthResponse {
        token: "tok".to_owned(),
        user: Some(UserAccount { id: "u1".to_owned(), name: "Hina".to_owned(), email: "hina@example.com".to_owned() }),
        company: None,
    }
}

#[test]
fn successful_user_login_signs_in() {
    match login_outcome(Ok(user_response()), AccountKind::User, "hina@example.com") {
        LoginOutcome::SignedIn(session) => assert_eq!(session.display_name(), "Hina"),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn company_login_with_user_payload_fails() {
    let outcome = login_outcome(Ok(user_response()), AccountKind::Company, "ops@acme.test");
    assert_eq!(outcome, LoginOutcome::Failed("Unexpected login response from server.".to_owned()));
}

#[test]
fn company_login_succeeds_with_company_payload() {
    let resp = AuthResponse {
        token: "tok".to_owned(),
        user: None,
        company: Some(CompanyAccount { id: "c1".to_owned(), name: "Acme".to_owned(), email: "ops@acme.test".to_owned() }),
    };
    assert!(matches!(
        login_outcome(Ok(resp), AccountKind::Company, "ops@acme.test"),
        LoginOutcome::SignedIn(_)
    ));
}

#[test]
fn unverified_customer_goes_to_verification() {
    let err = ApiError::Server { status: 403, message: "Email not verified".to_owned() };
    assert_eq!(
        login_outcome(Err(err), AccountKind::User, "hina@example.com"),
        LoginOutcome::NeedsVerification("hina@example.com".to_owned())
    );
}

#[test]
fn company_403_is_a_plain_failure() {
    let err = ApiError::Server { status: 403, message: "Account suspended".to_owned() };
    assert_eq!(
        login_outcome(Err(err), AccountKind::Company, "ops@acme.test"),
        LoginOutcome::Failed("Login failed: Account suspended".to_owned())
    );
}

#[test]
fn network_error_reports_failure_text() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(
        login_outcome(Err(err), AccountKind::User, "a@b.com"),
        LoginOutcome::Failed("Login failed: network error: offline".to_owned())
    );
}
