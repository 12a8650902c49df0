use super::*;

#[test]
fn join_url_handles_slashes_on_both_sides() {
    assert_eq!(join_url("/api", "/vehicles"), "/api/vehicles");
    assert_eq!(join_url("https://rent.example.com/api/", "vehicles"), "https://rent.example.com/api/vehicles");
    assert_eq!(join_url("/api/", "/auth/login"), "/api/auth/login");
}

#[test]
fn default_api_base_is_relative() {
    if option_env!("RENTAL_API_URL").is_none() {
        assert_eq!(api_base(), "/api");
    }
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn resource_paths_format_expected_routes() {
    assert_eq!(vehicle_path("v1"), "/vehicles/v1");
    assert_eq!(company_path("c1", "drivers"), "/companies/c1/drivers");
    assert_eq!(company_path("c1", "damage-reports"), "/companies/c1/damage-reports");
    assert_eq!(damage_report_path("d9"), "/damage-reports/d9");
}

#[test]
fn server_error_message_prefers_message_field() {
    let body = r#"{"message":"Vehicle already booked","error":"conflict"}"#;
    assert_eq!(server_error_message(409, body), "Vehicle already booked");
}

#[test]
fn server_error_message_falls_back_to_error_field() {
    let body = r#"{"error":"Invalid credentials"}"#;
    assert_eq!(server_error_message(401, body), "Invalid credentials");
}

#[test]
fn server_error_message_skips_blank_message() {
    let body = r#"{"message":"  ","error":"Email not verified"}"#;
    assert_eq!(server_error_message(403, body), "Email not verified");
}

#[test]
fn server_error_message_uses_status_for_unparseable_body() {
    assert_eq!(server_error_message(502, "<html>Bad Gateway</html>"), "request failed: 502");
    assert_eq!(server_error_message(500, ""), "request failed: 500");
}

#[test]
fn api_error_display_is_user_facing() {
    let err = ApiError::Server { status: 400, message: "Dates overlap".to_owned() };
    assert_eq!(err.to_string(), "Dates overlap");
    assert_eq!(err.status(), Some(400));
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network error: offline");
    assert_eq!(ApiError::Network("offline".to_owned()).status(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_without_browser_are_unavailable() {
    let result = poll_ready(fetch_vehicles());
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Drive a future that never pends; the non-hydrate helpers return immediately.
#[cfg(not(feature = "hydrate"))]
fn poll_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future unexpectedly pending"),
    }
}
