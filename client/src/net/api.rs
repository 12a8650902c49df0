//! REST helpers for the external rental API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! API is only reached from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are classified once here: transport problems (`Network`), bodies
//! that do not match the expected shape (`Decode`), and non-2xx replies
//! (`Server`) carrying the backend's `message`/`error` text. Pages render the
//! `Display` form directly. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    AuthResponse, Booking, DamageReport, DamageStatus, Driver, LoginRequest, NewBooking,
    SignupRequest, Vehicle,
};

const DEFAULT_API_BASE: &str = "/api";

/// Error returned by every API helper.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected server response: {0}")]
    Decode(String),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status of a server-reported failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Base URL for the rental API, fixed at build time by `RENTAL_API_URL`.
pub fn api_base() -> &'static str {
    option_env!("RENTAL_API_URL").unwrap_or(DEFAULT_API_BASE)
}

#[cfg(any(test, feature = "hydrate"))]
fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn vehicle_path(id: &str) -> String {
    format!("/vehicles/{id}")
}

fn company_path(company_id: &str, collection: &str) -> String {
    format!("/companies/{company_id}/{collection}")
}

fn damage_report_path(id: &str) -> String {
    format!("/damage-reports/{id}")
}

/// Pick the user-facing message out of a failed response body.
#[cfg(any(test, feature = "hydrate"))]
fn server_error_message(status: u16, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| {
            let message = b.message.filter(|m| !m.trim().is_empty());
            message.or(b.error.filter(|e| !e.trim().is_empty()))
        })
        .unwrap_or_else(|| format!("request failed: {status}"))
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
enum Method {
    Post,
    Patch,
}

#[cfg(feature = "hydrate")]
fn request_builder(method: Option<Method>, path: &str) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;

    let url = join_url(api_base(), path);
    let builder = match method {
        None => Request::get(&url),
        Some(Method::Post) => Request::post(&url),
        Some(Method::Patch) => Request::patch(&url),
    };
    match crate::util::storage::load_token() {
        Some(token) => builder.header("Authorization", &bearer(&token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn check(resp: gloo_net::http::Response, path: &str) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let message = server_error_message(status, &body);
    log::warn!("api {path} failed with {status}: {message}");
    Err(ApiError::Server { status, message })
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = request_builder(None, path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = check(resp, path).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn send<B: Serialize>(method: Method, path: &str, body: &B) -> Result<gloo_net::http::Response, ApiError> {
    let resp = request_builder(Some(method), path)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(resp, path).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(Method::Post, path, body).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Method::Post, path, body).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

async fn patch_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(Method::Patch, path, body).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// VEHICLES, DRIVERS, BOOKINGS
// =============================================================================

/// List every vehicle offered on the site.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn fetch_vehicles() -> Result<Vec<Vehicle>, ApiError> {
    get_json("/vehicles").await
}

/// Fetch a single vehicle for the booking page.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn fetch_vehicle(id: &str) -> Result<Vehicle, ApiError> {
    get_json(&vehicle_path(id)).await
}

/// List the vehicles owned by a company.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn fetch_company_vehicles(company_id: &str) -> Result<Vec<Vehicle>, ApiError> {
    get_json(&company_path(company_id, "vehicles")).await
}

/// List the drivers employed by a company.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn fetch_company_drivers(company_id: &str) -> Result<Vec<Driver>, ApiError> {
    get_json(&company_path(company_id, "drivers")).await
}

/// List the bookings placed with a company.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn fetch_company_bookings(company_id: &str) -> Result<Vec<Booking>, ApiError> {
    get_json(&company_path(company_id, "bookings")).await
}

/// Submit a booking request. The reply body is not used.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server rejects it.
pub async fn create_booking(booking: &NewBooking) -> Result<(), ApiError> {
    post_unit("/bookings", booking).await
}

// =============================================================================
// DAMAGE REPORTS
// =============================================================================

/// List damage reports filed against a company's bookings.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn fetch_damage_reports(company_id: &str) -> Result<Vec<DamageReport>, ApiError> {
    get_json(&company_path(company_id, "damage-reports")).await
}

/// Change a damage report's status and return the updated record.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn update_damage_report(id: &str, status: DamageStatus) -> Result<DamageReport, ApiError> {
    let body = serde_json::json!({ "status": status });
    patch_json(&damage_report_path(id), &body).await
}

// =============================================================================
// AUTH
// =============================================================================

/// Sign in a customer.
///
/// # Errors
///
/// Returns [`ApiError::Server`] with status 403 for unverified accounts.
pub async fn login_user(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    post_json("/auth/login", request).await
}

/// Sign in a rental company.
///
/// # Errors
///
/// Returns an [`ApiError`] if the credentials are rejected or the request fails.
pub async fn login_company(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    post_json("/auth/company/login", request).await
}

/// Register a customer account. The backend emails a verification code.
///
/// # Errors
///
/// Returns an [`ApiError`] if registration is rejected or the request fails.
pub async fn signup(request: &SignupRequest) -> Result<(), ApiError> {
    post_unit("/auth/signup", request).await
}

/// Confirm an email address with the code the backend sent.
///
/// # Errors
///
/// Returns an [`ApiError`] if the code is rejected or the request fails.
pub async fn verify_email(email: &str, code: &str) -> Result<(), ApiError> {
    post_unit("/auth/verify-email", &serde_json::json!({ "email": email, "code": code })).await
}

/// Ask the backend to send a fresh verification code.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn resend_code(email: &str) -> Result<(), ApiError> {
    post_unit("/auth/resend-code", &serde_json::json!({ "email": email })).await
}

/// Start the password reset flow for `email`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn forgot_password(email: &str) -> Result<(), ApiError> {
    post_unit("/auth/forgot-password", &serde_json::json!({ "email": email })).await
}

/// Finish a password reset with the emailed token.
///
/// # Errors
///
/// Returns an [`ApiError`] if the token is rejected or the request fails.
pub async fn reset_password(token: &str, password: &str) -> Result<(), ApiError> {
    post_unit("/auth/reset-password", &serde_json::json!({ "token": token, "password": password })).await
}

