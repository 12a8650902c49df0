//! Browser cookie and `localStorage` helpers for session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session, the chosen city, and the pending verification email live in
//! cookies with a 7-day lifetime; the token and user id are mirrored into
//! `localStorage`. All reads/writes are hydrate-only and silently no-op on the
//! server. Cookie strings are built and parsed with the `cookie` crate and
//! percent-encoded so JSON payloads survive the cookie header.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(any(test, feature = "hydrate"))]
use cookie::time::Duration;
#[cfg(any(test, feature = "hydrate"))]
use cookie::{Cookie, SameSite};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const COOKIE_USER: &str = "user";
pub const COOKIE_COMPANY: &str = "company";
pub const COOKIE_TOKEN: &str = "token";
pub const COOKIE_CITY: &str = "city";
pub const COOKIE_UNVERIFIED_EMAIL: &str = "unverifiedEmail";

pub const LOCAL_TOKEN: &str = "token";
pub const LOCAL_USER_ID: &str = "userId";

#[cfg(any(test, feature = "hydrate"))]
const COOKIE_MAX_AGE_DAYS: i64 = 7;

/// `document.cookie` assignment for `value`, percent-encoded.
#[cfg(any(test, feature = "hydrate"))]
fn cookie_assignment(name: &str, value: &str, max_age: Duration) -> String {
    Cookie::build((name, value))
        .max_age(max_age)
        .path("/")
        .same_site(SameSite::Lax)
        .build()
        .encoded()
        .to_string()
}

#[cfg(any(test, feature = "hydrate"))]
fn expired_cookie(name: &str) -> String {
    cookie_assignment(name, "", Duration::ZERO)
}

/// Find and decode the value of `name` in a `document.cookie` string.
#[cfg(any(test, feature = "hydrate"))]
fn find_cookie(raw: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(raw)
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read and decode a cookie value.
pub fn get_cookie(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let raw = html_document()?.cookie().ok()?;
        find_cookie(&raw, name)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Write a cookie that expires after seven days.
pub fn set_cookie(name: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = html_document() else {
            return;
        };
        let assignment = cookie_assignment(name, value, Duration::days(COOKIE_MAX_AGE_DAYS));
        if doc.set_cookie(&assignment).is_err() {
            log::warn!("failed to write cookie {name}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, value);
    }
}

pub fn remove_cookie(name: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&expired_cookie(name));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
    }
}

/// Load a JSON-encoded cookie.
pub fn load_json_cookie<T: DeserializeOwned>(name: &str) -> Option<T> {
    let raw = get_cookie(name)?;
    serde_json::from_str(&raw).ok()
}

/// Store `value` as a JSON-encoded cookie.
pub fn save_json_cookie<T: Serialize>(name: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        set_cookie(name, &raw);
    }
}

pub fn get_local(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

pub fn set_local(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

pub fn remove_local(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Current API token: the cookie wins, `localStorage` is the fallback.
pub fn load_token() -> Option<String> {
    get_cookie(COOKIE_TOKEN).or_else(|| get_local(LOCAL_TOKEN))
}
