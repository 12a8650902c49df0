//! Form input validation shared by the auth pages.
//!
//! Every check runs before any request is sent; the error's `Display` text is
//! what the form shows inline.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::types::{LoginRequest, SignupRequest};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Enter your name.")]
    NameRequired,
    #[error("Enter your email address.")]
    EmailRequired,
    #[error("Enter a valid email address.")]
    InvalidEmail,
    #[error("Enter your password.")]
    PasswordRequired,
    #[error("Password must be at least 8 characters.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Enter the verification code.")]
    CodeRequired,
}

/// `local@domain.tld`: one `@`, no whitespace, and a dotted domain whose
/// labels are all non-empty.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// Trim and validate an email field.
///
/// # Errors
///
/// Returns [`FormError::EmailRequired`] or [`FormError::InvalidEmail`].
pub fn validate_email(raw: &str) -> Result<String, FormError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(FormError::EmailRequired);
    }
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(email.to_owned())
}

/// Validate the login form. The password is only checked for presence.
///
/// # Errors
///
/// Returns the first failing field's [`FormError`].
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, FormError> {
    let email = validate_email(email)?;
    if password.is_empty() {
        return Err(FormError::PasswordRequired);
    }
    Ok(LoginRequest { email, password: password.to_owned() })
}

/// Validate a new password and its confirmation.
///
/// # Errors
///
/// Returns the first failing rule's [`FormError`].
pub fn validate_new_password(password: &str, confirm: &str) -> Result<String, FormError> {
    if password.is_empty() {
        return Err(FormError::PasswordRequired);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(FormError::PasswordTooShort);
    }
    if password != confirm {
        return Err(FormError::PasswordMismatch);
    }
    Ok(password.to_owned())
}

/// Validate the signup form.
///
/// # Errors
///
/// Returns the first failing field's [`FormError`].
pub fn validate_signup(name: &str, email: &str, password: &str, confirm: &str) -> Result<SignupRequest, FormError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FormError::NameRequired);
    }
    let email = validate_email(email)?;
    let password = validate_new_password(password, confirm)?;
    Ok(SignupRequest { name: name.to_owned(), email, password })
}

/// Trim a verification code and require a value.
///
/// # Errors
///
/// Returns [`FormError::CodeRequired`] for a blank code.
pub fn validate_code(raw: &str) -> Result<String, FormError> {
    let code = raw.trim();
    if code.is_empty() {
        return Err(FormError::CodeRequired);
    }
    Ok(code.to_owned())
}
