use super::*;

// =============================================================
// Email format
// =============================================================

#[test]
fn email_accepts_common_addresses() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("first.last+rent@mail.example.co.uk"));
}

#[test]
fn email_rejects_missing_at() {
    assert!(!is_valid_email("user.example.com"));
    assert!(!is_valid_email("user"));
}

#[test]
fn email_rejects_missing_domain_segment() {
    assert!(!is_valid_email("user@"));
    assert!(!is_valid_email("user@example"));
    assert!(!is_valid_email("user@example."));
    assert!(!is_valid_email("user@.com"));
}

#[test]
fn email_rejects_empty_local_part_whitespace_and_double_at() {
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("us er@example.com"));
    assert!(!is_valid_email("a@b@example.com"));
}

#[test]
fn validate_email_trims_and_distinguishes_blank_from_invalid() {
    assert_eq!(validate_email("  a@b.com "), Ok("a@b.com".to_owned()));
    assert_eq!(validate_email("   "), Err(FormError::EmailRequired));
    assert_eq!(validate_email("nope"), Err(FormError::InvalidEmail));
}

// =============================================================
// Forms
// =============================================================

#[test]
fn login_rejects_bad_email_before_password() {
    assert_eq!(validate_login("not-an-email", "").unwrap_err(), FormError::InvalidEmail);
}

#[test]
fn login_requires_password() {
    assert_eq!(validate_login("a@b.com", "").unwrap_err(), FormError::PasswordRequired);
}

#[test]
fn login_builds_request() {
    let req = validate_login(" a@b.com ", "secret").unwrap();
    assert_eq!(req.email, "a@b.com");
    assert_eq!(req.password, "secret");
}

#[test]
fn new_password_rules() {
    assert_eq!(validate_new_password("", ""), Err(FormError::PasswordRequired));
    assert_eq!(validate_new_password("short", "short"), Err(FormError::PasswordTooShort));
    assert_eq!(validate_new_password("longenough", "different1"), Err(FormError::PasswordMismatch));
    assert_eq!(validate_new_password("longenough", "longenough"), Ok("longenough".to_owned()));
}

#[test]
fn signup_requires_name_first() {
    assert_eq!(
        validate_signup("  ", "a@b.com", "longenough", "longenough").unwrap_err(),
        FormError::NameRequired
    );
}

#[test]
fn signup_builds_trimmed_request() {
    let req = validate_signup(" Ayesha ", "ayesha@example.com", "longenough", "longenough").unwrap();
    assert_eq!(req.name, "Ayesha");
    assert_eq!(req.email, "ayesha@example.com");
}

#[test]
fn code_is_trimmed_and_required() {
    assert_eq!(validate_code(" 123456 "), Ok("123456".to_owned()));
    assert_eq!(validate_code(""), Err(FormError::CodeRequired));
}

#[test]
fn form_errors_display_inline_text() {
    assert_eq!(FormError::InvalidEmail.to_string(), "Enter a valid email address.");
    assert_eq!(FormError::PasswordMismatch.to_string(), "Passwords do not match.");
}
