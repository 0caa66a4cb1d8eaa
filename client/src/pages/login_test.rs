use super::*;

// =============================================================
// validate_credentials
// =============================================================

#[test]
fn credentials_trim_the_email_only() {
    assert_eq!(
        validate_credentials("  reader@example.com  ", "hunter2"),
        Ok(("reader@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn credentials_require_an_email() {
    assert_eq!(
        validate_credentials("   ", "hunter2"),
        Err("Enter both email and password.")
    );
}

#[test]
fn credentials_require_a_password() {
    assert_eq!(
        validate_credentials("reader@example.com", ""),
        Err("Enter both email and password.")
    );
}

#[test]
fn credentials_keep_password_whitespace() {
    let result = validate_credentials("reader@example.com", " spaced pass ");
    assert_eq!(
        result,
        Ok(("reader@example.com".to_owned(), " spaced pass ".to_owned()))
    );
}

// =============================================================
// validate_registration
// =============================================================

#[test]
fn registration_accepts_matching_passwords() {
    assert_eq!(
        validate_registration("reader@example.com", "hunter2", "hunter2"),
        Ok(("reader@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn registration_rejects_mismatched_passwords() {
    assert_eq!(
        validate_registration("reader@example.com", "hunter2", "hunter3"),
        Err("Passwords do not match.")
    );
}

#[test]
fn registration_requires_credentials_first() {
    assert_eq!(
        validate_registration("", "hunter2", "hunter2"),
        Err("Enter both email and password.")
    );
}
