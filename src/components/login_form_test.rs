use super::*;

#[test]
fn credentials_are_trimmed() {
    assert_eq!(
        validate_credentials("  alice@example.com  ", "secret"),
        Ok(("alice@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn empty_email_is_rejected() {
    assert!(validate_credentials("", "secret").is_err());
    assert!(validate_credentials("   ", "secret").is_err());
}

#[test]
fn empty_password_is_rejected() {
    assert!(validate_credentials("alice@example.com", "").is_err());
}
