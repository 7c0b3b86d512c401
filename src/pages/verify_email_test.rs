use super::*;

#[test]
fn both_identifiers_are_required() {
    assert_eq!(
        link_params(Some("5".to_owned()), Some("abc".to_owned())),
        Ok(("5".to_owned(), "abc".to_owned()))
    );
    assert_eq!(
        link_params(None, Some("abc".to_owned())),
        Err("Invalid verification link")
    );
    assert_eq!(
        link_params(Some("5".to_owned()), None),
        Err("Invalid verification link")
    );
    assert_eq!(
        link_params(Some(String::new()), Some("abc".to_owned())),
        Err("Invalid verification link")
    );
}

#[test]
fn error_display_prefers_the_backend_message() {
    assert_eq!(
        error_display(&ApiError::Message("Link expired.".to_owned())),
        "Link expired."
    );
}

#[test]
fn error_display_has_a_generic_fallback() {
    assert_eq!(
        error_display(&ApiError::Network("offline".to_owned())),
        "Verification failed. The link may be expired."
    );
}
