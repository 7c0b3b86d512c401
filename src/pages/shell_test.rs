use super::*;

#[test]
fn marker_is_detected_in_any_position() {
    assert!(has_verified_marker("?email_verified=true"));
    assert!(has_verified_marker("?foo=1&email_verified=true"));
    assert!(has_verified_marker("email_verified=true"));
}

#[test]
fn other_queries_do_not_trigger_the_banner() {
    assert!(!has_verified_marker(""));
    assert!(!has_verified_marker("?"));
    assert!(!has_verified_marker("?email_verified=false"));
    assert!(!has_verified_marker("?verified=true"));
}
