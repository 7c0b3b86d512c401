use super::*;

fn validation_body() -> &'static str {
    r#"{"success":false,"message":"The given data was invalid.","errors":{"reserved_amount":["The reserved amount must be at least 1.","Second message."]}}"#
}

// =============================================================
// Field error helpers
// =============================================================

#[test]
fn field_error_returns_first_message() {
    let mut errors = FieldErrors::new();
    errors.insert(
        "email".to_owned(),
        vec!["taken".to_owned(), "invalid".to_owned()],
    );
    assert_eq!(field_error(&errors, "email"), Some("taken".to_owned()));
}

#[test]
fn field_error_none_for_unknown_field() {
    let errors = FieldErrors::new();
    assert_eq!(field_error(&errors, "email"), None);
}

#[test]
fn clear_field_error_removes_only_that_field() {
    let mut errors = FieldErrors::new();
    errors.insert("email".to_owned(), vec!["taken".to_owned()]);
    errors.insert("password".to_owned(), vec!["short".to_owned()]);
    clear_field_error(&mut errors, "email");
    assert_eq!(field_error(&errors, "email"), None);
    assert_eq!(field_error(&errors, "password"), Some("short".to_owned()));
}

// =============================================================
// Error classification
// =============================================================

#[test]
fn classify_401_is_unauthorized_regardless_of_body() {
    assert_eq!(
        classify_error_response(401, validation_body()),
        ApiError::Unauthorized
    );
    assert_eq!(classify_error_response(401, "not json"), ApiError::Unauthorized);
}

#[test]
fn classify_errors_map_becomes_validation() {
    let ApiError::Validation(errors) = classify_error_response(422, validation_body()) else {
        panic!("expected validation error");
    };
    assert_eq!(
        field_error(&errors, "reserved_amount"),
        Some("The reserved amount must be at least 1.".to_owned())
    );
}

#[test]
fn classify_empty_errors_map_falls_through_to_message() {
    let body = r#"{"message":"Nope.","errors":{}}"#;
    assert_eq!(
        classify_error_response(422, body),
        ApiError::Message("Nope.".to_owned())
    );
}

#[test]
fn classify_bare_message_becomes_message() {
    let body = r#"{"message":"Invalid credentials"}"#;
    assert_eq!(
        classify_error_response(403, body),
        ApiError::Message("Invalid credentials".to_owned())
    );
}

#[test]
fn classify_unparseable_body_becomes_network_with_status() {
    assert_eq!(
        classify_error_response(500, "<html>oops</html>"),
        ApiError::Network("request failed: 500".to_owned())
    );
}

#[test]
fn auth_classification_surfaces_the_401_body_message() {
    let body = r#"{"success":false,"message":"Invalid credentials"}"#;
    assert_eq!(
        classify_auth_error_response(401, body),
        ApiError::Message("Invalid credentials".to_owned())
    );
}

#[test]
fn auth_classification_401_without_message_has_fallback() {
    assert_eq!(
        classify_auth_error_response(401, "not json"),
        ApiError::Message("Authentication failed.".to_owned())
    );
}

#[test]
fn auth_classification_delegates_other_statuses() {
    let ApiError::Validation(errors) = classify_auth_error_response(422, validation_body())
    else {
        panic!("expected validation error");
    };
    assert!(errors.contains_key("reserved_amount"));
}

#[test]
fn general_message_passes_backend_message_through() {
    assert_eq!(
        ApiError::Message("Invalid credentials".to_owned()).general_message(),
        "Invalid credentials"
    );
}

// =============================================================
// Status parsing
// =============================================================

#[test]
fn brt_status_round_trips_through_wire_value() {
    assert_eq!(BrtStatus::parse(BrtStatus::Active.as_str()), Some(BrtStatus::Active));
    assert_eq!(BrtStatus::parse(BrtStatus::Expired.as_str()), Some(BrtStatus::Expired));
    assert_eq!(BrtStatus::parse("pending"), None);
}

// =============================================================
// Envelope deserialization
// =============================================================

#[test]
fn brt_deserializes_from_backend_shape() {
    let body = r#"{"id":7,"brt_code":"BRT-7","reserved_amount":"50.00","status":"active","created_at":"2026-08-30T10:00:00Z"}"#;
    let brt: Brt = serde_json::from_str(body).unwrap();
    assert_eq!(brt.id, 7);
    assert_eq!(brt.brt_code, "BRT-7");
    assert_eq!(brt.status, BrtStatus::Active);
}

#[test]
fn auth_response_email_verified_defaults_to_absent() {
    let body = r#"{"success":true,"user":{"id":1,"name":"Alice","email":"a@example.com"},"access_token":"tok"}"#;
    let resp: AuthResponse = serde_json::from_str(body).unwrap();
    assert!(resp.success);
    assert_eq!(resp.email_verified, None);
}

#[test]
fn statistics_daily_stats_default_to_empty() {
    let body = r#"{"total_brts":3,"active_brts":2,"expired_brts":1,"total_reserved_amount":"400.00"}"#;
    let stats: Statistics = serde_json::from_str(body).unwrap();
    assert!(stats.daily_stats.is_empty());
}

#[test]
fn brt_list_response_data_defaults_to_empty() {
    let resp: BrtListResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.data.is_empty());
}
