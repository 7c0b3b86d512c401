use super::*;

#[test]
fn complete_fields_pass_trimmed() {
    let fields =
        validate_register_fields(" Alice ", " alice@example.com ", "secret123", "secret123")
            .unwrap();
    assert_eq!(fields.name, "Alice");
    assert_eq!(fields.email, "alice@example.com");
    assert_eq!(fields.password, "secret123");
}

#[test]
fn missing_fields_are_rejected() {
    assert!(validate_register_fields("", "a@example.com", "pw", "pw").is_err());
    assert!(validate_register_fields("Alice", "", "pw", "pw").is_err());
    assert!(validate_register_fields("Alice", "a@example.com", "", "").is_err());
}

#[test]
fn mismatched_passwords_are_rejected() {
    assert_eq!(
        validate_register_fields("Alice", "a@example.com", "secret123", "secret124"),
        Err("Passwords do not match.")
    );
}

#[test]
fn passwords_are_not_trimmed() {
    // Whitespace is significant in passwords; a trailing space must mismatch.
    assert!(validate_register_fields("Alice", "a@example.com", "secret ", "secret").is_err());
}
