use super::*;
use crate::net::types::AuthSuccess;

fn success(email_verified: bool) -> AuthSuccess {
    AuthSuccess {
        user: User {
            id: 1,
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
        },
        access_token: "tok".to_owned(),
        email_verified,
    }
}

// =============================================================
// Phase derivation
// =============================================================

#[test]
fn default_session_is_loading() {
    assert_eq!(SessionState::default().phase(), SessionPhase::Loading);
}

#[test]
fn no_token_after_loading_is_unauthenticated() {
    let mut state = SessionState::default();
    state.loading = false;
    assert_eq!(state.phase(), SessionPhase::Unauthenticated);
}

#[test]
fn unknown_verification_is_checking() {
    let mut state = SessionState::default();
    state.establish(success(true));
    state.email_verified = None;
    assert_eq!(state.phase(), SessionPhase::CheckingVerification);
}

#[test]
fn unverified_session_gates_main_content() {
    let mut state = SessionState::default();
    state.establish(success(false));
    assert_eq!(state.phase(), SessionPhase::Unverified);
}

#[test]
fn verified_session_is_ready() {
    let mut state = SessionState::default();
    state.establish(success(true));
    assert_eq!(state.phase(), SessionPhase::Ready);
}

// =============================================================
// Establish / teardown
// =============================================================

#[test]
fn establish_installs_token_user_and_flag() {
    let mut state = SessionState::default();
    state.resend_message = Some("stale".to_owned());
    state.establish(success(true));
    assert_eq!(state.token, Some("tok".to_owned()));
    assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("Alice"));
    assert_eq!(state.email_verified, Some(true));
    assert!(!state.loading);
    assert_eq!(state.resend_message, None);
}

#[test]
fn teardown_clears_everything() {
    let mut state = SessionState::default();
    state.establish(success(false));
    state.resending_email = true;
    state.resend_message = Some("sent".to_owned());
    state.teardown();
    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
    assert_eq!(state.email_verified, None);
    assert!(!state.resending_email);
    assert_eq!(state.resend_message, None);
    assert_eq!(state.phase(), SessionPhase::Unauthenticated);
}

#[test]
fn teardown_on_empty_session_is_a_noop() {
    let mut state = SessionState::default();
    state.teardown();
    state.teardown();
    assert_eq!(state.phase(), SessionPhase::Unauthenticated);
}
