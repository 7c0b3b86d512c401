//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell owns this state and routes on its derived phase; every
//! network-issuing component reads the token from here via the session-scoped
//! API client. Invariant: no token means no user.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{AuthSuccess, User};

/// Authentication and verification state for the active session.
#[derive(Clone, Debug)]
pub struct SessionState {
    /// Opaque bearer token; absent when logged out.
    pub token: Option<String>,
    pub user: Option<User>,
    /// `None` until the verification-status check settles.
    pub email_verified: Option<bool>,
    /// True until token restore (and the `/me` fetch it triggers) completes.
    pub loading: bool,
    /// Resend-verification request in flight; disables the resend button.
    pub resending_email: bool,
    /// Outcome line shown under the resend button.
    pub resend_message: Option<String>,
    /// One-time banner after returning from a verification deep link.
    pub verified_banner: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            email_verified: None,
            loading: true,
            resending_email: false,
            resend_message: None,
            verified_banner: false,
        }
    }
}

/// Where the shell is in the auth flow.
///
/// `loading → {unauthenticated, checking-verification} → {unverified, ready}`,
/// with teardown as the only way back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Restoring a persisted token.
    Loading,
    /// No usable session; show the auth forms.
    Unauthenticated,
    /// Session established, verification status not yet known.
    CheckingVerification,
    /// Logged in but email unverified; main content is gated.
    Unverified,
    /// Fully usable session; tabs unlocked, live channel armed.
    Ready,
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            return SessionPhase::Loading;
        }
        if self.token.is_none() || self.user.is_none() {
            return SessionPhase::Unauthenticated;
        }
        match self.email_verified {
            None => SessionPhase::CheckingVerification,
            Some(false) => SessionPhase::Unverified,
            Some(true) => SessionPhase::Ready,
        }
    }

    /// Install a fresh session after login or registration.
    pub fn establish(&mut self, success: AuthSuccess) {
        self.token = Some(success.access_token);
        self.user = Some(success.user);
        self.email_verified = Some(success.email_verified);
        self.loading = false;
        self.resend_message = None;
    }

    /// Clear everything. Used by logout and by any 401 response; safe to
    /// call on an already-empty session.
    pub fn teardown(&mut self) {
        self.token = None;
        self.user = None;
        self.email_verified = None;
        self.loading = false;
        self.resending_email = false;
        self.resend_message = None;
    }
}
