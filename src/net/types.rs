//! Wire DTOs for the BRT backend's REST envelope.
//!
//! DESIGN
//! ======
//! The backend wraps every response in a `{ success, data|user|access_token,
//! message, errors? }` envelope. These types mirror that shape so serde does
//! the unwrapping and call sites only see domain values or an `ApiError`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Field-keyed validation messages as returned by the backend
/// (`errors: { field: [messages] }`).
pub type FieldErrors = HashMap<String, Vec<String>>;

/// First message for a field, if the server reported one.
pub fn field_error(errors: &FieldErrors, field: &str) -> Option<String> {
    errors.get(field).and_then(|msgs| msgs.first().cloned())
}

/// Drop a field's messages; called when the user edits that field.
pub fn clear_field_error(errors: &mut FieldErrors, field: &str) {
    errors.remove(field);
}

/// Error taxonomy for backend calls.
///
/// `Unauthorized` is special-cased everywhere: any 401 response tears the
/// whole session down, regardless of which call produced it.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// 401-class response; the session token is no longer valid.
    Unauthorized,
    /// 422-style response with per-field messages.
    Validation(FieldErrors),
    /// Backend rejected the request with a single human-readable message.
    Message(String),
    /// Transport failure or unusable response body.
    Network(String),
}

impl ApiError {
    /// One displayable line for contexts without per-field rendering.
    pub fn general_message(&self) -> String {
        match self {
            Self::Unauthorized => "Your session has expired. Please log in again.".to_owned(),
            Self::Validation(_) => "Please correct the highlighted fields.".to_owned(),
            Self::Message(msg) => msg.clone(),
            Self::Network(_) => "An error occurred. Please try again.".to_owned(),
        }
    }
}

/// Body shape shared by backend error responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    errors: Option<FieldErrors>,
}

/// Classify a non-OK response into the error taxonomy.
///
/// 401 always wins. Otherwise a parseable body with an `errors` map becomes
/// `Validation`, a bare `message` becomes `Message`, and anything else falls
/// back to `Network` with the status code.
pub fn classify_error_response(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(errors) = parsed.errors {
            if !errors.is_empty() {
                return ApiError::Validation(errors);
            }
        }
        if let Some(message) = parsed.message {
            return ApiError::Message(message);
        }
    }
    ApiError::Network(format!("request failed: {status}"))
}

/// Classify a non-OK response from the credential endpoints.
///
/// Before a session exists a 401 means rejected credentials, not an expired
/// token, so the backend's explanation is surfaced instead of taking the
/// forced-logout path.
pub fn classify_auth_error_response(status: u16, body: &str) -> ApiError {
    if status == 401 {
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            if let Some(message) = parsed.message {
                return ApiError::Message(message);
            }
        }
        return ApiError::Message("Authentication failed.".to_owned());
    }
    classify_error_response(status, body)
}

/// The authenticated user as carried in auth responses and `/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Address the verification flow is gated on.
    pub email: String,
}

/// Lifecycle of a reservation ticket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrtStatus {
    #[default]
    Active,
    Expired,
}

impl BrtStatus {
    /// Wire value, also used as a CSS class on status badges.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
        }
    }

    /// Parse the wire value; edit dropdowns round-trip through this.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "expired" => Some(Self::Expired),
            _ => None,
        }
    }
}

/// A reservation ticket as the backend returns it.
///
/// The server is authoritative: list rows are transient cached copies and
/// every successful mutation replaces the local row with the server's copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Brt {
    pub id: i64,
    /// Server-assigned code (e.g. `"BRT-1"`).
    pub brt_code: String,
    /// Decimal string, bounded [1, 1,000,000] BLU.
    pub reserved_amount: String,
    pub status: BrtStatus,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

/// One day of the statistics time series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyStat {
    /// ISO 8601 date (`YYYY-MM-DD`).
    pub date: String,
    /// BRTs created that day.
    pub count: i64,
    /// Decimal string of BLU reserved that day.
    pub total_amount: String,
}

/// Aggregate statistics snapshot, replaced wholesale on each poll.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_brts: i64,
    pub active_brts: i64,
    pub expired_brts: i64,
    /// Decimal string of all reserved BLU.
    pub total_reserved_amount: String,
    /// Per-day series, newest day first on the wire.
    #[serde(default)]
    pub daily_stats: Vec<DailyStat>,
}

/// Successful login/register response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: User,
    pub access_token: String,
    /// Present on login; register responses omit it (a fresh account is
    /// never verified).
    #[serde(default)]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Everything the shell needs after a successful login or registration.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthSuccess {
    pub user: User,
    pub access_token: String,
    pub email_verified: bool,
}

#[derive(Debug, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub struct VerificationStatusResponse {
    pub verified: bool,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope for `GET /brts`.
#[derive(Debug, Deserialize)]
pub struct BrtListResponse {
    #[serde(default)]
    pub data: Vec<Brt>,
}

/// Envelope for single-BRT mutations.
#[derive(Debug, Deserialize)]
pub struct BrtResponse {
    pub success: bool,
    pub data: Brt,
}

/// Envelope for `DELETE /brts/{id}`.
#[derive(Debug, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Envelope for `GET /statistics`.
#[derive(Debug, Deserialize)]
pub struct StatisticsResponse {
    pub data: Statistics,
}
