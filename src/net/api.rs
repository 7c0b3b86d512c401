//! REST calls against the BRT backend.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`. Server-side (SSR): stubs
//! returning errors since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so callers can translate failures
//! into local UI state. A 401 surfaces as `ApiError::Unauthorized` and the
//! caller is expected to tear the session down.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, AuthSuccess, Brt, BrtStatus, Statistics, User};
#[cfg(any(test, feature = "hydrate"))]
use super::types::AuthResponse;
#[cfg(feature = "hydrate")]
use super::types::{
    BrtListResponse, BrtResponse, DeleteResponse, MeResponse, MessageResponse,
    StatisticsResponse, VerificationStatusResponse, classify_auth_error_response,
    classify_error_response,
};

/// A session-scoped API client.
///
/// Carries the base path and bearer token explicitly instead of mutating
/// shared default headers, so components always issue requests with the
/// session they were handed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base: String) -> Self {
        Self { base, token: None }
    }

    /// Same base path with a bearer token attached.
    pub fn with_token(&self, token: String) -> Self {
        Self {
            base: self.base.clone(),
            token: Some(token),
        }
    }

    /// Same base path with no credentials. The verification landing route
    /// uses this: signed links must be confirmed without an Authorization
    /// header.
    pub fn anonymous(&self) -> Self {
        Self {
            base: self.base.clone(),
            token: None,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn brt_endpoint(id: i64) -> String {
    format!("/brts/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn verify_email_endpoint(id: &str, hash: &str, expires: &str, signature: &str) -> String {
    format!("/email/verify/{id}/{hash}?expires={expires}&signature={signature}")
}

#[cfg(feature = "hydrate")]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
async fn read_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    classify_error_response(status, &body)
}

/// Error reader for login/register, where a 401 is a credential rejection
/// rather than a dead session.
#[cfg(feature = "hydrate")]
async fn read_auth_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    classify_auth_error_response(status, &body)
}

/// Build an authorized request for this client's session.
#[cfg(feature = "hydrate")]
macro_rules! request {
    ($client:expr, $method:ident, $path:expr) => {{
        let mut builder = gloo_net::http::Request::$method(&$client.url($path))
            .header("Accept", "application/json");
        if let Some(token) = $client.token.as_deref() {
            builder = builder.header("Authorization", &bearer(token));
        }
        builder
    }};
}

impl ApiClient {
    /// `POST /login` with email + password.
    ///
    /// # Errors
    ///
    /// `Validation` for field errors, `Message` for rejected credentials,
    /// `Network` for transport failures.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSuccess, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email, "password": password });
            let resp = request!(self, post, "/login")
                .json(&payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(read_auth_error(resp).await);
            }
            let body: AuthResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            auth_success(body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(server_side())
        }
    }

    /// `POST /register` with the full registration form.
    ///
    /// A fresh account always starts unverified, whatever the response says.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`ApiClient::login`].
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Result<AuthSuccess, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
                "password_confirmation": password_confirmation,
            });
            let resp = request!(self, post, "/register")
                .json(&payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(read_auth_error(resp).await);
            }
            let body: AuthResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            auth_success(body).map(|mut success| {
                success.email_verified = false;
                success
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, email, password, password_confirmation);
            Err(server_side())
        }
    }

    /// Best-effort `POST /logout`; local teardown happens regardless.
    pub async fn logout(&self) {
        #[cfg(feature = "hydrate")]
        {
            let _ = request!(self, post, "/logout").send().await;
        }
    }

    /// `GET /me` for the current session's user.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the persisted token is stale.
    pub async fn me(&self) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = request!(self, get, "/me")
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(read_error(resp).await);
            }
            let body: MeResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(body.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(server_side())
        }
    }

    /// `GET /email/verification-status` → whether the email is verified.
    ///
    /// # Errors
    ///
    /// `Unauthorized` or `Network`.
    pub async fn verification_status(&self) -> Result<bool, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = request!(self, get, "/email/verification-status")
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(read_error(resp).await);
            }
            let body: VerificationStatusResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(body.verified)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(server_side())
        }
    }

    /// `POST /email/verification-notification` resends the verification
    /// email. Returns the backend's confirmation message when present.
    ///
    /// # Errors
    ///
    /// `Message` with the backend's explanation, or `Network`.
    pub async fn resend_verification(&self, email: &str) -> Result<Option<String>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email });
            let resp = request!(self, post, "/email/verification-notification")
                .json(&payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(read_error(resp).await);
            }
            let body: MessageResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(body.message)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email;
            Err(server_side())
        }
    }

    /// `GET /email/verify/{id}/{hash}?expires&signature` confirms a
    /// deep-link verification. Call on an [`ApiClient::anonymous`] client.
    ///
    /// # Errors
    ///
    /// `Message` when the link is expired or invalid, `Network` otherwise.
    pub async fn verify_email(
        &self,
        id: &str,
        hash: &str,
        expires: &str,
        signature: &str,
    ) -> Result<Option<String>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let path = verify_email_endpoint(id, hash, expires, signature);
            let resp = request!(self, get, &path)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(read_error(resp).await);
            }
            let body: MessageResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(body.message)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, hash, expires, signature);
            Err(server_side())
        }
    }

    /// `GET /brts` returns the full list, no pagination.
    ///
    /// # Errors
    ///
    /// `Unauthorized` or `Network`.
    pub async fn list_brts(&self) -> Result<Vec<Brt>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = request!(self, get, "/brts")
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(read_error(resp).await);
            }
            let body: BrtListResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(body.data)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(server_side())
        }
    }

    /// `POST /brts` with a reserved amount. Returns the created record with
    /// its server-assigned code.
    ///
    /// # Errors
    ///
    /// `Validation` for amounts the server rejects.
    pub async fn create_brt(&self, reserved_amount: &str) -> Result<Brt, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "reserved_amount": reserved_amount });
            let resp = request!(self, post, "/brts")
                .json(&payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(read_error(resp).await);
            }
            let body: BrtResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !body.success {
                return Err(ApiError::Message("Failed to create BRT.".to_owned()));
            }
            Ok(body.data)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = reserved_amount;
            Err(server_side())
        }
    }

    /// `PUT /brts/{id}` with the edited amount and status. The returned
    /// record is the server's authoritative copy and replaces the local row.
    ///
    /// # Errors
    ///
    /// `Unauthorized`, `Message`, or `Network`.
    pub async fn update_brt(
        &self,
        id: i64,
        reserved_amount: &str,
        status: BrtStatus,
    ) -> Result<Brt, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({
                "reserved_amount": reserved_amount,
                "status": status.as_str(),
            });
            let resp = request!(self, put, &brt_endpoint(id))
                .json(&payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(read_error(resp).await);
            }
            let body: BrtResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !body.success {
                return Err(ApiError::Message("Failed to update BRT.".to_owned()));
            }
            Ok(body.data)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, reserved_amount, status);
            Err(server_side())
        }
    }

    /// `DELETE /brts/{id}`.
    ///
    /// # Errors
    ///
    /// `Unauthorized`, `Message`, or `Network`.
    pub async fn delete_brt(&self, id: i64) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = request!(self, delete, &brt_endpoint(id))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(read_error(resp).await);
            }
            let body: DeleteResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !body.success {
                return Err(ApiError::Message("Failed to delete BRT.".to_owned()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(server_side())
        }
    }

    /// `GET /statistics` returns the aggregate snapshot for the dashboard.
    ///
    /// # Errors
    ///
    /// `Unauthorized` or `Network`.
    pub async fn statistics(&self) -> Result<Statistics, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = request!(self, get, "/statistics")
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(read_error(resp).await);
            }
            let body: StatisticsResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(body.data)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(server_side())
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_success(body: AuthResponse) -> Result<AuthSuccess, ApiError> {
    if !body.success {
        return Err(ApiError::Message(
            body.message
                .unwrap_or_else(|| "Authentication failed.".to_owned()),
        ));
    }
    Ok(AuthSuccess {
        user: body.user,
        access_token: body.access_token,
        email_verified: body.email_verified.unwrap_or(false),
    })
}

#[cfg(not(feature = "hydrate"))]
fn server_side() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}
