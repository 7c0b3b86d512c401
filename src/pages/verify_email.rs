//! Deep-link email verification landing route.
//!
//! Extracts the `id/hash/expires/signature` tuple from the URL, makes one
//! unauthenticated verification call, and renders verifying → success|error.
//! Success redirects to the shell after a fixed delay with a one-time
//! marker; errors never auto-retry.

#[cfg(test)]
#[path = "verify_email_test.rs"]
mod verify_email_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api::ApiClient;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::ApiError;

/// Seconds the success screen stays up before redirecting.
#[cfg(feature = "hydrate")]
const REDIRECT_DELAY_SECS: u64 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum VerifyStatus {
    Verifying,
    Success,
    Error,
}

/// Require both link identifiers; expires/signature are forwarded as-is and
/// validated server-side.
#[cfg(any(test, feature = "hydrate"))]
fn link_params(
    id: Option<String>,
    hash: Option<String>,
) -> Result<(String, String), &'static str> {
    match (id, hash) {
        (Some(id), Some(hash)) if !id.is_empty() && !hash.is_empty() => Ok((id, hash)),
        _ => Err("Invalid verification link"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn error_display(error: &ApiError) -> String {
    match error {
        ApiError::Message(msg) => msg.clone(),
        _ => "Verification failed. The link may be expired.".to_owned(),
    }
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let api = expect_context::<RwSignal<ApiClient>>();
    let query = use_query_map();
    let status = RwSignal::new(VerifyStatus::Verifying);
    let message = RwSignal::new(String::new());
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        let params = query.get_untracked();
        match link_params(params.get("id"), params.get("hash")) {
            Err(msg) => {
                status.set(VerifyStatus::Error);
                message.set(msg.to_owned());
            }
            Ok((id, hash)) => {
                let expires = params.get("expires").unwrap_or_default();
                let signature = params.get("signature").unwrap_or_default();
                let client = api.get_untracked().anonymous();
                let navigate_home = navigate.clone();

                // Cancellable redirect: a slow success must not navigate a
                // page the user already left.
                let redirect_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
                let redirect_alive_task = redirect_alive.clone();
                on_cleanup(move || {
                    redirect_alive.store(false, std::sync::atomic::Ordering::Relaxed);
                });

                leptos::task::spawn_local(async move {
                    match client.verify_email(&id, &hash, &expires, &signature).await {
                        Ok(confirmation) => {
                            status.set(VerifyStatus::Success);
                            message.set(confirmation.unwrap_or_else(|| {
                                "Email verified successfully!".to_owned()
                            }));
                            gloo_timers::future::sleep(std::time::Duration::from_secs(
                                REDIRECT_DELAY_SECS,
                            ))
                            .await;
                            if redirect_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                                navigate_home("/?email_verified=true", NavigateOptions::default());
                            }
                        }
                        Err(e) => {
                            status.set(VerifyStatus::Error);
                            message.set(error_display(&e));
                        }
                    }
                });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, query);
    }

    let navigate_login = navigate.clone();
    view! {
        <div class="email-verification">
            <div class="verification-container">
                <h2>"Email Verification"</h2>

                <Show when=move || status.get() == VerifyStatus::Verifying>
                    <div class="verifying">
                        <div class="spinner"></div>
                        <p>"Verifying your email address..."</p>
                    </div>
                </Show>

                <Show when=move || status.get() == VerifyStatus::Success>
                    <div class="success">
                        <div class="success-icon">"✓"</div>
                        <p>{move || message.get()}</p>
                        <p>"Redirecting..."</p>
                    </div>
                </Show>

                <Show when=move || status.get() == VerifyStatus::Error>
                    <div class="error">
                        <div class="error-icon">"✗"</div>
                        <p>{move || message.get()}</p>
                        <button on:click={
                            let navigate_login = navigate_login.clone();
                            move |_| {
                                navigate_login("/", NavigateOptions::default());
                            }
                        }>"Go to Login"</button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
