//! Gate screen shown while the session's email is unverified.
//!
//! Offers a resend action (disabled while the request is in flight, outcome
//! shown inline) and a manual reload for users who just clicked their link.

use leptos::prelude::*;

use crate::app::SessionTeardown;
use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::types::ApiError;
use crate::state::session::SessionState;

#[component]
pub fn VerifyNotice() -> impl IntoView {
    let api = expect_context::<RwSignal<ApiClient>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let teardown = expect_context::<SessionTeardown>();

    let email = move || {
        session
            .get()
            .user
            .map(|u| u.email)
            .unwrap_or_default()
    };

    let on_resend = move |_| {
        if session.get_untracked().resending_email {
            return;
        }
        session.update(|s| {
            s.resending_email = true;
            s.resend_message = None;
        });

        #[cfg(feature = "hydrate")]
        {
            let client = api.get_untracked();
            let address = email();
            leptos::task::spawn_local(async move {
                let outcome = match client.resend_verification(&address).await {
                    Ok(message) => message.unwrap_or_else(|| {
                        "Verification email sent! Please check your inbox.".to_owned()
                    }),
                    Err(ApiError::Unauthorized) => {
                        teardown.run();
                        return;
                    }
                    Err(e) => e.general_message(),
                };
                session.update(|s| {
                    s.resending_email = false;
                    s.resend_message = Some(outcome);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, teardown);
        }
    };

    let on_reload = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        }
    };

    view! {
        <div class="email-verification-notice">
            <h2>"Email Verification Required"</h2>
            <p>
                "Please verify your email address to access all features. "
                "We've sent a verification link to "
                <strong>{email}</strong>
                "."
            </p>
            <Show when=move || session.get().resend_message.is_some()>
                <p class="resend-message">
                    {move || session.get().resend_message.unwrap_or_default()}
                </p>
            </Show>
            <button
                class="resend-btn"
                disabled=move || session.get().resending_email
                on:click=on_resend
            >
                {move || {
                    if session.get().resending_email {
                        "Sending..."
                    } else {
                        "Resend Verification Email"
                    }
                }}
            </button>
            <button class="refresh-btn" on:click=on_reload>
                "I've Verified My Email"
            </button>
        </div>
    }
}
