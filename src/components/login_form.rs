//! Login form: email + password against `POST /login`.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::types::ApiError;
use crate::net::types::{AuthSuccess, FieldErrors, clear_field_error, field_error};

#[cfg(any(test, feature = "hydrate"))]
fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Login form. Invokes `on_login` with the established session on success;
/// all failures become local error state.
#[component]
pub fn LoginForm(on_login: Callback<AuthSuccess>) -> impl IntoView {
    let api = expect_context::<RwSignal<ApiClient>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let general = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        errors.set(FieldErrors::new());
        general.set(None);

        #[cfg(feature = "hydrate")]
        {
            let (email_value, password_value) =
                match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
                    Ok(values) => values,
                    Err(msg) => {
                        general.set(Some(msg.to_owned()));
                        return;
                    }
                };
            busy.set(true);
            let client = api.get_untracked().anonymous();
            leptos::task::spawn_local(async move {
                match client.login(&email_value, &password_value).await {
                    Ok(success) => on_login.run(success),
                    Err(ApiError::Validation(fields)) => errors.set(fields),
                    Err(e) => general.set(Some(e.general_message())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = api;
        }
    };

    view! {
        <div class="auth-form">
            <h2>"Login"</h2>
            <Show when=move || general.get().is_some()>
                <div class="error-message">{move || general.get().unwrap_or_default()}</div>
            </Show>

            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="login-email">"Email"</label>
                    <input
                        type="email"
                        id="login-email"
                        placeholder="your@email.com"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            errors.update(|e| clear_field_error(e, "email"));
                        }
                    />
                    {move || {
                        field_error(&errors.get(), "email")
                            .map(|msg| view! { <span class="error">{msg}</span> })
                    }}
                </div>

                <div class="form-group">
                    <label for="login-password">"Password"</label>
                    <input
                        type="password"
                        id="login-password"
                        placeholder="Your password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            errors.update(|e| clear_field_error(e, "password"));
                        }
                    />
                    {move || {
                        field_error(&errors.get(), "password")
                            .map(|msg| view! { <span class="error">{msg}</span> })
                    }}
                </div>

                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
