//! Registration form against `POST /register`.
//!
//! A successful registration enters the session immediately with an
//! unverified email, so the shell lands on the verification notice.

#[cfg(test)]
#[path = "register_form_test.rs"]
mod register_form_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::types::ApiError;
use crate::net::types::{AuthSuccess, FieldErrors, clear_field_error, field_error};

/// Fields the backend expects for registration.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, Default, PartialEq)]
struct RegisterFields {
    name: String,
    email: String,
    password: String,
    password_confirmation: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn validate_register_fields(
    name: &str,
    email: &str,
    password: &str,
    password_confirmation: &str,
) -> Result<RegisterFields, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in all fields.");
    }
    if password != password_confirmation {
        return Err("Passwords do not match.");
    }
    Ok(RegisterFields {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        password_confirmation: password_confirmation.to_owned(),
    })
}

/// Registration form with per-field server error display.
#[component]
pub fn RegisterForm(on_login: Callback<AuthSuccess>) -> impl IntoView {
    let api = expect_context::<RwSignal<ApiClient>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirmation = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let general = RwSignal::new(None::<String>);
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        errors.set(FieldErrors::new());
        general.set(None);
        message.set(None);

        #[cfg(feature = "hydrate")]
        {
            let fields = match validate_register_fields(
                &name.get_untracked(),
                &email.get_untracked(),
                &password.get_untracked(),
                &password_confirmation.get_untracked(),
            ) {
                Ok(fields) => fields,
                Err(msg) => {
                    general.set(Some(msg.to_owned()));
                    return;
                }
            };
            busy.set(true);
            let client = api.get_untracked().anonymous();
            leptos::task::spawn_local(async move {
                match client
                    .register(
                        &fields.name,
                        &fields.email,
                        &fields.password,
                        &fields.password_confirmation,
                    )
                    .await
                {
                    Ok(success) => {
                        message.set(Some(
                            "Registration successful! Please check your email for verification."
                                .to_owned(),
                        ));
                        on_login.run(success);
                    }
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

    let input_row = move |field: &'static str,
                          label: &'static str,
                          kind: &'static str,
                          placeholder: &'static str,
                          value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label for=format!("register-{field}")>{label}</label>
                <input
                    type=kind
                    id=format!("register-{field}")
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        value.set(event_target_value(&ev));
                        errors.update(|e| clear_field_error(e, field));
                    }
                />
                {move || {
                    field_error(&errors.get(), field)
                        .map(|msg| view! { <span class="error">{msg}</span> })
                }}
            </div>
        }
    };

    view! {
        <div class="auth-form">
            <h2>"Register"</h2>
            <Show when=move || general.get().is_some()>
                <div class="error-message">{move || general.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || message.get().is_some()>
                <div class="success-message">{move || message.get().unwrap_or_default()}</div>
            </Show>

            <form on:submit=on_submit>
                {input_row("name", "Name", "text", "Your name", name)}
                {input_row("email", "Email", "email", "your@email.com", email)}
                {input_row("password", "Password", "password", "Min 8 characters", password)}
                {input_row(
                    "password_confirmation",
                    "Confirm Password",
                    "password",
                    "Confirm your password",
                    password_confirmation,
                )}

                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Registering..." } else { "Register" }}
                </button>
            </form>
        </div>
    }
}
