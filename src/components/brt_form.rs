//! BRT creation form with preset amount shortcuts.
//!
//! Bounds are checked client-side before submission and re-validated by the
//! server; server field errors render under the input.

#[cfg(test)]
#[path = "brt_form_test.rs"]
mod brt_form_test;

use leptos::prelude::*;

use crate::app::SessionTeardown;
use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::types::ApiError;
use crate::net::types::{FieldErrors, clear_field_error, field_error};
use crate::state::brts::validate_reserved_amount;

/// Fixed quick-select denominations.
const PRESETS: [(&str, u32); 3] = [("BRT ONE", 20), ("BRT ALPINE", 50), ("BRT TWO", 100)];

/// Seconds the creation confirmation stays up before the shell switches
/// back to the list tab.
#[cfg(any(test, feature = "hydrate"))]
const SUCCESS_DELAY_SECS: u64 = 2;

fn success_message(code: &str) -> String {
    format!("BRT created successfully! Code: {code}")
}

/// Creation form. `on_success` fires after the server confirms, so the shell
/// can switch back to the list tab.
#[component]
pub fn BrtForm(on_success: Callback<()>) -> impl IntoView {
    let api = expect_context::<RwSignal<ApiClient>>();
    let teardown = expect_context::<SessionTeardown>();
    let amount = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let general = RwSignal::new(None::<String>);
    let created_code = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        errors.set(FieldErrors::new());
        general.set(None);
        created_code.set(None);

        let amount_value = amount.get_untracked();
        if let Err(msg) = validate_reserved_amount(&amount_value) {
            general.set(Some(msg));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            let client = api.get_untracked();
            leptos::task::spawn_local(async move {
                match client.create_brt(amount_value.trim()).await {
                    Ok(brt) => {
                        created_code.set(Some(brt.brt_code));
                        amount.set(String::new());
                        busy.set(false);
                        // The assigned code must be readable before the
                        // shell unmounts the form for the list tab.
                        gloo_timers::future::sleep(std::time::Duration::from_secs(
                            SUCCESS_DELAY_SECS,
                        ))
                        .await;
                        created_code.set(None);
                        on_success.run(());
                        return;
                    }
                    Err(ApiError::Unauthorized) => teardown.run(),
                    Err(ApiError::Validation(fields)) => errors.set(fields),
                    Err(_) => {
                        general.set(Some("Failed to create BRT. Please try again.".to_owned()));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, teardown, amount_value);
        }
    };

    view! {
        <div class="brt-form">
            <h2>"Create New BRT"</h2>

            <div class="preset-buttons">
                <h3>"Quick Select:"</h3>
                {PRESETS
                    .into_iter()
                    .map(|(label, preset)| {
                        view! {
                            <button
                                class="preset-btn"
                                on:click=move |_| {
                                    amount.set(preset.to_string());
                                    errors.set(FieldErrors::new());
                                    general.set(None);
                                }
                            >
                                {format!("{label} - {preset} BLU")}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show when=move || general.get().is_some()>
                <div class="error-message">{move || general.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || created_code.get().is_some()>
                <div class="success-message">
                    {move || success_message(&created_code.get().unwrap_or_default())}
                </div>
            </Show>

            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="reserved_amount">"Reserved Amount (BLU)"</label>
                    <input
                        type="number"
                        id="reserved_amount"
                        min="1"
                        max="1000000"
                        step="0.01"
                        placeholder="Enter amount of BLU to reserve"
                        prop:value=move || amount.get()
                        on:input=move |ev| {
                            amount.set(event_target_value(&ev));
                            errors.update(|e| clear_field_error(e, "reserved_amount"));
                        }
                    />
                    {move || {
                        field_error(&errors.get(), "reserved_amount")
                            .map(|msg| view! { <span class="error">{msg}</span> })
                    }}
                </div>

                <div class="form-info">
                    <p>
                        <strong>"Note:"</strong>
                        " Each BRT represents a reserved right to acquire BLU at a future date."
                    </p>
                    <p>"Minimum: 1 BLU | Maximum: 1,000,000 BLU"</p>
                </div>

                <button type="submit" class="submit-btn" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating BRT..." } else { "Create BRT" }}
                </button>
            </form>
        </div>
    }
}
