//! BRT list with per-row inline editing and confirmed deletes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the full list on mount (no pagination). Mutations keep the server
//! authoritative: a successful update swaps in the returned record, a
//! successful delete removes the row locally without refetching.

#[cfg(test)]
#[path = "brt_list_test.rs"]
mod brt_list_test;

use leptos::prelude::*;

use crate::app::SessionTeardown;
use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::types::ApiError;
use crate::net::types::{Brt, BrtStatus};
use crate::state::brts::{EditDraft, remove_brt, replace_brt};

/// Date portion of an ISO 8601 timestamp for row display.
fn created_date(created_at: &str) -> &str {
    created_at.get(..10).unwrap_or(created_at)
}

/// The error banner renders independently of whether any rows exist; a
/// failed fetch over an empty list must still surface.
fn show_error_banner(loading: bool, error: Option<&str>) -> bool {
    !loading && error.is_some()
}

#[component]
pub fn BrtList() -> impl IntoView {
    let api = expect_context::<RwSignal<ApiClient>>();
    let teardown = expect_context::<SessionTeardown>();
    let brts = RwSignal::new(Vec::<Brt>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    // One row at a time: the editing row's id and its draft.
    let editing = RwSignal::new(None::<(i64, EditDraft)>);
    let confirm_delete = RwSignal::new(None::<i64>);

    #[cfg(feature = "hydrate")]
    {
        let client = api.get_untracked();
        leptos::task::spawn_local(async move {
            match client.list_brts().await {
                Ok(items) => brts.set(items),
                Err(ApiError::Unauthorized) => teardown.run(),
                Err(e) => {
                    leptos::logging::warn!("BRT list fetch failed");
                    error.set(Some(e.general_message()));
                }
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, teardown);
    }

    let on_save = move |id: i64| {
        let Some((_, draft)) = editing.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let client = api.get_untracked();
            leptos::task::spawn_local(async move {
                match client
                    .update_brt(id, &draft.reserved_amount, draft.status)
                    .await
                {
                    Ok(updated) => {
                        brts.update(|list| replace_brt(list, updated));
                        editing.set(None);
                        error.set(None);
                    }
                    Err(ApiError::Unauthorized) => teardown.run(),
                    Err(_) => error.set(Some("Failed to update BRT".to_owned())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, draft);
        }
    };

    let on_delete = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let client = api.get_untracked();
            leptos::task::spawn_local(async move {
                match client.delete_brt(id).await {
                    Ok(()) => {
                        brts.update(|list| remove_brt(list, id));
                        error.set(None);
                    }
                    Err(ApiError::Unauthorized) => teardown.run(),
                    Err(_) => error.set(Some("Failed to delete BRT".to_owned())),
                }
                confirm_delete.set(None);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            confirm_delete.set(None);
        }
    };

    let row = move |brt: Brt| {
        let id = brt.id;
        let is_editing = move || editing.get().is_some_and(|(eid, _)| eid == id);
        let brt_status = brt.status;
        let brt_amount = brt.reserved_amount.clone();
        let edit_source = brt.clone();
        view! {
            <tr>
                <td>{brt.brt_code.clone()}</td>
                <td>
                    <Show
                        when=is_editing
                        fallback={
                            let amount = brt_amount.clone();
                            move || format!("{amount} BLU")
                        }
                    >
                        <input
                            type="number"
                            min="1"
                            max="1000000"
                            prop:value=move || {
                                editing
                                    .get()
                                    .map(|(_, d)| d.reserved_amount)
                                    .unwrap_or_default()
                            }
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                editing.update(|e| {
                                    if let Some((_, draft)) = e {
                                        draft.reserved_amount = value;
                                    }
                                });
                            }
                        />
                    </Show>
                </td>
                <td>
                    <Show
                        when=is_editing
                        fallback=move || {
                            view! {
                                <span class=format!(
                                    "status {}",
                                    brt_status.as_str(),
                                )>{brt_status.as_str()}</span>
                            }
                        }
                    >
                        <select on:change=move |ev| {
                            if let Some(status) = BrtStatus::parse(&event_target_value(&ev)) {
                                editing.update(|e| {
                                    if let Some((_, draft)) = e {
                                        draft.status = status;
                                    }
                                });
                            }
                        }>
                            <option
                                value="active"
                                selected=move || {
                                    editing
                                        .get()
                                        .is_some_and(|(_, d)| d.status == BrtStatus::Active)
                                }
                            >
                                "Active"
                            </option>
                            <option
                                value="expired"
                                selected=move || {
                                    editing
                                        .get()
                                        .is_some_and(|(_, d)| d.status == BrtStatus::Expired)
                                }
                            >
                                "Expired"
                            </option>
                        </select>
                    </Show>
                </td>
                <td>{created_date(&brt.created_at).to_owned()}</td>
                <td>
                    <Show
                        when=is_editing
                        fallback=move || {
                            let edit_source = edit_source.clone();
                            view! {
                                <button
                                    class="btn-edit"
                                    on:click=move |_| {
                                        editing.set(Some((id, EditDraft::from_brt(&edit_source))));
                                    }
                                >
                                    "Edit"
                                </button>
                                <button
                                    class="btn-delete"
                                    on:click=move |_| confirm_delete.set(Some(id))
                                >
                                    "Delete"
                                </button>
                            }
                        }
                    >
                        <button class="btn-save" on:click=move |_| on_save(id)>
                            "Save"
                        </button>
                        <button class="btn-cancel" on:click=move |_| editing.set(None)>
                            "Cancel"
                        </button>
                    </Show>
                </td>
            </tr>
        }
    };

    view! {
        <Show
            when=move || !loading.get()
            fallback=move || view! { <div class="loading">"Loading BRTs..."</div> }
        >
            <Show when=move || show_error_banner(loading.get(), error.get().as_deref())>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show
                when=move || !brts.get().is_empty()
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            <h3>"No BRTs found"</h3>
                            <p>"Create your first BRT to get started!"</p>
                        </div>
                    }
                }
            >
                <div class="brt-list">
                    <h2>"My BRTs"</h2>
                    <table>
                        <thead>
                            <tr>
                                <th>"BRT Code"</th>
                                <th>"Reserved Amount (BLU)"</th>
                                <th>"Status"</th>
                                <th>"Created At"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || brts.get().into_iter().map(row).collect::<Vec<_>>()}
                        </tbody>
                    </table>
                </div>
            </Show>
            <Show when=move || confirm_delete.get().is_some()>
                <DeleteBrtDialog
                    on_cancel=Callback::new(move |()| confirm_delete.set(None))
                    on_confirm=Callback::new(move |()| {
                        if let Some(id) = confirm_delete.get_untracked() {
                            on_delete(id);
                        }
                    })
                />
            </Show>
        </Show>
    }
}

/// Confirmation step before an irreversible delete.
#[component]
fn DeleteBrtDialog(on_cancel: Callback<()>, on_confirm: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete BRT"</h2>
                <p class="dialog__danger">"Are you sure you want to delete this BRT?"</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
