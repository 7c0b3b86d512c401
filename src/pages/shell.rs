//! Main application shell: session restore, auth gating, tabs.
//!
//! ARCHITECTURE
//! ============
//! The shell owns the session lifecycle and the single live-channel handle.
//! It routes on the derived session phase: auth forms until a session
//! exists, the verification gate until the email is confirmed, then the
//! tabbed main content with the live channel armed.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use leptos::prelude::*;

use crate::app::SessionTeardown;
use crate::components::brt_form::BrtForm;
use crate::components::brt_list::BrtList;
use crate::components::dashboard::Dashboard;
use crate::components::login_form::LoginForm;
use crate::components::notifications::NotificationFeed;
use crate::components::register_form::RegisterForm;
use crate::components::verify_notice::VerifyNotice;
use crate::net::api::ApiClient;
use crate::net::live::LiveHandle;
#[cfg(feature = "hydrate")]
use crate::net::types::ApiError;
use crate::net::types::AuthSuccess;
use crate::state::notifications::NotificationsState;
use crate::state::session::{SessionPhase, SessionState};
use crate::state::ui::{ActiveTab, UiState};
use crate::util::storage;

/// Did the verification landing route send us back with its one-time marker?
#[cfg(any(test, feature = "hydrate"))]
fn has_verified_marker(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "email_verified=true")
}

/// Open the live channel if no healthy connection exists. The shell is the
/// only caller; the handle is stored in context so logout can release it.
#[cfg(feature = "hydrate")]
fn ensure_live(
    live: RwSignal<Option<LiveHandle>>,
    notifications: RwSignal<NotificationsState>,
) {
    if live
        .get_untracked()
        .as_ref()
        .is_some_and(LiveHandle::is_alive)
    {
        return;
    }
    let url = crate::util::config::resolve_live_url();
    live.set(Some(crate::net::live::connect(url, notifications)));
}

#[component]
pub fn ShellPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let api = expect_context::<RwSignal<ApiClient>>();
    let live = expect_context::<RwSignal<Option<LiveHandle>>>();
    let teardown = expect_context::<SessionTeardown>();

    // Consume the verification marker once, then strip it from the address
    // so reloads do not replay the banner.
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let search = window.location().search().unwrap_or_default();
            if has_verified_marker(&search) {
                session.update(|s| s.verified_banner = true);
                let path = window
                    .location()
                    .pathname()
                    .unwrap_or_else(|_| "/".to_owned());
                if let Ok(history) = window.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&path),
                    );
                }
            }
        }
    }

    // Restore a persisted session: token → /me → verification status.
    #[cfg(feature = "hydrate")]
    {
        match storage::load_token() {
            Some(token) => {
                api.set(api.get_untracked().with_token(token.clone()));
                session.update(|s| s.token = Some(token));
                let client = api.get_untracked();
                leptos::task::spawn_local(async move {
                    match client.me().await {
                        Ok(user) => {
                            session.update(|s| {
                                s.user = Some(user);
                                s.loading = false;
                            });
                            match client.verification_status().await {
                                Ok(verified) => {
                                    session.update(|s| s.email_verified = Some(verified));
                                    if verified {
                                        ensure_live(live, notifications);
                                    }
                                }
                                Err(ApiError::Unauthorized) => teardown.run(),
                                Err(_) => {
                                    leptos::logging::warn!("verification status check failed");
                                    session.update(|s| s.email_verified = Some(false));
                                }
                            }
                        }
                        Err(ApiError::Unauthorized) => teardown.run(),
                        Err(_) => {
                            leptos::logging::warn!("session restore failed");
                            session.update(|s| s.loading = false);
                        }
                    }
                });
            }
            None => session.update(|s| s.loading = false),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (notifications, live);
    }

    let on_login = Callback::new(move |success: AuthSuccess| {
        storage::save_token(&success.access_token);
        api.set(api.get_untracked().anonymous().with_token(success.access_token.clone()));
        let verified = success.email_verified;
        session.update(|s| s.establish(success));
        #[cfg(feature = "hydrate")]
        {
            if verified {
                ensure_live(live, notifications);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = verified;
        }
    });

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let client = api.get_untracked();
            leptos::task::spawn_local(async move {
                client.logout().await;
            });
        }
        teardown.run();
    };

    view! {
        {move || match session.get().phase() {
            SessionPhase::Loading | SessionPhase::CheckingVerification => {
                view! { <div class="loading-screen">"Loading..."</div> }.into_any()
            }
            SessionPhase::Unauthenticated => {
                view! {
                    <div class="auth-container">
                        <h1>"BRT Management System"</h1>
                        <div class="auth-forms">
                            <LoginForm on_login=on_login/>
                            <RegisterForm on_login=on_login/>
                        </div>
                    </div>
                }
                    .into_any()
            }
            SessionPhase::Unverified => {
                view! {
                    <div class="app">
                        <ShellHeader on_logout=Callback::new(on_logout)/>
                        <VerifyNotice/>
                    </div>
                }
                    .into_any()
            }
            SessionPhase::Ready => {
                view! {
                    <div class="app">
                        <ShellHeader on_logout=Callback::new(on_logout)/>
                        <VerifiedBanner/>
                        <TabBar/>
                        <main class="main-content">
                            {move || match ui.get().active_tab {
                                ActiveTab::Brts => view! { <BrtList/> }.into_any(),
                                ActiveTab::Create => {
                                    view! {
                                        <BrtForm on_success=Callback::new(move |()| {
                                            ui.update(|u| u.active_tab = ActiveTab::Brts);
                                        })/>
                                    }
                                        .into_any()
                                }
                                ActiveTab::Dashboard => view! { <Dashboard/> }.into_any(),
                                ActiveTab::Notifications => {
                                    view! { <NotificationFeed/> }.into_any()
                                }
                            }}
                        </main>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

/// App header with identity, verified badge, and logout.
#[component]
fn ShellHeader(on_logout: Callback<leptos::ev::MouseEvent>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let user_name = move || {
        session
            .get()
            .user
            .map(|u| u.name)
            .unwrap_or_default()
    };

    view! {
        <header class="app-header">
            <h1>"BRT Management System"</h1>
            <div class="user-info">
                <span>{move || format!("Welcome, {}", user_name())}</span>
                <Show when=move || session.get().email_verified == Some(true)>
                    <span class="verified-badge">"✓ Verified"</span>
                </Show>
                <button on:click=move |ev| on_logout.run(ev)>"Logout"</button>
            </div>
        </header>
    }
}

/// One-time confirmation after returning from the verification link.
#[component]
fn VerifiedBanner() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <Show when=move || session.get().verified_banner>
            <div class="verified-banner">
                <span>"Email verified successfully! You can now access all features."</span>
                <button on:click=move |_| {
                    session.update(|s| s.verified_banner = false);
                }>"Dismiss"</button>
            </div>
        </Show>
    }
}

/// Tab navigation; the notifications tab shows the live feed count.
#[component]
fn TabBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <nav class="nav-tabs">
            {ActiveTab::all()
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class:active=move || ui.get().active_tab == tab
                            on:click=move |_| ui.update(|u| u.active_tab = tab)
                        >
                            {move || {
                                if tab == ActiveTab::Notifications {
                                    format!(
                                        "{} ({})",
                                        tab.label(),
                                        notifications.get().count(),
                                    )
                                } else {
                                    tab.label().to_owned()
                                }
                            }}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
