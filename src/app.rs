//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::ApiClient;
use crate::net::live::LiveHandle;
use crate::pages::{shell::ShellPage, verify_email::VerifyEmailPage};
use crate::state::notifications::NotificationsState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::config;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Everything a forced logout has to reset.
///
/// Any request path can observe a 401, so the reset lives in one place and
/// travels through context rather than being rebuilt per component.
#[derive(Clone, Copy)]
pub struct SessionTeardown {
    session: RwSignal<SessionState>,
    api: RwSignal<ApiClient>,
    live: RwSignal<Option<LiveHandle>>,
}

impl SessionTeardown {
    pub fn new(
        session: RwSignal<SessionState>,
        api: RwSignal<ApiClient>,
        live: RwSignal<Option<LiveHandle>>,
    ) -> Self {
        Self { session, api, live }
    }

    /// Drop the stored token, close the live channel, and return the client
    /// and session to their signed-out states.
    pub fn run(self) {
        crate::util::storage::clear_token();
        if let Some(handle) = self.live.get_untracked() {
            handle.disconnect();
        }
        self.live.set(None);
        self.api.set(self.api.get_untracked().anonymous());
        self.session.update(SessionState::teardown);
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());
    let notifications = RwSignal::new(NotificationsState::default());
    let api = RwSignal::new(ApiClient::new(config::api_base()));
    let live = RwSignal::new(None::<LiveHandle>);

    provide_context(session);
    provide_context(ui);
    provide_context(notifications);
    provide_context(api);
    provide_context(live);
    provide_context(SessionTeardown::new(session, api, live));

    view! {
        <Stylesheet id="leptos" href="/pkg/brt-client.css"/>
        <Title text="BRT Management System"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ShellPage/>
                <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
            </Routes>
        </Router>
    }
}
