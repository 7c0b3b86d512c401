//! Read-only view over the real-time notification feed.
//!
//! Purely presentational: the shell owns the live channel and the feed
//! state; this tab just renders whatever is there.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use leptos::prelude::*;

use crate::state::notifications::NotificationsState;

/// Clock portion (`HH:MM:SS`) of an ISO 8601 timestamp.
fn clock_time(timestamp: &str) -> &str {
    timestamp.get(11..19).unwrap_or(timestamp)
}

#[component]
pub fn NotificationFeed() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="notifications">
            <h2>"Real-time Notifications"</h2>
            <Show
                when=move || !notifications.get().items.is_empty()
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            <p>
                                "No notifications yet. They will appear here when BRTs are \
                                 created, updated, or deleted."
                            </p>
                        </div>
                    }
                }
            >
                <div class="notification-list">
                    {move || {
                        notifications
                            .get()
                            .items
                            .into_iter()
                            .map(|n| {
                                let time = clock_time(&n.timestamp).to_owned();
                                view! {
                                    <div class="notification-item">
                                        <div class="notification-header">
                                            <h4>{n.title}</h4>
                                            <span class="notification-time">{time}</span>
                                        </div>
                                        <p>{n.message}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
