//! Broadcast-channel client for real-time BRT notifications.
//!
//! Subscribes to the `brts` channel over a pusher-shaped WebSocket and turns
//! `brt.created` / `brt.updated` / `brt.deleted` events into feed entries.
//! Best-effort only: there is no replay or catch-up, so events missed while
//! disconnected are simply lost.
//!
//! All socket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Parse/transport failures are logged and absorbed; the connection loop
//! recovers through capped-backoff reconnects while the handle stays alive.

#[cfg(test)]
#[path = "live_test.rs"]
mod live_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Deserialize;

#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};

#[cfg(feature = "hydrate")]
use crate::state::notifications::{Notification, NotificationsState};

/// Name of the broadcast channel carrying BRT events.
pub const CHANNEL: &str = "brts";

/// Owner handle for the single live connection.
///
/// The shell is the only component that holds one; `disconnect` is an
/// idempotent release that the connection loop observes on its next wakeup.
#[derive(Clone, Debug)]
pub struct LiveHandle {
    alive: Arc<AtomicBool>,
}

impl LiveHandle {
    fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Release the connection. Safe to call repeatedly.
    pub fn disconnect(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

/// A decoded BRT broadcast event.
#[derive(Clone, Debug, PartialEq)]
pub enum BrtEvent {
    Created {
        code: String,
        amount: String,
        user_name: String,
    },
    Updated {
        code: String,
    },
    Deleted {
        code: String,
    },
}

impl BrtEvent {
    /// Feed entry title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Created { .. } => "New BRT Created",
            Self::Updated { .. } => "BRT Updated",
            Self::Deleted { .. } => "BRT Deleted",
        }
    }

    /// Feed entry body.
    pub fn message(&self) -> String {
        match self {
            Self::Created {
                code,
                amount,
                user_name,
            } => format!("BRT {code} with {amount} BLU created by {user_name}"),
            Self::Updated { code } => format!("BRT {code} updated"),
            Self::Deleted { code } => format!("BRT {code} deleted"),
        }
    }
}

/// Outer message shape on the channel socket.
#[derive(Debug, Deserialize)]
struct ChannelMessage {
    event: String,
    #[serde(default)]
    channel: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    #[serde(default)]
    brt_code: String,
    #[serde(default)]
    reserved_amount: serde_json::Value,
    #[serde(default)]
    user: Option<EventUser>,
}

#[derive(Debug, Deserialize)]
struct EventUser {
    #[serde(default)]
    name: String,
}

/// Subscription message sent after the socket opens.
pub fn subscribe_message(channel: &str) -> String {
    serde_json::json!({
        "event": "pusher:subscribe",
        "data": { "channel": channel },
    })
    .to_string()
}

/// Decode one socket text message into a [`BrtEvent`].
///
/// Returns `None` for protocol chatter (connection/subscription events),
/// messages for other channels, and anything unparseable. The `data` field
/// is accepted either as an inline object or as a JSON-encoded string, since
/// pusher-style transports double-encode payloads.
pub fn parse_event(text: &str) -> Option<BrtEvent> {
    let msg: ChannelMessage = serde_json::from_str(text).ok()?;
    if msg.channel.as_deref().is_some_and(|c| c != CHANNEL) {
        return None;
    }
    let payload = decode_payload(&msg.data)?;
    match msg.event.as_str() {
        "brt.created" => Some(BrtEvent::Created {
            code: payload.brt_code,
            amount: format_amount(&payload.reserved_amount),
            user_name: payload
                .user
                .map(|u| u.name)
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "unknown".to_owned()),
        }),
        "brt.updated" => Some(BrtEvent::Updated {
            code: payload.brt_code,
        }),
        "brt.deleted" => Some(BrtEvent::Deleted {
            code: payload.brt_code,
        }),
        _ => None,
    }
}

fn decode_payload(data: &serde_json::Value) -> Option<EventPayload> {
    match data {
        serde_json::Value::String(inner) => serde_json::from_str(inner).ok(),
        other => serde_json::from_value(other.clone()).ok(),
    }
}

/// Render an event amount for display: numbers print as-is (`50`, `50.5`),
/// decimal strings pass through unchanged.
fn format_amount(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        _ => "?".to_owned(),
    }
}

/// Open the live connection and feed decoded events into the notification
/// state. Returns the owner handle; dropping it does not close the socket,
/// only `disconnect` does.
#[cfg(feature = "hydrate")]
pub fn connect(url: String, notifications: RwSignal<NotificationsState>) -> LiveHandle {
    let handle = LiveHandle::new();
    let alive = handle.alive.clone();
    leptos::task::spawn_local(connection_loop(url, alive, notifications));
    handle
}

#[cfg(feature = "hydrate")]
async fn connection_loop(
    url: String,
    alive: Arc<AtomicBool>,
    notifications: RwSignal<NotificationsState>,
) {
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    while alive.load(Ordering::Relaxed) {
        match run_socket(&url, &alive, notifications).await {
            Ok(()) => {
                leptos::logging::log!("live channel closed");
                backoff_ms = 1000;
            }
            Err(e) => {
                leptos::logging::warn!("live channel error: {e}");
            }
        }
        if !alive.load(Ordering::Relaxed) {
            break;
        }
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Run one socket session until it closes or the handle is released.
#[cfg(feature = "hydrate")]
async fn run_socket(
    url: &str,
    alive: &Arc<AtomicBool>,
    notifications: RwSignal<NotificationsState>,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    ws_write
        .send(Message::Text(subscribe_message(CHANNEL)))
        .await
        .map_err(|e| e.to_string())?;

    while let Some(msg) = ws_read.next().await {
        if !alive.load(Ordering::Relaxed) {
            break;
        }
        match msg {
            Ok(Message::Text(text)) => {
                if let Some(event) = parse_event(&text) {
                    push_event(notifications, &event);
                }
            }
            Ok(Message::Bytes(_)) => {}
            Err(e) => {
                return Err(e.to_string());
            }
        }
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn push_event(notifications: RwSignal<NotificationsState>, event: &BrtEvent) {
    let id = js_sys::Date::now() as u64;
    let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
    notifications.update(|state| {
        state.push(Notification {
            id,
            title: event.title().to_owned(),
            message: event.message(),
            timestamp,
        });
    });
}
