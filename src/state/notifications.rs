//! In-memory feed of real-time BRT notifications.
//!
//! Ephemeral and client-only: capped at the most recent entries,
//! newest-first by arrival, never persisted.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// Most entries the feed keeps.
pub const MAX_NOTIFICATIONS: usize = 10;

/// One feed entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    /// Generation-time-ordered id (milliseconds since epoch at arrival).
    pub id: u64,
    pub title: String,
    pub message: String,
    /// ISO 8601 arrival time.
    pub timestamp: String,
}

/// Shared feed state, provided by the shell and consumed read-only by the
/// notifications tab.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    /// Newest-first by arrival.
    pub items: Vec<Notification>,
}

impl NotificationsState {
    /// Prepend an entry and truncate to [`MAX_NOTIFICATIONS`].
    pub fn push(&mut self, notification: Notification) {
        self.items.insert(0, notification);
        self.items.truncate(MAX_NOTIFICATIONS);
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }
}
