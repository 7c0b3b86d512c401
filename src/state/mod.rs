//! Shared application state provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! `session` drives auth gating, `brts` holds list mutation helpers,
//! `notifications` is the capped real-time feed, and `ui` is tab chrome.
//! State structs are plain data; reactivity comes from wrapping them in
//! `RwSignal` at the context provider.

pub mod brts;
pub mod notifications;
pub mod session;
pub mod ui;
