//! Networking modules for REST and the real-time broadcast channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues session-scoped REST calls, `live` manages the broadcast
//! channel socket, and `types` defines the backend envelope schema.

pub mod api;
pub mod live;
pub mod types;
