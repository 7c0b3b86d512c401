//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render tab content and forms while reading/writing shared
//! state from Leptos context providers. Route orchestration stays in
//! `pages`.

pub mod brt_form;
pub mod brt_list;
pub mod charts;
pub mod dashboard;
pub mod login_form;
pub mod notifications;
pub mod register_form;
pub mod verify_notice;
