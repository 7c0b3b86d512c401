//! Routed pages.
//!
//! DESIGN
//! ======
//! `shell` is the whole authenticated application behind `/`; `verify_email`
//! is the unauthenticated landing route for emailed verification links.

pub mod shell;
pub mod verify_email;
