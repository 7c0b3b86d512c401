//! Endpoint resolution for the REST base path and the live channel socket.
//!
//! Overrides come from compile-time environment variables so deployments can
//! point the WASM bundle at a different backend without code changes.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// REST base path when `BRT_API_BASE` is unset.
pub const DEFAULT_API_BASE: &str = "/api";

/// Resolve the REST base path.
pub fn api_base() -> String {
    normalize_base(option_env!("BRT_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

/// Trim trailing slashes so joining with `/path` segments stays clean.
fn normalize_base(base: &str) -> String {
    base.trim_end_matches('/').to_owned()
}

/// Derive the live socket URL from the page location: `wss` on HTTPS pages,
/// `ws` otherwise, same host, `/ws` path.
pub fn live_socket_url(location_href: &str, host: &str) -> String {
    let proto = if location_href.starts_with("https") {
        "wss"
    } else {
        "ws"
    };
    format!("{proto}://{host}/ws")
}

/// Resolve the live socket URL in the browser, honoring `BRT_WS_URL`.
#[cfg(feature = "hydrate")]
pub fn resolve_live_url() -> String {
    if let Some(url) = option_env!("BRT_WS_URL") {
        return url.to_owned();
    }
    let href = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:1111".to_owned());
    live_socket_url(&href, &host)
}
