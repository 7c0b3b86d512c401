use super::*;

#[test]
fn normalize_base_trims_trailing_slashes() {
    assert_eq!(normalize_base("/api/"), "/api");
    assert_eq!(normalize_base("https://example.com/api//"), "https://example.com/api");
    assert_eq!(normalize_base("/api"), "/api");
}

#[test]
fn live_socket_url_matches_page_scheme() {
    assert_eq!(
        live_socket_url("http://localhost:1111/", "localhost:1111"),
        "ws://localhost:1111/ws"
    );
    assert_eq!(
        live_socket_url("https://brt.example.com/", "brt.example.com"),
        "wss://brt.example.com/ws"
    );
}
