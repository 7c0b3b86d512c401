use super::*;

#[test]
fn created_date_takes_the_date_portion() {
    assert_eq!(created_date("2026-08-30T10:15:00Z"), "2026-08-30");
}

#[test]
fn created_date_falls_back_to_raw_value() {
    assert_eq!(created_date("today"), "today");
    assert_eq!(created_date(""), "");
}

#[test]
fn fetch_errors_surface_even_when_the_list_is_empty() {
    assert!(show_error_banner(false, Some("Failed to load BRTs")));
}

#[test]
fn error_banner_waits_for_loading_and_an_error() {
    assert!(!show_error_banner(true, Some("Failed to load BRTs")));
    assert!(!show_error_banner(false, None));
}
