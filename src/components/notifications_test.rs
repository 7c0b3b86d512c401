use super::*;

#[test]
fn clock_time_takes_the_time_portion() {
    assert_eq!(clock_time("2026-08-30T10:15:42.123Z"), "10:15:42");
}

#[test]
fn clock_time_falls_back_to_raw_value() {
    assert_eq!(clock_time("just now"), "just now");
}
