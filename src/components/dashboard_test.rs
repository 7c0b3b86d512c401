use super::*;

fn day(date: &str, count: i64, total: &str) -> DailyStat {
    DailyStat {
        date: date.to_owned(),
        count,
        total_amount: total.to_owned(),
    }
}

// =============================================================
// Series preparation
// =============================================================

#[test]
fn chart_series_reverses_to_oldest_first() {
    let series = chart_series(&[
        day("2026-08-30", 3, "60.00"),
        day("2026-08-29", 1, "20.00"),
    ]);
    assert_eq!(series[0].label, "08/29");
    assert_eq!(series[1].label, "08/30");
    assert!((series[1].amount - 60.0).abs() < 1e-9);
}

#[test]
fn unparseable_amounts_chart_as_zero() {
    let series = chart_series(&[day("2026-08-30", 2, "n/a")]);
    assert!((series[0].amount).abs() < 1e-9);
    assert!((series[0].count - 2.0).abs() < 1e-9);
}

#[test]
fn short_date_formats_month_slash_day() {
    assert_eq!(short_date("2026-08-30"), "08/30");
    assert_eq!(short_date("bad"), "bad");
}

// =============================================================
// Derived average
// =============================================================

#[test]
fn average_divides_total_by_active_count() {
    assert_eq!(average_per_active("400.00", 4), Some("100.00".to_owned()));
    assert_eq!(average_per_active("100", 3), Some("33.33".to_owned()));
}

#[test]
fn average_is_absent_without_active_brts() {
    assert_eq!(average_per_active("400.00", 0), None);
    assert_eq!(average_per_active("400.00", -1), None);
}

#[test]
fn average_is_absent_when_total_does_not_parse() {
    assert_eq!(average_per_active("n/a", 4), None);
}

// =============================================================
// BLU formatting
// =============================================================

#[test]
fn format_blu_groups_thousands() {
    assert_eq!(format_blu("1234567.89"), "1,234,567.89");
    assert_eq!(format_blu("1000000"), "1,000,000");
    assert_eq!(format_blu("999"), "999");
}

#[test]
fn format_blu_keeps_sign_and_fraction() {
    assert_eq!(format_blu("-12345.5"), "-12,345.5");
    assert_eq!(format_blu("20.00"), "20.00");
}

#[test]
fn format_blu_passes_non_numeric_through() {
    assert_eq!(format_blu("n/a"), "n/a");
    assert_eq!(format_blu(""), "");
}
