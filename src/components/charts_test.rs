use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Point scaling
// =============================================================

#[test]
fn empty_series_has_no_points() {
    assert!(scale_points(&[]).is_empty());
    assert!(bar_rects(&[]).is_empty());
    assert_eq!(polyline_points(&[]), "");
}

#[test]
fn single_point_sits_at_left_padding() {
    let points = scale_points(&[5.0]);
    assert_eq!(points.len(), 1);
    assert!(close(points[0].0, PADDING));
    // The single value is the max, so it draws at the top.
    assert!(close(points[0].1, PADDING));
}

#[test]
fn max_value_reaches_the_top_and_zero_stays_on_the_baseline() {
    let points = scale_points(&[0.0, 10.0]);
    assert!(close(points[0].1, CHART_HEIGHT - PADDING));
    assert!(close(points[1].1, PADDING));
}

#[test]
fn points_spread_left_to_right() {
    let points = scale_points(&[1.0, 2.0, 3.0]);
    assert!(close(points[0].0, PADDING));
    assert!(close(points[2].0, CHART_WIDTH - PADDING));
    assert!(points[0].0 < points[1].0 && points[1].0 < points[2].0);
}

#[test]
fn all_zero_series_stays_on_the_baseline() {
    for (_, y) in scale_points(&[0.0, 0.0, 0.0]) {
        assert!(close(y, CHART_HEIGHT - PADDING));
    }
}

#[test]
fn polyline_points_formats_pairs() {
    let attr = polyline_points(&[0.0, 10.0]);
    assert_eq!(attr, "24.0,236.0 576.0,24.0");
}

// =============================================================
// Bar geometry
// =============================================================

#[test]
fn bars_share_the_baseline_and_scale_to_max() {
    let rects = bar_rects(&[2.0, 1.0]);
    let (_, y0, _, h0) = rects[0];
    let (_, y1, _, h1) = rects[1];
    assert!(close(y0 + h0, CHART_HEIGHT - PADDING));
    assert!(close(y1 + h1, CHART_HEIGHT - PADDING));
    assert!(close(h0, 2.0 * h1));
}

#[test]
fn bars_keep_a_gap_within_their_slot() {
    let rects = bar_rects(&[1.0, 1.0, 1.0]);
    let slot = (CHART_WIDTH - 2.0 * PADDING) / 3.0;
    for (i, (x, _, w, _)) in rects.iter().enumerate() {
        assert!(close(*w, slot * 0.7));
        // Centered in its slot.
        let slot_start = PADDING + slot * i as f64;
        assert!(close(*x, slot_start + (slot - w) / 2.0));
    }
}

#[test]
fn zero_bars_have_zero_height() {
    let rects = bar_rects(&[0.0, 0.0]);
    for (_, _, _, h) in rects {
        assert!(close(h, 0.0));
    }
}
