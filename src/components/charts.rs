//! Inline SVG line and bar charts for the dashboard time series.
//!
//! DESIGN
//! ======
//! The geometry is computed by pure helpers over a fixed view box so chart
//! math stays testable without a browser. No external chart library.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use leptos::prelude::*;

/// Fixed drawing surface; the SVG scales responsively via its view box.
pub const CHART_WIDTH: f64 = 600.0;
pub const CHART_HEIGHT: f64 = 260.0;
const PADDING: f64 = 24.0;

/// Map series values onto chart coordinates, left to right, baseline at the
/// bottom. An all-zero or empty series stays on the baseline.
fn scale_points(values: &[f64]) -> Vec<(f64, f64)> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let inner_w = CHART_WIDTH - 2.0 * PADDING;
    let inner_h = CHART_HEIGHT - 2.0 * PADDING;
    let step = if values.len() > 1 {
        inner_w / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = PADDING + step * i as f64;
            let y = if max > 0.0 {
                CHART_HEIGHT - PADDING - (v / max) * inner_h
            } else {
                CHART_HEIGHT - PADDING
            };
            (x, y)
        })
        .collect()
}

/// `points` attribute for an SVG polyline.
fn polyline_points(values: &[f64]) -> String {
    scale_points(values)
        .into_iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bar rectangles as `(x, y, width, height)` with a small gap between bars.
fn bar_rects(values: &[f64]) -> Vec<(f64, f64, f64, f64)> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let inner_w = CHART_WIDTH - 2.0 * PADDING;
    let inner_h = CHART_HEIGHT - 2.0 * PADDING;
    let slot = inner_w / values.len() as f64;
    let bar_w = (slot * 0.7).max(1.0);
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let h = if max > 0.0 { (v / max) * inner_h } else { 0.0 };
            let x = PADDING + slot * i as f64 + (slot - bar_w) / 2.0;
            let y = CHART_HEIGHT - PADDING - h;
            (x, y, bar_w, h)
        })
        .collect()
}

fn view_box() -> String {
    format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
}

/// Time-series line chart (one point per day).
#[component]
pub fn LineChart(values: Vec<f64>, #[prop(into)] stroke: String) -> impl IntoView {
    let points = polyline_points(&values);
    view! {
        <svg class="chart" viewBox=view_box() preserveAspectRatio="none">
            <line
                x1=PADDING
                y1=CHART_HEIGHT - PADDING
                x2=CHART_WIDTH - PADDING
                y2=CHART_HEIGHT - PADDING
                class="chart__axis"
            />
            <polyline points=points fill="none" stroke=stroke stroke-width="2"/>
        </svg>
    }
}

/// Time-series bar chart (one bar per day).
#[component]
pub fn BarChart(values: Vec<f64>, #[prop(into)] fill: String) -> impl IntoView {
    let rects = bar_rects(&values);
    view! {
        <svg class="chart" viewBox=view_box() preserveAspectRatio="none">
            <line
                x1=PADDING
                y1=CHART_HEIGHT - PADDING
                x2=CHART_WIDTH - PADDING
                y2=CHART_HEIGHT - PADDING
                class="chart__axis"
            />
            {rects
                .into_iter()
                .map(|(x, y, w, h)| {
                    view! { <rect x=x y=y width=w height=h fill=fill.clone()/> }
                })
                .collect::<Vec<_>>()}
        </svg>
    }
}
