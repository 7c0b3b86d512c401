//! Analytics dashboard: summary cards, daily trend charts, derived average.
//!
//! SYSTEM CONTEXT
//! ==============
//! Polls `/statistics` every 30 seconds while mounted on an alive-flag loop
//! cancelled via `on_cleanup`. A failed poll keeps the previous snapshot and
//! waits for the next tick; no backoff or retry.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::app::SessionTeardown;
use crate::components::charts::{BarChart, LineChart};
use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::types::ApiError;
use crate::net::types::{DailyStat, Statistics};

/// Poll cadence; generous relative to expected request latency, so
/// overlapping requests are not a concern.
#[cfg(feature = "hydrate")]
const POLL_INTERVAL_SECS: u64 = 30;

/// One charted day after parsing and reordering.
#[derive(Clone, Debug, PartialEq)]
struct DayPoint {
    label: String,
    count: f64,
    amount: f64,
}

/// Turn the wire series (newest day first) into oldest-first chart points.
/// Unparseable amounts chart as zero rather than dropping the day.
#[allow(clippy::cast_precision_loss)]
fn chart_series(daily: &[DailyStat]) -> Vec<DayPoint> {
    let mut points: Vec<DayPoint> = daily
        .iter()
        .map(|day| DayPoint {
            label: short_date(&day.date),
            count: day.count as f64,
            amount: day.total_amount.parse().unwrap_or(0.0),
        })
        .collect();
    points.reverse();
    points
}

/// `MM/DD` from an ISO date, falling back to the raw value.
fn short_date(date: &str) -> String {
    match (date.get(5..7), date.get(8..10)) {
        (Some(month), Some(day)) => format!("{month}/{day}"),
        _ => date.to_owned(),
    }
}

/// Average reserved BLU per active BRT, two decimals. `None` when there are
/// no active BRTs or the total does not parse; never divides by zero.
fn average_per_active(total_reserved: &str, active: i64) -> Option<String> {
    if active <= 0 {
        return None;
    }
    let total: f64 = total_reserved.trim().parse().ok()?;
    #[allow(clippy::cast_precision_loss)]
    Some(format!("{:.2}", total / active as f64))
}

/// Group the integer part of a decimal string with thousands separators
/// (`"1234567.89"` → `"1,234,567.89"`).
fn format_blu(amount: &str) -> String {
    let amount = amount.trim();
    let (int_part, frac_part) = match amount.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (amount, None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    if !digits.chars().all(|c| c.is_ascii_digit()) || digits.is_empty() {
        return amount.to_owned();
    }
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let api = expect_context::<RwSignal<ApiClient>>();
    let teardown = expect_context::<SessionTeardown>();
    let stats = RwSignal::new(None::<Statistics>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let fetch = move || {
            let client = api.get_untracked();
            leptos::task::spawn_local(async move {
                match client.statistics().await {
                    Ok(snapshot) => stats.set(Some(snapshot)),
                    Err(ApiError::Unauthorized) => teardown.run(),
                    Err(_) => leptos::logging::warn!("statistics poll failed"),
                }
                loading.set(false);
            });
        };
        fetch();

        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(POLL_INTERVAL_SECS))
                    .await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                fetch();
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, teardown);
    }

    view! {
        <Show
            when=move || !loading.get()
            fallback=move || view! { <div class="loading">"Loading statistics..."</div> }
        >
            <Show
                when=move || stats.get().is_some()
                fallback=move || view! { <div class="error">"Failed to load statistics"</div> }
            >
                {move || stats.get().map(render_dashboard)}
            </Show>
        </Show>
    }
}

fn render_dashboard(stats: Statistics) -> impl IntoView {
    let series = chart_series(&stats.daily_stats);
    let counts: Vec<f64> = series.iter().map(|p| p.count).collect();
    let amounts: Vec<f64> = series.iter().map(|p| p.amount).collect();
    let average = average_per_active(&stats.total_reserved_amount, stats.active_brts);
    let total_display = format_blu(&stats.total_reserved_amount);

    view! {
        <div class="dashboard">
            <h2>"BRT Analytics Dashboard"</h2>

            <div class="stats-grid">
                <div class="stat-card">
                    <h3>"Total BRTs"</h3>
                    <div class="stat-value">{stats.total_brts}</div>
                </div>
                <div class="stat-card">
                    <h3>"Active BRTs"</h3>
                    <div class="stat-value active">{stats.active_brts}</div>
                </div>
                <div class="stat-card">
                    <h3>"Expired BRTs"</h3>
                    <div class="stat-value expired">{stats.expired_brts}</div>
                </div>
                <div class="stat-card">
                    <h3>"Total Reserved BLU"</h3>
                    <div class="stat-value">{format!("{total_display} BLU")}</div>
                </div>
            </div>

            <div class="charts-section">
                <div class="chart-container">
                    <h3>"Daily BRT Creation Trend"</h3>
                    <LineChart values=counts stroke="#8884d8"/>
                    <div class="chart-labels">
                        {series
                            .iter()
                            .map(|p| view! { <span>{p.label.clone()}</span> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="chart-container">
                    <h3>"Daily Reserved Amount Trend"</h3>
                    <BarChart values=amounts fill="#82ca9d"/>
                    <div class="chart-labels">
                        {series
                            .iter()
                            .map(|p| view! { <span>{p.label.clone()}</span> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>

            <div class="summary-section">
                <h3>"Summary"</h3>
                <p>
                    "The BRT system currently has "
                    <strong>{stats.total_brts}</strong>
                    " total tickets, with "
                    <strong>{stats.active_brts}</strong>
                    " active and "
                    <strong>{stats.expired_brts}</strong>
                    " expired."
                </p>
                <p>
                    "Total reserved amount: "
                    <strong>{format!("{total_display} BLU")}</strong>
                </p>
                {average
                    .map(|avg| {
                        view! {
                            <p>
                                "Average reserved amount per active BRT: "
                                <strong>{format!("{avg} BLU")}</strong>
                            </p>
                        }
                    })}
            </div>
        </div>
    }
}
