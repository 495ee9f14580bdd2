//! Inline SVG charts for the analytics snapshot.
//!
//! DESIGN
//! ======
//! The snapshot is small (at most 24 hourly buckets and a few weeks of daily
//! points), so both charts are plain SVG computed from pure geometry helpers.
//! Hover detail rides on `<title>` elements rather than a tooltip layer.

#[cfg(test)]
#[path = "usage_charts_test.rs"]
mod usage_charts_test;

use leptos::prelude::*;

use crate::net::types::{DailyUsage, HourlyUsage};
use crate::util::time::format_date_ist;

const PLOT_WIDTH: f64 = 600.0;
const PLOT_HEIGHT: f64 = 220.0;

/// Largest value in the series, floored at 1 so an all-zero series still has
/// a finite scale.
fn max_scale(values: &[f64]) -> f64 {
    values.iter().copied().fold(1.0_f64, f64::max)
}

/// Vertical pixel position for a value under the shared scale.
fn plot_y(value: f64, max: f64, height: f64) -> f64 {
    height - (value / max) * height
}

/// `points` attribute for the daily-usage polyline: evenly spaced x, values
/// scaled against the series maximum. A single point centers horizontally.
fn polyline_points(values: &[f64], width: f64, height: f64) -> String {
    let max = max_scale(values);
    let count = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = if count < 2 {
                width / 2.0
            } else {
                (i as f64) * width / ((count - 1) as f64)
            };
            format!("{x:.1},{:.1}", plot_y(v, max, height))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Horizontal slot and bar width for `count` bars across `width` pixels.
/// Bars take 70% of their slot, centered.
fn bar_slot(count: usize, width: f64) -> (f64, f64) {
    if count == 0 {
        return (width, 0.0);
    }
    let slot = width / (count as f64);
    (slot, slot * 0.7)
}

/// Line chart of total conversation minutes per day.
#[component]
pub fn DailyUsageChart(data: Vec<DailyUsage>) -> impl IntoView {
    if data.is_empty() {
        return view! { <p class="chart__empty">"No usage data"</p> }.into_any();
    }

    let minutes: Vec<f64> = data.iter().map(|d| d.total_minutes).collect();
    let points = polyline_points(&minutes, PLOT_WIDTH, PLOT_HEIGHT);
    let max = max_scale(&minutes);
    let count = data.len();

    let markers = data
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let x = if count < 2 {
                PLOT_WIDTH / 2.0
            } else {
                (i as f64) * PLOT_WIDTH / ((count - 1) as f64)
            };
            let y = plot_y(day.total_minutes, max, PLOT_HEIGHT);
            let label = format!(
                "{}: {} min",
                format_date_ist(&day.date),
                day.total_minutes
            );
            view! {
                <circle class="chart__marker" cx=format!("{x:.1}") cy=format!("{y:.1}") r="3">
                    <title>{label}</title>
                </circle>
            }
        })
        .collect::<Vec<_>>();

    let first_label = format_date_ist(&data[0].date);
    let last_label = format_date_ist(&data[count - 1].date);

    view! {
        <svg
            class="chart chart--line"
            viewBox=format!("0 -10 {PLOT_WIDTH} {}", PLOT_HEIGHT + 40.0)
            preserveAspectRatio="none"
        >
            <line class="chart__axis" x1="0" y1=format!("{PLOT_HEIGHT}") x2=format!("{PLOT_WIDTH}") y2=format!("{PLOT_HEIGHT}")></line>
            <polyline class="chart__line" fill="none" points=points></polyline>
            {markers}
            <text class="chart__label" x="0" y=format!("{}", PLOT_HEIGHT + 24.0)>{first_label}</text>
            <text class="chart__label" x=format!("{PLOT_WIDTH}") y=format!("{}", PLOT_HEIGHT + 24.0) text-anchor="end">
                {last_label}
            </text>
        </svg>
    }
    .into_any()
}

/// Bar chart of conversation minutes per hour of day (IST).
#[component]
pub fn HourlyUsageChart(data: Vec<HourlyUsage>) -> impl IntoView {
    if data.is_empty() {
        return view! { <p class="chart__empty">"No usage data"</p> }.into_any();
    }

    let max = max_scale(&data.iter().map(|h| h.duration).collect::<Vec<_>>());
    let (slot, bar_width) = bar_slot(data.len(), PLOT_WIDTH);

    let bars = data
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let x = (i as f64) * slot + (slot - bar_width) / 2.0;
            let y = plot_y(entry.duration, max, PLOT_HEIGHT);
            let height = PLOT_HEIGHT - y;
            let label = format!("{}:00 IST: {} min", entry.hour, entry.duration);
            view! {
                <rect
                    class="chart__bar"
                    x=format!("{x:.1}")
                    y=format!("{y:.1}")
                    width=format!("{bar_width:.1}")
                    height=format!("{height:.1}")
                >
                    <title>{label}</title>
                </rect>
            }
        })
        .collect::<Vec<_>>();

    let hour_labels = data
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.hour % 6 == 0)
        .map(|(i, entry)| {
            let x = (i as f64) * slot + slot / 2.0;
            view! {
                <text
                    class="chart__label"
                    x=format!("{x:.1}")
                    y=format!("{}", PLOT_HEIGHT + 24.0)
                    text-anchor="middle"
                >
                    {format!("{}:00", entry.hour)}
                </text>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg
            class="chart chart--bars"
            viewBox=format!("0 -10 {PLOT_WIDTH} {}", PLOT_HEIGHT + 40.0)
            preserveAspectRatio="none"
        >
            <line class="chart__axis" x1="0" y1=format!("{PLOT_HEIGHT}") x2=format!("{PLOT_WIDTH}") y2=format!("{PLOT_HEIGHT}")></line>
            {bars}
            {hour_labels}
        </svg>
    }
    .into_any()
}
