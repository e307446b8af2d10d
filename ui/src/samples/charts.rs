use dioxus::prelude::*;

use crate::core::aggregate::{ConcentrationSeries, StatusCounts};
use crate::core::dataset::SampleStatus;
use crate::samples::SamplesViewState;

const BAR_WIDTH: f64 = 320.0;
const BAR_HEIGHT: f64 = 28.0;

/// Horizontal stacked bar of visible samples per workflow status.
/// Categories always render in the canonical order with the fixed
/// palette, even when a count is zero.
#[component]
pub fn StatusChart(view: Signal<SamplesViewState>) -> Element {
    let state = view();
    let Some(dashboard) = state.dashboard.as_ref() else {
        return rsx! {};
    };
    let counts = *dashboard.status_counts();
    let segments = bar_segments(&counts);

    rsx! {
        figure { class: "samples-chart samples-chart--status",
            svg {
                view_box: "0 0 {BAR_WIDTH} {BAR_HEIGHT}",
                width: "{BAR_WIDTH}",
                height: "{BAR_HEIGHT}",
                for segment in segments.into_iter() {
                    rect {
                        key: "{segment.label}",
                        x: "{segment.x}",
                        y: "0",
                        width: "{segment.width}",
                        height: "{BAR_HEIGHT}",
                        fill: "{segment.color}",
                    }
                }
            }
            figcaption { class: "samples-chart__legend",
                for (status, count) in counts.iter() {
                    span { key: "{status.label()}", class: "samples-chart__legend-item",
                        span {
                            class: "samples-chart__swatch",
                            style: "background:{status.chart_color()}",
                        }
                        "{status.label()}: {count}"
                    }
                }
            }
        }
    }
}

struct BarSegment {
    label: &'static str,
    color: &'static str,
    x: f64,
    width: f64,
}

fn bar_segments(counts: &StatusCounts) -> Vec<BarSegment> {
    let total = counts.total();
    if total == 0 {
        return Vec::new();
    }

    let mut x = 0.0;
    let mut segments = Vec::with_capacity(SampleStatus::ALL.len());
    for (status, count) in counts.iter() {
        let width = BAR_WIDTH * count as f64 / total as f64;
        segments.push(BarSegment {
            label: status.label(),
            color: status.chart_color(),
            x,
            width,
        });
        x += width;
    }
    segments
}

const STRIP_WIDTH: f64 = 220.0;
const STRIP_HEIGHT: f64 = 200.0;
const STRIP_PAD: f64 = 12.0;

/// Scatter strip of DNA concentrations: one column for regular samples,
/// one for blanks. Jitter is deterministic so snapshots stay stable.
#[component]
pub fn ConcentrationChart(view: Signal<SamplesViewState>) -> Element {
    let state = view();
    let Some(dashboard) = state.dashboard.as_ref() else {
        return rsx! {};
    };
    let series = dashboard.concentrations().clone();
    let points = strip_points(&series);

    rsx! {
        figure { class: "samples-chart samples-chart--concentration",
            svg {
                view_box: "0 0 {STRIP_WIDTH} {STRIP_HEIGHT}",
                width: "{STRIP_WIDTH}",
                height: "{STRIP_HEIGHT}",
                for (i, point) in points.into_iter().enumerate() {
                    circle {
                        key: "{i}",
                        cx: "{point.0}",
                        cy: "{point.1}",
                        r: "2",
                        fill: "#EF6262",
                    }
                }
            }
            figcaption { class: "samples-chart__legend",
                span { class: "samples-chart__legend-item", "Sample" }
                span { class: "samples-chart__legend-item", "Blank" }
                span { class: "samples-chart__axis", "DNA concentration (ng/μl)" }
            }
        }
    }
}

fn strip_points(series: &ConcentrationSeries) -> Vec<(f64, f64)> {
    let max = series.max_concentration().max(1e-9);
    let scale = (STRIP_HEIGHT - 2.0 * STRIP_PAD) / max;

    series
        .samples
        .iter()
        .chain(series.blanks.iter())
        .enumerate()
        .map(|(i, (category, value))| {
            let column = if *category == 0 {
                STRIP_WIDTH * 0.3
            } else {
                STRIP_WIDTH * 0.7
            };
            // Deterministic jitter in place of the original's random x
            // offset, so repeated derivations plot identically.
            let jitter = ((i * 7) % 21) as f64 - 10.0;
            let y = STRIP_HEIGHT - STRIP_PAD - value * scale;
            (column + jitter, y)
        })
        .collect()
}
