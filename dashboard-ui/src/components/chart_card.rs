//! Chart Card Component
//!
//! Titled SVG line chart with a dashed grid, one monotone line per series,
//! a hover tooltip listing every series' value for the week under the
//! cursor, and a legend.

use leptos::*;
use tutorboard::dashboard::layout::coord;
use tutorboard::dashboard::{ChartCard, ChartFrame, ChartGeometry, Motion, YAxis};

use super::use_reveal;

const GRID_STROKE: &str = "#eee";
const GRID_DASH: &str = "5 5";
const AXIS_STROKE: &str = "#666";
const CURSOR_STROKE: &str = "#ccc";

/// Chart card component
#[component]
pub fn ChartCardView(chart: ChartCard) -> impl IntoView {
    let (node_ref, style) = use_reveal(Motion::CHART);
    let geometry = ChartGeometry::compute(&chart, ChartFrame::default());
    let hovered = create_rw_signal(None::<usize>);

    let frame = geometry.frame;
    let plot = geometry.plot;
    let bands = geometry.hover_bands.clone();
    let title = chart.title.clone();
    let id = chart.id.clone();
    let legend = chart
        .series
        .iter()
        .map(|s| (s.data_key.clone(), s.stroke.clone()))
        .collect::<Vec<_>>();
    let chart = store_value(chart);

    let grid = view! {
        <g class="grid" stroke=GRID_STROKE stroke-dasharray=GRID_DASH>
            {geometry.y_ticks.iter().map(|tick| view! {
                <line x1=coord(plot.left) y1=coord(tick.position) x2=coord(plot.right) y2=coord(tick.position) />
            }).collect_view()}
            {geometry.x_ticks.iter().map(|tick| view! {
                <line x1=coord(tick.position) y1=coord(plot.top) x2=coord(tick.position) y2=coord(plot.bottom) />
            }).collect_view()}
        </g>
    };

    let axes = view! {
        <g class="axis" stroke=AXIS_STROKE>
            <line x1=coord(plot.left) y1=coord(plot.bottom) x2=coord(plot.right) y2=coord(plot.bottom) />
            <line x1=coord(plot.left) y1=coord(plot.top) x2=coord(plot.left) y2=coord(plot.bottom) />
        </g>
        <g class="x-axis" text-anchor="middle">
            {geometry.x_ticks.iter().map(|tick| view! {
                <text x=coord(tick.position) y=coord(plot.bottom + 18.0)>{tick.label.clone()}</text>
            }).collect_view()}
        </g>
        <g class="y-axis" text-anchor="end">
            {geometry.y_ticks.iter().map(|tick| view! {
                <text x=coord(plot.left - 8.0) y=coord(tick.position + 4.0)>{tick.label.clone()}</text>
            }).collect_view()}
        </g>
    };

    let lines = geometry
        .lines
        .iter()
        .filter(|line| !line.path.is_empty())
        .map(|line| {
            let stroke = line.stroke.clone();
            view! {
                <path class="series" data-key=line.data_key.clone() d=line.path.clone()
                    fill="none" stroke=stroke.clone() stroke-width="2" />
                {line.points.iter().map(|p| view! {
                    <circle cx=coord(p.x) cy=coord(p.y) r="3" fill="#fff" stroke=stroke.clone() stroke-width="2" />
                }).collect_view()}
            }
        })
        .collect_view();

    let cursor_bands = bands.clone();
    let cursor = move || {
        hovered
            .get()
            .and_then(|i| cursor_bands.iter().find(|b| b.index == i).copied())
            .map(|band| view! {
                <line class="cursor" x1=coord(band.center) y1=coord(plot.top)
                    x2=coord(band.center) y2=coord(plot.bottom) stroke=CURSOR_STROKE />
            })
    };

    let targets = bands
        .iter()
        .map(|band| {
            let index = band.index;
            view! {
                <rect x=coord(band.x) y=coord(plot.top) width=coord(band.width) height=coord(plot.height())
                    fill="transparent"
                    on:mouseenter=move |_| hovered.set(Some(index))
                    on:mouseleave=move |_| hovered.set(None) />
            }
        })
        .collect_view();

    let tooltip_bands = bands;
    let tooltip = move || {
        let index = hovered.get()?;
        let band = tooltip_bands.iter().find(|b| b.index == index)?;
        let tooltip = chart.with_value(|c| c.tooltip(index))?;
        let left = tooltip_left_percent(band.center, frame.width);

        Some(view! {
            <div class="chart-tooltip" style=format!("left: {:.2}%", left)>
                <p>{tooltip.week}</p>
                {tooltip.entries.into_iter().map(|entry| view! {
                    <p style=format!("color: {}", entry.stroke)>
                        {format!("{}: {}", entry.data_key, YAxis::label(entry.value))}
                    </p>
                }).collect_view()}
            </div>
        })
    };

    view! {
        <div class="chart-card panel" id=id node_ref=node_ref style=style>
            <h2>{title.clone()}</h2>
            <div class="chart-wrap">
                <svg
                    class="chart"
                    viewBox=format!("0 0 {} {}", coord(frame.width), coord(frame.height - frame.legend_height))
                    width="100%"
                    role="img"
                    aria-label=title
                >
                    {grid}
                    {axes}
                    {lines}
                    {cursor}
                    <g class="tooltips">{targets}</g>
                </svg>
                {tooltip}
            </div>
            <ChartLegend items=legend />
        </div>
    }
}

/// Legend showing series colours
#[component]
fn ChartLegend(items: Vec<(String, String)>) -> impl IntoView {
    view! {
        <div style="display: flex; justify-content: center; flex-wrap: wrap; gap: 1rem; margin-top: 0.5rem;">
            {items
                .into_iter()
                .map(|(key, stroke)| view! {
                    <div style="display: flex; align-items: center; gap: 0.5rem; font-size: 12px;">
                        <span style=legend_swatch_style(&stroke) />
                        <span style=format!("color: {}", stroke)>{key}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

/// Horizontal tooltip anchor as a percentage of the chart width
fn tooltip_left_percent(center: f64, frame_width: f64) -> f64 {
    if frame_width <= 0.0 {
        return 50.0;
    }
    (center / frame_width * 100.0).clamp(0.0, 100.0)
}

fn legend_swatch_style(stroke: &str) -> String {
    format!(
        "display: inline-block; width: 14px; height: 2px; background-color: {}",
        stroke
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_left_percent() {
        assert_eq!(tooltip_left_percent(300.0, 600.0), 50.0);
        assert_eq!(tooltip_left_percent(65.0, 0.0), 50.0);
        assert_eq!(tooltip_left_percent(700.0, 600.0), 100.0);
    }

    #[test]
    fn test_legend_swatch_style() {
        assert!(legend_swatch_style("#82ca9d").ends_with("background-color: #82ca9d"));
    }
}
