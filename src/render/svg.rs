//! SVG chart rendering
//!
//! Draws a `ChartCard` from its `ChartGeometry`: dashed grid, axes, one
//! monotone line per series with point markers, legend, and per-week hover
//! targets whose `<title>` acts as the tooltip.

use crate::dashboard::{ChartCard, ChartGeometry, YAxis};
use crate::dashboard::layout::coord;

use super::escape_html;

const GRID_STROKE: &str = "#eee";
const GRID_DASH: &str = "5 5";
const AXIS_STROKE: &str = "#666";
const LINE_WIDTH: u32 = 2;
const LEGEND_SWATCH: f64 = 14.0;
const LEGEND_GAP: f64 = 16.0;
const LEGEND_CHAR_WIDTH: f64 = 7.0;

/// Render the chart as a standalone `<svg>` element
pub fn render_chart_svg(chart: &ChartCard, geometry: &ChartGeometry) -> String {
    let frame = &geometry.frame;
    let mut svg = format!(
        r#"<svg class="chart" viewBox="0 0 {w} {h}" width="100%" height="{h}" role="img" aria-label="{title}">"#,
        w = coord(frame.width),
        h = coord(frame.height),
        title = escape_html(&chart.title),
    );

    svg.push_str(&render_grid(geometry));
    svg.push_str(&render_axes(geometry));

    for line in &geometry.lines {
        if line.path.is_empty() {
            continue;
        }
        svg.push_str(&format!(
            r#"<path class="series" data-key="{key}" d="{d}" fill="none" stroke="{stroke}" stroke-width="{width}"/>"#,
            key = escape_html(&line.data_key),
            d = line.path,
            stroke = escape_html(&line.stroke),
            width = LINE_WIDTH,
        ));
        for point in &line.points {
            svg.push_str(&format!(
                r##"<circle cx="{x}" cy="{y}" r="3" fill="#fff" stroke="{stroke}" stroke-width="{width}"/>"##,
                x = coord(point.x),
                y = coord(point.y),
                stroke = escape_html(&line.stroke),
                width = LINE_WIDTH,
            ));
        }
    }

    svg.push_str(&render_tooltips(chart, geometry));
    svg.push_str(&render_legend(chart, geometry));
    svg.push_str("</svg>");

    svg
}

fn render_grid(geometry: &ChartGeometry) -> String {
    let plot = &geometry.plot;
    let mut grid = format!(
        r#"<g class="grid" stroke="{GRID_STROKE}" stroke-dasharray="{GRID_DASH}">"#
    );

    for tick in &geometry.y_ticks {
        grid.push_str(&format!(
            r#"<line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}"/>"#,
            x1 = coord(plot.left),
            x2 = coord(plot.right),
            y = coord(tick.position),
        ));
    }
    for tick in &geometry.x_ticks {
        grid.push_str(&format!(
            r#"<line x1="{x}" y1="{y1}" x2="{x}" y2="{y2}"/>"#,
            x = coord(tick.position),
            y1 = coord(plot.top),
            y2 = coord(plot.bottom),
        ));
    }

    grid.push_str("</g>");
    grid
}

fn render_axes(geometry: &ChartGeometry) -> String {
    let plot = &geometry.plot;
    let mut axes = format!(
        r#"<g class="axis" stroke="{AXIS_STROKE}"><line x1="{l}" y1="{b}" x2="{r}" y2="{b}"/><line x1="{l}" y1="{t}" x2="{l}" y2="{b}"/></g>"#,
        l = coord(plot.left),
        r = coord(plot.right),
        t = coord(plot.top),
        b = coord(plot.bottom),
    );

    axes.push_str(r#"<g class="x-axis" text-anchor="middle">"#);
    for tick in &geometry.x_ticks {
        axes.push_str(&format!(
            r#"<text x="{x}" y="{y}">{label}</text>"#,
            x = coord(tick.position),
            y = coord(plot.bottom + 18.0),
            label = escape_html(&tick.label),
        ));
    }
    axes.push_str("</g>");

    axes.push_str(r#"<g class="y-axis" text-anchor="end">"#);
    for tick in &geometry.y_ticks {
        axes.push_str(&format!(
            r#"<text x="{x}" y="{y}">{label}</text>"#,
            x = coord(plot.left - 8.0),
            y = coord(tick.position + 4.0),
            label = escape_html(&tick.label),
        ));
    }
    axes.push_str("</g>");

    axes
}

fn render_tooltips(chart: &ChartCard, geometry: &ChartGeometry) -> String {
    let plot = &geometry.plot;
    let mut out = String::from(r#"<g class="tooltips">"#);

    for band in &geometry.hover_bands {
        let Some(tooltip) = chart.tooltip(band.index) else {
            continue;
        };

        let mut title = escape_html(&tooltip.week);
        for entry in &tooltip.entries {
            title.push_str("&#10;");
            title.push_str(&escape_html(&entry.data_key));
            title.push_str(": ");
            title.push_str(&YAxis::label(entry.value));
        }

        out.push_str(&format!(
            r##"<g class="tooltip-target"><line class="cursor" x1="{c}" y1="{t}" x2="{c}" y2="{b}" stroke="#ccc"/><rect x="{x}" y="{t}" width="{w}" height="{h}" fill="transparent"><title>{title}</title></rect></g>"##,
            c = coord(band.center),
            x = coord(band.x),
            w = coord(band.width),
            t = coord(plot.top),
            b = coord(plot.bottom),
            h = coord(plot.height()),
        ));
    }

    out.push_str("</g>");
    out
}

/// Approximate width of one legend entry
fn legend_item_width(label: &str) -> f64 {
    LEGEND_SWATCH + 4.0 + label.chars().count() as f64 * LEGEND_CHAR_WIDTH
}

fn render_legend(chart: &ChartCard, geometry: &ChartGeometry) -> String {
    if chart.series.is_empty() {
        return String::new();
    }

    let frame = &geometry.frame;
    let widths: Vec<f64> = chart
        .series
        .iter()
        .map(|s| legend_item_width(&s.data_key))
        .collect();
    let total: f64 = widths.iter().sum::<f64>() + LEGEND_GAP * (widths.len() - 1) as f64;
    let y = frame.height - frame.margin - frame.legend_height / 2.0;

    let mut legend = String::from(r#"<g class="legend">"#);
    let mut x = (frame.width - total) / 2.0;
    for (series, width) in chart.series.iter().zip(widths) {
        legend.push_str(&format!(
            r#"<g class="legend-item"><line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" stroke="{stroke}" stroke-width="{lw}"/><text x="{tx}" y="{ty}" fill="{stroke}">{key}</text></g>"#,
            x1 = coord(x),
            x2 = coord(x + LEGEND_SWATCH),
            y = coord(y),
            stroke = escape_html(&series.stroke),
            lw = LINE_WIDTH,
            tx = coord(x + LEGEND_SWATCH + 4.0),
            ty = coord(y + 4.0),
            key = escape_html(&series.data_key),
        ));
        x += width + LEGEND_GAP;
    }
    legend.push_str("</g>");

    legend
}
