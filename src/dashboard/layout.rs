//! Chart Layout
//!
//! Pixel geometry for a `ChartCard` inside a fixed logical frame. Output is in
//! SVG user units; renderers put it in a `viewBox` so the chart scales with its
//! container.
//!
//! Lines use monotone-X cubic interpolation: tangents are limited so a curve
//! never overshoots the values on either side of a segment.

use serde::Serialize;

use super::chart::{ChartCard, YAxis};

/// Logical drawing frame for one chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    /// Gutter reserved for y tick labels
    pub y_axis_width: f64,
    /// Band reserved for x tick labels
    pub x_axis_height: f64,
    /// Band reserved for the legend below the axis
    pub legend_height: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 250.0,
            margin: 5.0,
            y_axis_width: 60.0,
            x_axis_height: 30.0,
            legend_height: 24.0,
        }
    }
}

impl ChartFrame {
    /// Rectangle the series are plotted in
    pub fn plot_area(&self) -> PlotArea {
        PlotArea {
            left: self.margin + self.y_axis_width,
            top: self.margin,
            right: self.width - self.margin,
            bottom: self.height - self.margin - self.x_axis_height - self.legend_height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// A labelled position along one axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub label: String,
    pub position: f64,
}

/// One drawn value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    /// Category index the value belongs to
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

/// Path and markers for one series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineGeometry {
    pub data_key: String,
    pub stroke: String,
    /// SVG path data; empty when the series has no values
    pub path: String,
    pub points: Vec<PlotPoint>,
}

/// Hover target for a category's tooltip
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoverBand {
    pub index: usize,
    pub x: f64,
    pub width: f64,
    /// Where the cursor line is drawn
    pub center: f64,
}

/// Everything a renderer needs to draw a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartGeometry {
    pub frame: ChartFrame,
    pub plot: PlotArea,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub lines: Vec<LineGeometry>,
    pub hover_bands: Vec<HoverBand>,
}

impl ChartGeometry {
    /// Lay out a chart in the given frame
    pub fn compute(chart: &ChartCard, frame: ChartFrame) -> Self {
        let plot = frame.plot_area();
        let count = chart.categories.len();

        let x_at = |index: usize| -> f64 {
            if count <= 1 {
                plot.left + plot.width() / 2.0
            } else {
                plot.left + index as f64 * plot.width() / (count - 1) as f64
            }
        };
        let y_at = |value: f64| -> f64 { scale_y(&chart.y_axis, &plot, value) };

        let x_ticks = chart
            .categories
            .iter()
            .enumerate()
            .map(|(i, week)| AxisTick {
                label: week.clone(),
                position: x_at(i),
            })
            .collect();

        let y_ticks = chart
            .y_axis
            .ticks
            .iter()
            .map(|&tick| AxisTick {
                label: YAxis::label(tick),
                position: y_at(tick),
            })
            .collect();

        let lines = chart
            .series
            .iter()
            .map(|series| {
                let points: Vec<PlotPoint> = series
                    .values
                    .iter()
                    .enumerate()
                    .filter_map(|(index, value)| {
                        value.map(|value| PlotPoint {
                            index,
                            x: x_at(index),
                            y: y_at(value),
                            value,
                        })
                    })
                    .collect();

                LineGeometry {
                    data_key: series.data_key.clone(),
                    stroke: series.stroke.clone(),
                    path: series_path(&points),
                    points,
                }
            })
            .collect();

        let hover_bands = (0..count)
            .map(|index| {
                let center = x_at(index);
                let start = if index == 0 {
                    plot.left
                } else {
                    (x_at(index - 1) + center) / 2.0
                };
                let end = if index + 1 >= count {
                    plot.right
                } else {
                    (center + x_at(index + 1)) / 2.0
                };
                HoverBand {
                    index,
                    x: start,
                    width: end - start,
                    center,
                }
            })
            .collect();

        Self {
            frame,
            plot,
            x_ticks,
            y_ticks,
            lines,
            hover_bands,
        }
    }
}

fn scale_y(axis: &YAxis, plot: &PlotArea, value: f64) -> f64 {
    let span = axis.max - axis.min;
    if span <= 0.0 {
        return plot.bottom;
    }
    plot.bottom - (value - axis.min) / span * plot.height()
}

/// Path for a series, broken wherever a category has no value
fn series_path(points: &[PlotPoint]) -> String {
    let mut path = String::new();
    let mut run: Vec<(f64, f64)> = Vec::with_capacity(points.len());
    let mut last_index = None;

    for point in points {
        if let Some(prev) = last_index {
            if point.index != prev + 1 {
                path.push_str(&monotone_path(&run));
                run.clear();
            }
        }
        run.push((point.x, point.y));
        last_index = Some(point.index);
    }
    path.push_str(&monotone_path(&run));

    path
}

/// Monotone-X cubic path through points with strictly increasing x
pub fn monotone_path(points: &[(f64, f64)]) -> String {
    match points {
        [] => String::new(),
        [(x, y)] => format!("M{},{}", coord(*x), coord(*y)),
        [(x0, y0), (x1, y1)] => format!(
            "M{},{}L{},{}",
            coord(*x0),
            coord(*y0),
            coord(*x1),
            coord(*y1)
        ),
        _ => {
            let tangents = monotone_tangents(points);
            let (x0, y0) = points[0];
            let mut path = format!("M{},{}", coord(x0), coord(y0));

            for i in 0..points.len() - 1 {
                let (xa, ya) = points[i];
                let (xb, yb) = points[i + 1];
                let dx = (xb - xa) / 3.0;
                path.push_str(&format!(
                    "C{},{},{},{},{},{}",
                    coord(xa + dx),
                    coord(ya + dx * tangents[i]),
                    coord(xb - dx),
                    coord(yb - dx * tangents[i + 1]),
                    coord(xb),
                    coord(yb)
                ));
            }

            path
        }
    }
}

/// Tangent at every point; requires at least three points
fn monotone_tangents(points: &[(f64, f64)]) -> Vec<f64> {
    let n = points.len();
    let mut tangents = vec![0.0; n];

    for i in 1..n - 1 {
        tangents[i] = interior_slope(points[i - 1], points[i], points[i + 1]);
    }
    tangents[0] = end_slope(points[0], points[1], tangents[1]);
    tangents[n - 1] = end_slope(points[n - 2], points[n - 1], tangents[n - 2]);

    tangents
}

fn interior_slope(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    if h0 == 0.0 || h1 == 0.0 {
        return 0.0;
    }

    let s0 = (p1.1 - p0.1) / h0;
    let s1 = (p2.1 - p1.1) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let slope = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());

    if slope.is_finite() {
        slope
    } else {
        0.0
    }
}

fn end_slope(a: (f64, f64), b: (f64, f64), neighbour: f64) -> f64 {
    let h = b.0 - a.0;
    if h == 0.0 {
        neighbour
    } else {
        (3.0 * (b.1 - a.1) / h - neighbour) / 2.0
    }
}

fn sign(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Two-decimal coordinate with trailing zeros removed
pub fn coord(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::fixtures::{STUDENT_LINES, STUDENT_TREND, TUTOR_HOURS, TUTOR_LINES};
    use crate::dashboard::types::{LineConfig, StudentWeek};

    fn student_geometry() -> ChartGeometry {
        let chart = ChartCard::new("Students Over Time", &STUDENT_TREND, &STUDENT_LINES);
        ChartGeometry::compute(&chart, ChartFrame::default())
    }

    #[test]
    fn test_plot_area() {
        let plot = ChartFrame::default().plot_area();
        assert_eq!(plot.left, 65.0);
        assert_eq!(plot.right, 595.0);
        assert_eq!(plot.top, 5.0);
        assert_eq!(plot.bottom, 191.0);
    }

    #[test]
    fn test_x_ticks_span_plot() {
        let geometry = student_geometry();
        let labels: Vec<_> = geometry.x_ticks.iter().map(|t| t.label.as_str()).collect();

        assert_eq!(labels, vec!["Week 1", "Week 2", "Week 3", "Week 4"]);
        assert_eq!(geometry.x_ticks[0].position, geometry.plot.left);
        assert_eq!(geometry.x_ticks[3].position, geometry.plot.right);
    }

    #[test]
    fn test_y_ticks_top_is_max() {
        let geometry = student_geometry();

        assert_eq!(geometry.y_ticks.first().unwrap().label, "0");
        assert_eq!(geometry.y_ticks.first().unwrap().position, geometry.plot.bottom);
        assert_eq!(geometry.y_ticks.last().unwrap().label, "20");
        assert_eq!(geometry.y_ticks.last().unwrap().position, geometry.plot.top);
    }

    #[test]
    fn test_one_line_per_series() {
        let chart = ChartCard::new("Tutor Hours Per Week", &TUTOR_HOURS, &TUTOR_LINES);
        let geometry = ChartGeometry::compute(&chart, ChartFrame::default());

        assert_eq!(geometry.lines.len(), 3);
        for line in &geometry.lines {
            assert_eq!(line.points.len(), 4);
            assert!(line.path.starts_with('M'));
            assert_eq!(line.path.matches('C').count(), 3);
        }
    }

    #[test]
    fn test_points_carry_values() {
        let geometry = student_geometry();
        let values: Vec<_> = geometry.lines[0].points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![10.0, 12.0, 16.0, 20.0]);
    }

    #[test]
    fn test_empty_chart_has_no_paths() {
        let chart = ChartCard::new("Empty", &[] as &[StudentWeek], &STUDENT_LINES);
        let geometry = ChartGeometry::compute(&chart, ChartFrame::default());

        assert!(geometry.x_ticks.is_empty());
        assert!(geometry.hover_bands.is_empty());
        assert_eq!(geometry.lines.len(), 1);
        assert!(geometry.lines[0].path.is_empty());
        assert!(geometry.lines[0].points.is_empty());
    }

    #[test]
    fn test_gap_splits_path() {
        let lines = [LineConfig::new("Tutor1", "#3B82F6"), LineConfig::new("ghost", "#000")];
        let chart = ChartCard::new("Gaps", &TUTOR_HOURS, &lines);
        let geometry = ChartGeometry::compute(&chart, ChartFrame::default());

        assert!(geometry.lines[1].path.is_empty());

        let points = [(0.0, 0.0), (10.0, 5.0), (30.0, 5.0), (40.0, 0.0)];
        let plotted: Vec<PlotPoint> = [0usize, 1, 3, 4]
            .iter()
            .zip(points)
            .map(|(&index, (x, y))| PlotPoint { index, x, y, value: y })
            .collect();
        let path = series_path(&plotted);
        assert_eq!(path.matches('M').count(), 2);
        assert_eq!(path.matches('L').count(), 2);
    }

    #[test]
    fn test_monotone_short_inputs() {
        assert_eq!(monotone_path(&[]), "");
        assert_eq!(monotone_path(&[(1.0, 2.0)]), "M1,2");
        assert_eq!(monotone_path(&[(0.0, 0.0), (10.5, 3.25)]), "M0,0L10.5,3.25");
    }

    #[test]
    fn test_monotone_straight_line_stays_straight() {
        let points = [(0.0, 0.0), (10.0, 10.0), (20.0, 20.0)];
        let tangents = monotone_tangents(&points);
        assert_eq!(tangents, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_monotone_flat_at_extremum() {
        let points = [(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)];
        let tangents = monotone_tangents(&points);
        assert_eq!(tangents[1], 0.0);
    }

    #[test]
    fn test_hover_bands_cover_plot() {
        let geometry = student_geometry();
        let bands = &geometry.hover_bands;

        assert_eq!(bands.len(), 4);
        assert_eq!(bands[0].x, geometry.plot.left);
        let end = bands[3].x + bands[3].width;
        assert!((end - geometry.plot.right).abs() < 1e-9);
        for pair in bands.windows(2) {
            assert!((pair[0].x + pair[0].width - pair[1].x).abs() < 1e-9);
        }
    }

    #[test]
    fn test_coord_formatting() {
        assert_eq!(coord(65.0), "65");
        assert_eq!(coord(12.346), "12.35");
        assert_eq!(coord(-0.001), "0");
    }
}
