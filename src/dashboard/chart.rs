//! Chart Card
//!
//! Turns any slice of `WeekRecord`s plus a list of `LineConfig`s into a
//! plottable model: x-axis categories, one series per line, and a y axis with
//! rounded ticks. The model is independent of how it is drawn; see
//! `dashboard::layout` for pixel geometry.

use serde::Serialize;
use std::collections::HashSet;

use super::error::{DashboardError, DashboardResult};
use super::types::{LineConfig, WeekRecord};

/// Number of y-axis ticks the axis aims for
pub const TICK_COUNT: usize = 5;

/// Upper bound on rounded tick intervals before falling back to an even split
const MAX_STEPS: usize = 4 * TICK_COUNT;

/// One plotted line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub data_key: String,
    pub stroke: String,
    /// One slot per category; `None` where the record lacks the metric
    pub values: Vec<Option<f64>>,
}

impl Series {
    /// Number of values that will actually be drawn
    pub fn point_count(&self) -> usize {
        self.values.iter().flatten().count()
    }
}

/// Linear value axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YAxis {
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
}

impl YAxis {
    /// Fit a zero-based axis with rounded steps around the given values
    pub fn fit(values: impl IntoIterator<Item = f64>) -> Self {
        let (mut lo, mut hi) = (0.0_f64, 0.0_f64);
        for value in values.into_iter().filter(|v| v.is_finite()) {
            lo = lo.min(value);
            hi = hi.max(value);
        }

        if hi - lo <= f64::EPSILON {
            hi = lo + (TICK_COUNT - 1) as f64;
        }

        let step = nice_step((hi - lo) / (TICK_COUNT - 1) as f64);
        let min = (lo / step).floor() * step;
        let max = (hi / step).ceil() * step;
        let steps = (max - min) / step;

        if !min.is_finite() || !max.is_finite() || !steps.is_finite() || steps > MAX_STEPS as f64 {
            return Self::evenly_spaced(lo, hi);
        }

        let ticks = (0..=steps.round() as usize)
            .map(|i| min + i as f64 * step)
            .collect();

        Self { min, max, ticks }
    }

    /// Unrounded axis for ranges too close to the float limits to round
    fn evenly_spaced(lo: f64, hi: f64) -> Self {
        let last = (TICK_COUNT - 1) as f64;
        let ticks = (0..TICK_COUNT)
            .map(|i| {
                let t = i as f64 / last;
                lo * (1.0 - t) + hi * t
            })
            .collect();

        Self {
            min: lo,
            max: hi,
            ticks,
        }
    }

    /// Tick label: integers without a fraction, everything else to two places
    pub fn label(value: f64) -> String {
        if value.fract().abs() < 1e-9 {
            format!("{}", value.round() as i64)
        } else {
            let text = format!("{:.2}", value);
            text.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

/// Round a raw step up to 1, 2, 2.5 or 5 times a power of ten
fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }

    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|candidate| fraction <= candidate + 1e-9)
        .unwrap_or(10.0);

    nice * magnitude
}

/// Values shown in the hover tooltip for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub week: String,
    pub entries: Vec<TooltipEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipEntry {
    pub data_key: String,
    pub stroke: String,
    pub value: f64,
}

/// A titled multi-line trend chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartCard {
    /// URL-safe identifier derived from the title
    pub id: String,
    pub title: String,
    /// Week labels in input order
    pub categories: Vec<String>,
    /// One entry per line config, in list order
    pub series: Vec<Series>,
    pub y_axis: YAxis,
}

impl ChartCard {
    /// Build a chart from any week-keyed series
    ///
    /// Never fails: empty data gives an empty axis, an empty line list gives a
    /// bare frame, and a key missing from a record leaves a gap in that line.
    pub fn new<R: WeekRecord>(title: impl Into<String>, data: &[R], lines: &[LineConfig]) -> Self {
        let title = title.into();
        let categories = data.iter().map(|record| record.week().to_string()).collect();

        let series: Vec<Series> = lines
            .iter()
            .map(|line| Series {
                data_key: line.data_key.to_string(),
                stroke: line.stroke.to_string(),
                values: data.iter().map(|record| record.metric(line.data_key)).collect(),
            })
            .collect();

        let y_axis = YAxis::fit(
            series
                .iter()
                .flat_map(|s| s.values.iter().flatten().copied()),
        );

        tracing::trace!(
            chart = %title,
            records = data.len(),
            lines = lines.len(),
            "Built chart model"
        );

        Self {
            id: slugify(&title),
            title,
            categories,
            series,
            y_axis,
        }
    }

    /// Build a chart after checking the data-integrity invariants
    pub fn validated<R: WeekRecord>(
        title: impl Into<String>,
        data: &[R],
        lines: &[LineConfig],
    ) -> DashboardResult<Self> {
        let title = title.into();
        validate_lines(&title, data, lines)?;
        Ok(Self::new(title, data, lines))
    }

    /// Whether there is nothing to plot
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.point_count() == 0)
    }

    /// Total number of plotted points across all series
    pub fn point_count(&self) -> usize {
        self.series.iter().map(Series::point_count).sum()
    }

    /// Look up a series by metric key
    pub fn series(&self, data_key: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.data_key == data_key)
    }

    /// Tooltip contents for the category at `index`
    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        let week = self.categories.get(index)?;
        let entries = self
            .series
            .iter()
            .filter_map(|s| {
                s.values.get(index).copied().flatten().map(|value| TooltipEntry {
                    data_key: s.data_key.clone(),
                    stroke: s.stroke.clone(),
                    value,
                })
            })
            .collect();

        Some(Tooltip {
            week: week.clone(),
            entries,
        })
    }
}

/// Check that every line key exists on every record and that weeks and keys
/// are unique
pub fn validate_lines<R: WeekRecord>(
    chart: &str,
    data: &[R],
    lines: &[LineConfig],
) -> DashboardResult<()> {
    let mut keys = HashSet::new();
    for line in lines {
        if !keys.insert(line.data_key) {
            return Err(DashboardError::DuplicateDataKey {
                chart: chart.to_string(),
                data_key: line.data_key.to_string(),
            });
        }
    }

    let mut weeks = HashSet::new();
    for record in data {
        if !weeks.insert(record.week()) {
            return Err(DashboardError::DuplicateWeek {
                chart: chart.to_string(),
                week: record.week().to_string(),
            });
        }

        if let Some(line) = lines.iter().find(|l| record.metric(l.data_key).is_none()) {
            return Err(DashboardError::MissingDataKey {
                chart: chart.to_string(),
                data_key: line.data_key.to_string(),
                week: record.week().to_string(),
            });
        }
    }

    Ok(())
}

/// Lowercase, dash-separated identifier
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
