//! Dashboard Page
//!
//! Composition root: header, summary tiles, trend charts, and weekly
//! comparison panels, all taken straight from the fixture tables.

use serde::Serialize;

use super::chart::ChartCard;
use super::error::{DashboardError, DashboardResult};
use super::fixtures::{
    DASHBOARD_TITLE, STUDENT_LINES, STUDENT_TREND, SUBJECT_LINES, SUBJECT_TREND, SUMMARY_CARDS,
    TUTOR_HOURS, TUTOR_LINES, WEEKLY_SUMMARY,
};
use super::reveal::Motion;
use super::types::{Glyph, WeeklySummary};

/// Summary metric tile
///
/// The value is shown exactly as given; callers format it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardItem {
    pub icon: Glyph,
    pub label: String,
    pub value: String,
}

impl CardItem {
    pub fn new(icon: Glyph, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn motion(&self) -> Motion {
        Motion::CARD
    }
}

/// One line of a summary panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    /// e.g. `Math vs Science`
    pub label: String,
    /// e.g. `6 vs 5`
    pub values: String,
}

/// Weekly comparison panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryPanel {
    pub week: String,
    pub rows: Vec<ComparisonRow>,
}

impl SummaryPanel {
    pub fn heading(&self) -> String {
        format!("{} Summary", self.week)
    }

    pub fn motion(&self) -> Motion {
        Motion::SUMMARY_PANEL
    }
}

impl From<&WeeklySummary> for SummaryPanel {
    fn from(summary: &WeeklySummary) -> Self {
        Self {
            week: summary.week.to_string(),
            rows: summary
                .comparisons
                .iter()
                .map(|c| ComparisonRow {
                    label: c.label(),
                    values: c.values(),
                })
                .collect(),
        }
    }
}

/// The whole dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardPage {
    pub title: String,
    pub title_icon: Glyph,
    pub cards: Vec<CardItem>,
    pub charts: Vec<ChartCard>,
    pub summaries: Vec<SummaryPanel>,
}

impl DashboardPage {
    /// Compose the page from the fixture tables
    ///
    /// Fails only if a chart's line configs do not match its data.
    pub fn compose() -> DashboardResult<Self> {
        let cards = SUMMARY_CARDS
            .iter()
            .map(|&(icon, label, value)| CardItem::new(icon, label, value))
            .collect();

        let charts = vec![
            ChartCard::validated("Students Over Time", &STUDENT_TREND, &STUDENT_LINES)?,
            ChartCard::validated("Tutor Hours Per Week", &TUTOR_HOURS, &TUTOR_LINES)?,
            ChartCard::validated("Subject Popularity Over Time", &SUBJECT_TREND, &SUBJECT_LINES)?,
        ];

        let summaries = WEEKLY_SUMMARY.iter().map(SummaryPanel::from).collect();

        let page = Self {
            title: DASHBOARD_TITLE.to_string(),
            title_icon: Glyph::ChartLine,
            cards,
            charts,
            summaries,
        };

        tracing::debug!(
            cards = page.cards.len(),
            charts = page.charts.len(),
            summaries = page.summaries.len(),
            "Composed dashboard page"
        );

        Ok(page)
    }

    pub fn header_motion(&self) -> Motion {
        Motion::HEADER
    }

    /// Find a chart by its id
    pub fn chart(&self, id: &str) -> DashboardResult<&ChartCard> {
        self.charts
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| DashboardError::ChartNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_layout() {
        let page = DashboardPage::compose().unwrap();

        assert_eq!(page.title, "Tutoring Dashboard");
        assert_eq!(page.title_icon, Glyph::ChartLine);
        assert_eq!(page.cards.len(), 4);
        assert_eq!(page.charts.len(), 3);
        assert_eq!(page.summaries.len(), WEEKLY_SUMMARY.len());
    }

    #[test]
    fn test_card_values_are_literal() {
        let page = DashboardPage::compose().unwrap();
        let cards: Vec<_> = page
            .cards
            .iter()
            .map(|c| (c.label.as_str(), c.value.as_str()))
            .collect();

        assert_eq!(
            cards,
            vec![
                ("Total Students", "20"),
                ("Most Popular Subject", "Math"),
                ("Top Tutor", "Tutor 3"),
                ("Total Hours", "84 hrs"),
            ]
        );
    }

    #[test]
    fn test_card_keeps_value_verbatim() {
        let card = CardItem::new(Glyph::BookOpen, "Ratio", "007.50");
        assert_eq!(card.value, "007.50");
        assert_eq!(card.motion(), Motion::CARD);
    }

    #[test]
    fn test_one_row_per_comparison() {
        let page = DashboardPage::compose().unwrap();

        for (panel, summary) in page.summaries.iter().zip(WEEKLY_SUMMARY.iter()) {
            assert_eq!(panel.week, summary.week);
            assert_eq!(panel.rows.len(), summary.comparisons.len());
        }
    }

    #[test]
    fn test_week_three_panel() {
        let page = DashboardPage::compose().unwrap();
        let panel = &page.summaries[0];

        assert_eq!(panel.heading(), "Week 3 Summary");
        assert_eq!(
            panel.rows,
            vec![
                ComparisonRow {
                    label: "Math vs Science".to_string(),
                    values: "6 vs 5".to_string(),
                },
                ComparisonRow {
                    label: "Math vs English".to_string(),
                    values: "6 vs 4".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_chart_lookup() {
        let page = DashboardPage::compose().unwrap();

        let ids: Vec<_> = page.charts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["students-over-time", "tutor-hours-per-week", "subject-popularity-over-time"]
        );

        let chart = page.chart("tutor-hours-per-week").unwrap();
        assert_eq!(chart.series.len(), 3);
        assert_eq!(
            page.chart("revenue").unwrap_err(),
            DashboardError::ChartNotFound("revenue".to_string())
        );
    }
}
