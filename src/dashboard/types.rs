//! Core value types for the tutoring dashboard
//!
//! - `WeekRecord`: anything that can be plotted against a week axis
//! - `StudentWeek`, `TutorHoursWeek`, `SubjectWeek`: the three trend shapes
//! - `LineConfig`: binds one metric key to a stroke colour
//! - `WeeklySummary` / `Comparison`: side-by-side subject comparisons
//! - `Glyph`: the icon set used by the page

use serde::Serialize;

/// A record that sits on the week axis of a trend chart
///
/// Metric lookup is by the same key a `LineConfig` carries, so one chart
/// routine serves every series shape.
pub trait WeekRecord {
    /// Category label for the x axis
    fn week(&self) -> &str;

    /// Value of a named metric, or `None` if this record has no such field
    fn metric(&self, key: &str) -> Option<f64>;

    /// Every metric key this record type carries, in declaration order
    fn metric_keys(&self) -> &'static [&'static str];
}

/// Enrolled students for one week
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StudentWeek {
    pub week: &'static str,
    pub students: u32,
}

impl WeekRecord for StudentWeek {
    fn week(&self) -> &str {
        self.week
    }

    fn metric(&self, key: &str) -> Option<f64> {
        match key {
            "students" => Some(self.students as f64),
            _ => None,
        }
    }

    fn metric_keys(&self) -> &'static [&'static str] {
        &["students"]
    }
}

/// Hours taught per tutor for one week
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TutorHoursWeek {
    pub week: &'static str,
    #[serde(rename = "Tutor1")]
    pub tutor1: u32,
    #[serde(rename = "Tutor2")]
    pub tutor2: u32,
    #[serde(rename = "Tutor3")]
    pub tutor3: u32,
}

impl WeekRecord for TutorHoursWeek {
    fn week(&self) -> &str {
        self.week
    }

    fn metric(&self, key: &str) -> Option<f64> {
        let hours = match key {
            "Tutor1" => self.tutor1,
            "Tutor2" => self.tutor2,
            "Tutor3" => self.tutor3,
            _ => return None,
        };
        Some(hours as f64)
    }

    fn metric_keys(&self) -> &'static [&'static str] {
        &["Tutor1", "Tutor2", "Tutor3"]
    }
}

/// Sessions booked per subject for one week
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubjectWeek {
    pub week: &'static str,
    #[serde(rename = "Math")]
    pub math: u32,
    #[serde(rename = "Science")]
    pub science: u32,
    #[serde(rename = "English")]
    pub english: u32,
}

impl WeekRecord for SubjectWeek {
    fn week(&self) -> &str {
        self.week
    }

    fn metric(&self, key: &str) -> Option<f64> {
        let sessions = match key {
            "Math" => self.math,
            "Science" => self.science,
            "English" => self.english,
            _ => return None,
        };
        Some(sessions as f64)
    }

    fn metric_keys(&self) -> &'static [&'static str] {
        &["Math", "Science", "English"]
    }
}

/// Series descriptor: which metric to draw and in what colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineConfig {
    pub data_key: &'static str,
    /// CSS colour, e.g. `#6366F1`
    pub stroke: &'static str,
}

impl LineConfig {
    pub const fn new(data_key: &'static str, stroke: &'static str) -> Self {
        Self { data_key, stroke }
    }
}

/// One subject-vs-subject comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub subject_a: &'static str,
    pub subject_b: &'static str,
    pub value_a: u32,
    pub value_b: u32,
}

impl Comparison {
    /// Left column text, e.g. `Math vs Science`
    pub fn label(&self) -> String {
        format!("{} vs {}", self.subject_a, self.subject_b)
    }

    /// Right column text, e.g. `6 vs 5`
    pub fn values(&self) -> String {
        format!("{} vs {}", self.value_a, self.value_b)
    }
}

/// All comparisons reported for a single week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeeklySummary {
    pub week: &'static str,
    pub comparisons: &'static [Comparison],
}

/// Icons shown on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    UserGraduate,
    BookOpen,
    ChalkboardTeacher,
    ChartLine,
}

impl Glyph {
    /// Font Awesome glyph data for this icon
    pub fn icon(self) -> icondata_core::Icon {
        match self {
            Glyph::UserGraduate => icondata::FaUserGraduateSolid,
            Glyph::BookOpen => icondata::FaBookOpenSolid,
            Glyph::ChalkboardTeacher => icondata::FaChalkboardUserSolid,
            Glyph::ChartLine => icondata::FaChartLineSolid,
        }
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Glyph::UserGraduate => write!(f, "user-graduate"),
            Glyph::BookOpen => write!(f, "book-open"),
            Glyph::ChalkboardTeacher => write!(f, "chalkboard-teacher"),
            Glyph::ChartLine => write!(f, "chart-line"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_lookup_by_key() {
        let week = TutorHoursWeek {
            week: "Week 1",
            tutor1: 5,
            tutor2: 8,
            tutor3: 10,
        };

        assert_eq!(week.week(), "Week 1");
        assert_eq!(week.metric("Tutor2"), Some(8.0));
        assert_eq!(week.metric("tutor2"), None);
        assert_eq!(week.metric("students"), None);
    }

    #[test]
    fn test_metric_keys_resolve() {
        let week = SubjectWeek {
            week: "Week 1",
            math: 4,
            science: 3,
            english: 3,
        };

        for key in week.metric_keys() {
            assert!(week.metric(key).is_some(), "key {key} should resolve");
        }
    }

    #[test]
    fn test_record_serializes_with_chart_keys() {
        let week = SubjectWeek {
            week: "Week 2",
            math: 5,
            science: 4,
            english: 3,
        };
        let json = serde_json::to_value(week).unwrap();

        assert_eq!(json["week"], "Week 2");
        assert_eq!(json["Math"], 5);
        assert_eq!(json["English"], 3);
    }

    #[test]
    fn test_comparison_text() {
        let comparison = Comparison {
            subject_a: "Math",
            subject_b: "Science",
            value_a: 6,
            value_b: 5,
        };

        assert_eq!(comparison.label(), "Math vs Science");
        assert_eq!(comparison.values(), "6 vs 5");
    }

    #[test]
    fn test_glyph_display() {
        assert_eq!(Glyph::ChalkboardTeacher.to_string(), "chalkboard-teacher");
        assert!(!Glyph::ChartLine.icon().data.is_empty());
    }
}
