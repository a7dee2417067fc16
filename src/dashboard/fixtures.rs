//! Fixture tables
//!
//! Everything the page shows. These are literals maintained by hand; nothing
//! here is derived from anything else.

use super::types::{
    Comparison, Glyph, LineConfig, StudentWeek, SubjectWeek, TutorHoursWeek, WeeklySummary,
};

pub const DASHBOARD_TITLE: &str = "Tutoring Dashboard";

pub const STUDENT_TREND: [StudentWeek; 4] = [
    StudentWeek { week: "Week 1", students: 10 },
    StudentWeek { week: "Week 2", students: 12 },
    StudentWeek { week: "Week 3", students: 16 },
    StudentWeek { week: "Week 4", students: 20 },
];

pub const TUTOR_HOURS: [TutorHoursWeek; 4] = [
    TutorHoursWeek { week: "Week 1", tutor1: 5, tutor2: 8, tutor3: 10 },
    TutorHoursWeek { week: "Week 2", tutor1: 7, tutor2: 10, tutor3: 12 },
    TutorHoursWeek { week: "Week 3", tutor1: 10, tutor2: 12, tutor3: 14 },
    TutorHoursWeek { week: "Week 4", tutor1: 12, tutor2: 14, tutor3: 18 },
];

pub const SUBJECT_TREND: [SubjectWeek; 4] = [
    SubjectWeek { week: "Week 1", math: 4, science: 3, english: 3 },
    SubjectWeek { week: "Week 2", math: 5, science: 4, english: 3 },
    SubjectWeek { week: "Week 3", math: 6, science: 5, english: 4 },
    SubjectWeek { week: "Week 4", math: 8, science: 6, english: 5 },
];

pub const WEEKLY_SUMMARY: [WeeklySummary; 2] = [
    WeeklySummary {
        week: "Week 3",
        comparisons: &[
            Comparison { subject_a: "Math", subject_b: "Science", value_a: 6, value_b: 5 },
            Comparison { subject_a: "Math", subject_b: "English", value_a: 6, value_b: 4 },
        ],
    },
    WeeklySummary {
        week: "Week 4",
        comparisons: &[
            Comparison { subject_a: "Math", subject_b: "Science", value_a: 8, value_b: 6 },
            Comparison { subject_a: "Science", subject_b: "English", value_a: 6, value_b: 5 },
        ],
    },
];

/// (icon, label, value) for the summary tiles, in display order
pub const SUMMARY_CARDS: [(Glyph, &str, &str); 4] = [
    (Glyph::UserGraduate, "Total Students", "20"),
    (Glyph::BookOpen, "Most Popular Subject", "Math"),
    (Glyph::ChalkboardTeacher, "Top Tutor", "Tutor 3"),
    (Glyph::ChartLine, "Total Hours", "84 hrs"),
];

pub const STUDENT_LINES: [LineConfig; 1] = [LineConfig::new("students", "#6366F1")];

pub const TUTOR_LINES: [LineConfig; 3] = [
    LineConfig::new("Tutor1", "#3B82F6"),
    LineConfig::new("Tutor2", "#10B981"),
    LineConfig::new("Tutor3", "#F59E0B"),
];

pub const SUBJECT_LINES: [LineConfig; 3] = [
    LineConfig::new("Math", "#EF4444"),
    LineConfig::new("Science", "#8B5CF6"),
    LineConfig::new("English", "#0EA5E9"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::types::WeekRecord;

    fn assert_keys_present<R: WeekRecord>(data: &[R], lines: &[LineConfig]) {
        for record in data {
            for line in lines {
                assert!(
                    record.metric(line.data_key).is_some(),
                    "{} lacks {}",
                    record.week(),
                    line.data_key
                );
            }
        }
    }

    #[test]
    fn test_every_line_key_exists_on_every_record() {
        assert_keys_present(&STUDENT_TREND, &STUDENT_LINES);
        assert_keys_present(&TUTOR_HOURS, &TUTOR_LINES);
        assert_keys_present(&SUBJECT_TREND, &SUBJECT_LINES);
    }

    #[test]
    fn test_weeks_are_chronological() {
        let expected = ["Week 1", "Week 2", "Week 3", "Week 4"];
        let students: Vec<_> = STUDENT_TREND.iter().map(|r| r.week).collect();
        let tutors: Vec<_> = TUTOR_HOURS.iter().map(|r| r.week).collect();
        let subjects: Vec<_> = SUBJECT_TREND.iter().map(|r| r.week).collect();

        assert_eq!(students, expected);
        assert_eq!(tutors, expected);
        assert_eq!(subjects, expected);
    }

    #[test]
    fn test_weekly_summary_shape() {
        assert_eq!(WEEKLY_SUMMARY.len(), 2);
        assert_eq!(WEEKLY_SUMMARY[0].week, "Week 3");
        assert_eq!(WEEKLY_SUMMARY[0].comparisons.len(), 2);
        assert_eq!(WEEKLY_SUMMARY[1].comparisons[1].subject_a, "Science");
    }
}
