//! Tutoring dashboard model
//!
//! Pure, I/O-free description of the page:
//!
//! - [`fixtures`]: the literal data tables
//! - [`chart`]: generic week-axis chart model
//! - [`layout`]: SVG geometry for a chart
//! - [`reveal`]: one-shot entrance animation state
//! - [`page`]: composition of the whole dashboard

pub mod chart;
pub mod error;
pub mod fixtures;
pub mod layout;
pub mod page;
pub mod reveal;
pub mod types;

pub use chart::{validate_lines, ChartCard, Series, Tooltip, TooltipEntry, YAxis};
pub use error::{DashboardError, DashboardResult};
pub use layout::{ChartFrame, ChartGeometry, LineGeometry, PlotPoint};
pub use page::{CardItem, ComparisonRow, DashboardPage, SummaryPanel};
pub use reveal::{Motion, RevealState, RevealTrigger};
pub use types::{
    Comparison, Glyph, LineConfig, StudentWeek, SubjectWeek, TutorHoursWeek, WeekRecord,
    WeeklySummary,
};
