//! Dashboard error types
//!
//! The fixture tables are compile-time literals, so the only thing that can go
//! wrong is an authoring mistake: a line bound to a metric the series does not
//! carry, or a series that repeats a week.

use thiserror::Error;

/// Data-integrity errors raised while composing charts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// A line config refers to a metric absent from one of the records
    #[error("Chart '{chart}': metric '{data_key}' is missing from {week}")]
    MissingDataKey {
        chart: String,
        data_key: String,
        week: String,
    },

    /// Two records of the same series share a week label
    #[error("Chart '{chart}': week '{week}' appears more than once")]
    DuplicateWeek { chart: String, week: String },

    /// Two line configs bind the same metric
    #[error("Chart '{chart}': metric '{data_key}' is bound to more than one line")]
    DuplicateDataKey { chart: String, data_key: String },

    /// Requested chart id is not part of the page
    #[error("Chart not found: {0}")]
    ChartNotFound(String),
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
