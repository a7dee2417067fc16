//! Data Transfer Objects
//!
//! Response types for the API endpoints that are not model types themselves.

use serde::Serialize;

use crate::dashboard::{ChartCard, ChartGeometry};

/// Entry in the chart index
#[derive(Debug, Serialize)]
pub struct ChartSummary {
    pub id: String,
    pub title: String,
    pub categories: usize,
    /// Metric keys, in line order
    pub series: Vec<String>,
}

impl From<&ChartCard> for ChartSummary {
    fn from(chart: &ChartCard) -> Self {
        Self {
            id: chart.id.clone(),
            title: chart.title.clone(),
            categories: chart.categories.len(),
            series: chart.series.iter().map(|s| s.data_key.clone()).collect(),
        }
    }
}

/// Chart index response
#[derive(Debug, Serialize)]
pub struct ChartListResponse {
    pub charts: Vec<ChartSummary>,
    pub total: usize,
}

/// Single chart with its drawing geometry
#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub chart: ChartCard,
    pub geometry: ChartGeometry,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub charts: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
