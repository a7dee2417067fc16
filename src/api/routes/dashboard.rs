//! Dashboard Routes
//!
//! - GET / - Rendered dashboard page
//! - GET /api/v1/dashboard - Composed page model
//! - GET /api/v1/charts - Chart index
//! - GET /api/v1/charts/:id - One chart with its geometry

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ChartListResponse, ChartResponse, ChartSummary};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::{ChartFrame, ChartGeometry, DashboardPage};

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.html.as_ref().clone())
}

/// GET /api/v1/dashboard
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardPage> {
    Json(state.page.as_ref().clone())
}

/// GET /api/v1/charts
pub async fn list_charts(State(state): State<Arc<AppState>>) -> Json<ChartListResponse> {
    let charts: Vec<ChartSummary> = state.page.charts.iter().map(ChartSummary::from).collect();

    Json(ChartListResponse {
        total: charts.len(),
        charts,
    })
}

/// GET /api/v1/charts/:id
pub async fn get_chart(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ChartResponse>> {
    let chart = state.page.chart(&id)?;
    let geometry = ChartGeometry::compute(chart, ChartFrame::default());

    tracing::debug!(chart = %id, "Serving chart geometry");

    Ok(Json(ChartResponse {
        chart: chart.clone(),
        geometry,
    }))
}
