//! Tutorboard HTTP host
//!
//! Serves the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Rendered dashboard (HTML, inline SVG charts)
//! - `GET /app/*` - Compiled WASM client, when `server.ui_dist_dir` is set
//!
//! ## Model
//! - `GET /api/v1/dashboard` - Composed page model
//! - `GET /api/v1/charts` - Chart index
//! - `GET /api/v1/charts/:id` - One chart with its geometry
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use tutorboard::api::{serve, AppState};
//! use tutorboard::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let state = AppState::new(config.clone())?;
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/dashboard", get(routes::dashboard::get_dashboard))
        .route("/charts", get(routes::dashboard::list_charts))
        .route("/charts/:id", get(routes::dashboard::get_chart));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let timeout = Duration::from_secs(state.config.request_timeout_secs);
    let ui_dist_dir = state.config.ui_dist_dir.clone();

    // Create shared state
    let shared_state = Arc::new(state);

    let mut router = Router::new()
        .route("/", get(routes::dashboard::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback(not_found);

    if let Some(dir) = ui_dist_dir {
        tracing::info!("Serving WASM client from {}", dir);
        router = router.nest_service("/app", ServeDir::new(dir));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .with_state(shared_state)
}

async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Tutorboard listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Tutorboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(ServerConfig::default()).unwrap();
        build_router(state)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_health_live() {
        let (status, _) = get(create_test_app(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, body) = get(create_test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["charts"], 3);
    }

    #[tokio::test]
    async fn test_index_serves_page() {
        let (status, body) = get(create_test_app(), "/").await;
        assert_eq!(status, StatusCode::OK);

        let html = String::from_utf8(body).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h3>Week 4 Summary</h3>"));
    }

    #[tokio::test]
    async fn test_dashboard_model() {
        let (status, body) = get(create_test_app(), "/api/v1/dashboard").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["title"], "Tutoring Dashboard");
        assert_eq!(json["cards"].as_array().unwrap().len(), 4);
        assert_eq!(json["cards"][0]["icon"], "user-graduate");
        assert_eq!(json["summaries"][1]["rows"][1]["label"], "Science vs English");
    }

    #[tokio::test]
    async fn test_list_charts() {
        let (status, body) = get(create_test_app(), "/api/v1/charts").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["total"], 3);
        assert_eq!(json["charts"][1]["id"], "tutor-hours-per-week");
        assert_eq!(
            json["charts"][2]["series"],
            serde_json::json!(["Math", "Science", "English"])
        );
    }

    #[tokio::test]
    async fn test_get_chart() {
        let (status, body) = get(create_test_app(), "/api/v1/charts/students-over-time").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["chart"]["series"][0]["values"],
            serde_json::json!([10.0, 12.0, 16.0, 20.0])
        );
        assert_eq!(json["geometry"]["lines"][0]["points"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_unknown_chart() {
        let (status, body) = get(create_test_app(), "/api/v1/charts/revenue").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "CHART_NOT_FOUND");
        assert!(json["request_id"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = get(create_test_app(), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
