//! Application State
//!
//! Shared state accessible by all handlers. The page is composed and rendered
//! once; handlers only read it.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::dashboard::{DashboardPage, DashboardResult};
use crate::render::render_page;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Composed dashboard model
    pub page: Arc<DashboardPage>,
    /// Pre-rendered HTML document for `GET /`
    pub html: Arc<String>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Compose and render the dashboard
    pub fn new(config: ServerConfig) -> DashboardResult<Self> {
        let page = DashboardPage::compose()?;
        Ok(Self::with_page(page, config))
    }

    /// Build state around an already composed page
    pub fn with_page(page: DashboardPage, config: ServerConfig) -> Self {
        let html = render_page(&page);
        tracing::debug!(bytes = html.len(), "Rendered dashboard document");

        Self {
            page: Arc::new(page),
            html: Arc::new(html),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
