//! # Tutorboard
//!
//! Tutoring Dashboard - a single-page analytics view for a tutoring center:
//! summary cards, three weekly line charts, and weekly subject comparisons,
//! all drawn from fixed in-memory tables.
//!
//! ## Modules
//!
//! - [`dashboard`]: Fixtures, the generic chart model, layout, reveal state, page composition
//! - [`render`]: Self-contained HTML document with inline SVG charts
//! - [`api`]: HTTP host with Axum (`server` feature)
//! - [`config`]: TOML config with environment overrides (`server` feature)
//! - [`telemetry`]: `tracing` subscriber setup (`server` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use tutorboard::dashboard::DashboardPage;
//! use tutorboard::render::render_page;
//!
//! let page = DashboardPage::compose().unwrap();
//! assert_eq!(page.cards.len(), 4);
//! assert_eq!(page.charts.len(), 3);
//!
//! let html = render_page(&page);
//! assert!(html.contains("Students Over Time"));
//! ```

pub mod dashboard;
pub mod render;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod telemetry;

pub use dashboard::{ChartCard, DashboardError, DashboardPage, DashboardResult, WeekRecord};
pub use render::render_page;
