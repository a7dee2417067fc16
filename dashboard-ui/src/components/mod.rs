//! UI Components
//!
//! Leptos renditions of the dashboard model.

pub mod card;
pub mod chart_card;
pub mod icon;
pub mod reveal;
pub mod summary_panel;

pub use card::Card;
pub use chart_card::ChartCardView;
pub use icon::GlyphIcon;
pub use reveal::use_reveal;
pub use summary_panel::SummaryPanelView;
