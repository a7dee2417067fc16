//! Dashboard Page
//!
//! Header, summary cards, the three charts, and the weekly comparison panels.

use leptos::*;
use tutorboard::dashboard::DashboardPage;

use crate::components::{use_reveal, Card, ChartCardView, GlyphIcon, SummaryPanelView};

/// Dashboard page component
#[component]
pub fn Dashboard(page: DashboardPage) -> impl IntoView {
    let (header_ref, header_style) = use_reveal(page.header_motion());
    let DashboardPage {
        title,
        title_icon,
        cards,
        charts,
        summaries,
    } = page;

    view! {
        <main class="page">
            <div class="page-title" node_ref=header_ref style=header_style>
                <GlyphIcon glyph=title_icon class="title-icon" />
                <h1>{title}</h1>
            </div>

            <section class="cards">
                {cards.into_iter().map(|card| view! { <Card card=card /> }).collect_view()}
            </section>

            <section class="charts">
                {charts
                    .into_iter()
                    .map(|chart| view! { <ChartCardView chart=chart /> })
                    .collect_view()}
            </section>

            <section class="summaries">
                {summaries
                    .into_iter()
                    .map(|panel| view! { <SummaryPanelView panel=panel /> })
                    .collect_view()}
            </section>
        </main>
    }
}
