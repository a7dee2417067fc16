//! Summary Panel Component
//!
//! Weekly subject comparisons, one row per comparison.

use leptos::*;
use tutorboard::dashboard::SummaryPanel;

use super::use_reveal;

#[component]
pub fn SummaryPanelView(panel: SummaryPanel) -> impl IntoView {
    let (node_ref, style) = use_reveal(panel.motion());
    let heading = panel.heading();

    view! {
        <div class="summary-panel" node_ref=node_ref style=style>
            <div class="panel hoverable">
                <h3>{heading}</h3>
                <div class="summary-rows">
                    {panel
                        .rows
                        .into_iter()
                        .map(|row| view! {
                            <div class="summary-row">
                                <span>{row.label}</span>
                                <span class="summary-values">{row.values}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
