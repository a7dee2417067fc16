//! Card Component
//!
//! Summary tile: icon, label, and the value exactly as given.

use leptos::*;
use tutorboard::dashboard::CardItem;

use super::{use_reveal, GlyphIcon};

#[component]
pub fn Card(card: CardItem) -> impl IntoView {
    let (node_ref, style) = use_reveal(card.motion());

    view! {
        <div class="card" node_ref=node_ref style=style>
            <div class="card-icon">
                <GlyphIcon glyph=card.icon class="icon" />
            </div>
            <div>
                <p class="card-label">{card.label}</p>
                <p class="card-value">{card.value}</p>
            </div>
        </div>
    }
}
