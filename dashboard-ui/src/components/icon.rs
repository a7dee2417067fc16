//! Glyph Icon Component

use leptos::*;
use tutorboard::dashboard::Glyph;

/// Inline SVG for a dashboard glyph
#[component]
pub fn GlyphIcon(
    glyph: Glyph,
    /// Extra class on the `<svg>`
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let icon: icondata_core::Icon = glyph.icon();

    view! {
        <svg
            class=class
            data-glyph=glyph.to_string()
            viewBox=icon.view_box.unwrap_or("0 0 512 512")
            width="1em"
            height="1em"
            fill=icon.fill.unwrap_or("currentColor")
            aria-hidden="true"
            inner_html=icon.data
        ></svg>
    }
}
