//! Static rendering
//!
//! Produces a self-contained HTML document (inline CSS, inline SVG charts, and
//! a small reveal script) from a composed `DashboardPage`. Used by the HTTP
//! host for `GET /` and by `tutorboard-cli render`.

pub mod html;
pub mod svg;

pub use html::{render_card, render_page, render_summary_panel, stylesheet};
pub use svg::render_chart_svg;

/// Escape HTML special characters.
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Math & <Science>"), "Math &amp; &lt;Science&gt;");
        assert_eq!(escape_html(r#"say "hi" 'there'"#), "say &quot;hi&quot; &#39;there&#39;");
        assert_eq!(escape_html("Week 1"), "Week 1");
    }
}
