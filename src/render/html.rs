//! HTML page rendering
//!
//! One document, no external assets. Animated elements are emitted in their
//! hidden state with a `data-reveal` marker; the inline script reveals
//! mount-triggered ones on the first frame and viewport-triggered ones the
//! first time they intersect, then stops observing them.

use crate::dashboard::{
    CardItem, ChartCard, ChartFrame, ChartGeometry, DashboardPage, Glyph, Motion, RevealTrigger,
    SummaryPanel,
};

use super::escape_html;
use super::svg::render_chart_svg;

/// Render the full dashboard document
pub fn render_page(page: &DashboardPage) -> String {
    let cards: String = page.cards.iter().map(render_card).collect();
    let charts: String = page.charts.iter().map(render_chart_card).collect();
    let summaries: String = page.summaries.iter().map(render_summary_panel).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
    <noscript><style>[data-reveal] {{ opacity: 1 !important; transform: none !important; }}</style></noscript>
</head>
<body>
    <main class="page">
        <h1 class="page-title" {header_reveal}>{icon} {title}</h1>
        <section class="cards">{cards}</section>
        <section class="charts">{charts}</section>
        <section class="summaries">{summaries}</section>
    </main>
    <script>{js}</script>
</body>
</html>
"#,
        title = escape_html(&page.title),
        css = stylesheet(),
        js = inline_javascript(),
        header_reveal = reveal_attrs(page.header_motion()),
        icon = render_icon(page.title_icon, "title-icon"),
        cards = cards,
        charts = charts,
        summaries = summaries,
    )
}

/// Summary tile: icon, label, and the value exactly as given
pub fn render_card(card: &CardItem) -> String {
    format!(
        r#"<div class="card" {reveal}><div class="card-icon">{icon}</div><div><p class="card-label">{label}</p><p class="card-value">{value}</p></div></div>"#,
        reveal = reveal_attrs(card.motion()),
        icon = render_icon(card.icon, "icon"),
        label = escape_html(&card.label),
        value = escape_html(&card.value),
    )
}

fn render_chart_card(chart: &ChartCard) -> String {
    let geometry = ChartGeometry::compute(chart, ChartFrame::default());
    format!(
        r#"<div class="chart-card panel" id="{id}" {reveal}><h2>{title}</h2>{svg}</div>"#,
        id = escape_html(&chart.id),
        reveal = reveal_attrs(Motion::CHART),
        title = escape_html(&chart.title),
        svg = render_chart_svg(chart, &geometry),
    )
}

/// Weekly comparison panel with one row per comparison
pub fn render_summary_panel(panel: &SummaryPanel) -> String {
    let rows: String = panel
        .rows
        .iter()
        .map(|row| {
            format!(
                r#"<div class="summary-row"><span>{label}</span><span class="summary-values">{values}</span></div>"#,
                label = escape_html(&row.label),
                values = escape_html(&row.values),
            )
        })
        .collect();

    format!(
        r#"<div class="summary-panel" {reveal}><div class="panel hoverable"><h3>{heading}</h3><div class="summary-rows">{rows}</div></div></div>"#,
        reveal = reveal_attrs(panel.motion()),
        heading = escape_html(&panel.heading()),
        rows = rows,
    )
}

fn reveal_attrs(motion: Motion) -> String {
    let trigger = match motion.trigger {
        RevealTrigger::Mount => "mount",
        RevealTrigger::FirstViewportEntry => "viewport",
    };
    format!(
        r#"data-reveal="{trigger}" style="{style}""#,
        style = motion.hidden_style()
    )
}

fn render_icon(glyph: Glyph, class: &str) -> String {
    let icon = glyph.icon();
    format!(
        r#"<svg class="{class}" data-glyph="{glyph}" viewBox="{view_box}" width="1em" height="1em" fill="{fill}" aria-hidden="true">{data}</svg>"#,
        view_box = icon.view_box.unwrap_or("0 0 512 512"),
        fill = icon.fill.unwrap_or("currentColor"),
        data = icon.data,
    )
}

/// Page stylesheet, shared with the WASM client
pub fn stylesheet() -> &'static str {
    r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: ui-sans-serif, system-ui, -apple-system, sans-serif; background: #f3f4f6; color: #1f2937; }
.page { min-height: 100vh; padding: 1.5rem; }
.page-title { display: flex; align-items: center; gap: 0.5rem; font-size: 1.875rem; font-weight: 700; margin: 0 0 1.5rem; }
.page-title h1 { margin: 0; font-size: inherit; font-weight: inherit; }
.title-icon, .card-icon { color: #2563eb; }
.cards { display: grid; grid-template-columns: 1fr; gap: 1rem; margin-bottom: 1.5rem; }
.card { display: flex; align-items: center; gap: 1rem; background: #fff; padding: 1rem; border-radius: 0.75rem; box-shadow: 0 1px 2px rgba(0,0,0,0.05); }
.card-icon { font-size: 1.5rem; }
.card-label { margin: 0; font-size: 0.875rem; color: #6b7280; }
.card-value { margin: 0; font-size: 1.125rem; font-weight: 600; }
.charts { display: grid; grid-template-columns: 1fr; gap: 1.5rem; margin-bottom: 1.5rem; }
.panel { background: #fff; border-radius: 0.75rem; box-shadow: 0 1px 2px rgba(0,0,0,0.05); }
.chart-card { padding: 1.5rem; }
.chart-card h2 { font-size: 1.125rem; font-weight: 600; margin: 0 0 1rem; }
.chart text { font-size: 12px; fill: #666; }
.chart .legend text { font-size: 12px; }
.tooltip-target .cursor { opacity: 0; }
.tooltip-target:hover .cursor { opacity: 1; }
.chart-wrap { position: relative; }
.chart-tooltip { position: absolute; top: 0.5rem; transform: translateX(-50%); background: #fff; border: 1px solid #ccc; padding: 0.5rem 0.75rem; font-size: 0.875rem; pointer-events: none; white-space: nowrap; }
.chart-tooltip p { margin: 0; }
.summaries { display: grid; grid-template-columns: 1fr; gap: 1rem; }
.summary-panel .panel { padding: 1rem; box-shadow: 0 4px 6px rgba(0,0,0,0.1); transition: box-shadow 300ms; }
.summary-panel .panel:hover { box-shadow: 0 10px 15px rgba(0,0,0,0.1); }
.summary-panel h3 { font-size: 1rem; font-weight: 600; margin: 0 0 0.5rem; }
.summary-rows { display: flex; flex-direction: column; gap: 0.5rem; }
.summary-row { display: flex; justify-content: space-between; font-size: 0.875rem; color: #374151; }
.summary-values { font-weight: 500; color: #111827; }
@media (min-width: 768px) {
    .cards { grid-template-columns: repeat(4, 1fr); }
    .summaries { grid-template-columns: repeat(2, 1fr); }
}
@media (min-width: 1024px) {
    .charts { grid-template-columns: repeat(2, 1fr); }
    .summaries { grid-template-columns: repeat(3, 1fr); }
}
"#
}

fn inline_javascript() -> &'static str {
    r#"
(function () {
    function reveal(el) {
        el.style.opacity = '1';
        el.style.transform = 'translateY(0px)';
    }
    var mounted = document.querySelectorAll('[data-reveal="mount"]');
    // Commit the hidden style before revealing so the transition has a start
    mounted.forEach(function (el) { void el.offsetHeight; });
    requestAnimationFrame(function () {
        requestAnimationFrame(function () { mounted.forEach(reveal); });
    });

    var pending = document.querySelectorAll('[data-reveal="viewport"]');
    if (!('IntersectionObserver' in window)) {
        pending.forEach(reveal);
        return;
    }
    var observer = new IntersectionObserver(function (entries) {
        entries.forEach(function (entry) {
            if (entry.isIntersecting) {
                reveal(entry.target);
                observer.unobserve(entry.target);
            }
        });
    });
    pending.forEach(function (el) { observer.observe(el); });
})();
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_html() -> String {
        render_page(&DashboardPage::compose().unwrap())
    }

    #[test]
    fn test_page_structure() {
        let html = page_html();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Tutoring Dashboard</title>"));
        assert_eq!(html.matches(r#"<div class="card" "#).count(), 4);
        assert_eq!(html.matches(r#"<div class="chart-card panel""#).count(), 3);
        assert_eq!(html.matches(r#"<div class="summary-panel" "#).count(), 2);
        assert_eq!(html.matches(r#"<div class="summary-row">"#).count(), 4);
    }

    #[test]
    fn test_chart_titles_in_order() {
        let html = page_html();
        let a = html.find("<h2>Students Over Time</h2>").unwrap();
        let b = html.find("<h2>Tutor Hours Per Week</h2>").unwrap();
        let c = html.find("<h2>Subject Popularity Over Time</h2>").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_card_renders_value_verbatim() {
        let card = CardItem::new(Glyph::ChartLine, "Total Hours", "84 hrs");
        let html = render_card(&card);

        assert!(html.contains(r#"<p class="card-value">84 hrs</p>"#));
        assert!(html.contains(r#"<p class="card-label">Total Hours</p>"#));
        assert!(html.contains(r#"data-glyph="chart-line""#));
        assert!(html.contains(r#"data-reveal="mount""#));

        let card = CardItem::new(Glyph::BookOpen, "Ratio", "1,000.0");
        assert!(render_card(&card).contains(">1,000.0</p>"));
    }

    #[test]
    fn test_week_three_summary_panel() {
        let page = DashboardPage::compose().unwrap();
        let html = render_summary_panel(&page.summaries[0]);

        assert!(html.contains("<h3>Week 3 Summary</h3>"));
        assert!(html.contains(
            r#"<span>Math vs Science</span><span class="summary-values">6 vs 5</span>"#
        ));
        assert!(html.contains(
            r#"<span>Math vs English</span><span class="summary-values">6 vs 4</span>"#
        ));
        assert_eq!(html.matches(r#"class="summary-row""#).count(), 2);
    }

    #[test]
    fn test_reveal_markers() {
        let html = page_html();

        // header + 4 cards reveal on mount; 3 charts + 2 panels on first view
        assert_eq!(html.matches(r#"data-reveal="mount" style="#).count(), 5);
        assert_eq!(html.matches(r#"data-reveal="viewport" style="#).count(), 5);
        assert!(html.contains("observer.unobserve(entry.target)"));
    }

    #[test]
    fn test_mount_reveal_waits_for_hidden_style() {
        let js = inline_javascript();

        let flush = js.find("void el.offsetHeight").unwrap();
        let reveal = js.find("mounted.forEach(reveal)").unwrap();
        assert!(flush < reveal);
        assert!(js.contains(
            "requestAnimationFrame(function () {\n        requestAnimationFrame(function () { mounted.forEach(reveal); });"
        ));
    }

    #[test]
    fn test_empty_summary_panel() {
        let panel = SummaryPanel {
            week: "Week 9".to_string(),
            rows: Vec::new(),
        };
        let html = render_summary_panel(&panel);
        assert!(html.contains("<h3>Week 9 Summary</h3>"));
        assert!(!html.contains(r#"class="summary-row""#));
    }
}
