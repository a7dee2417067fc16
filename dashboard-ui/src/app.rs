//! App Root Component
//!
//! Composes the dashboard once and hands it to the page.

use leptos::*;
use tutorboard::dashboard::DashboardPage;
use tutorboard::render::stylesheet;

use crate::pages::Dashboard;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let page = DashboardPage::compose();

    view! {
        <style>{stylesheet()}</style>
        {match page {
            Ok(page) => view! { <Dashboard page=page /> }.into_view(),
            Err(e) => {
                web_sys::console::error_1(&format!("Invalid dashboard data: {}", e).into());
                view! { <DataError message=e.to_string() /> }.into_view()
            }
        }}
    }
}

/// Shown when the fixtures fail validation
#[component]
fn DataError(message: String) -> impl IntoView {
    view! {
        <main class="page">
            <h1 class="page-title">"Dashboard unavailable"</h1>
            <p class="card-label">{message}</p>
        </main>
    }
}
