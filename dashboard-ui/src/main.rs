//! Tutoring Dashboard
//!
//! Client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The dashboard model and chart layout come from the
//! `tutorboard` crate, so the client draws the same page the server renders,
//! with live hover tooltips.

use leptos::*;

mod app;
mod components;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
