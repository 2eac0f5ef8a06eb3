//! Vitals Dashboard
//!
//! Health metrics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Sidebar with profile and navigation
//! - Search box, notification bell and profile dropdown
//! - Metric rows with progress bars
//! - Progress line chart drawn on canvas
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state lives in one `vitals::Dashboard` held in a signal
//! at the root; components receive derived signals and callbacks.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
