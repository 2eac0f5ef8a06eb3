//! App Root Component
//!
//! Mounts the dashboard state and lays out the page regions.

use leptos::*;
use vitals::Config;

use crate::components::Sidebar;
use crate::pages::DashboardPage;
use crate::state::provide_dashboard;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide dashboard state to all components
    let ctx = provide_dashboard(Config::default());
    let sidebar = ctx.snapshot.get_untracked().sidebar;

    view! {
        <div class="flex flex-col h-screen bg-gray-50">
            <Sidebar sidebar=sidebar on_event=ctx.callback() />

            // Main content area
            <div class="flex-1 ml-64 flex flex-col">
                <DashboardPage />
            </div>
        </div>
    }
}
