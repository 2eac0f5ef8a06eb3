//! Sidebar Component
//!
//! Profile card and navigation links. Links report clicks but navigate
//! nowhere.

use leptos::*;
use vitals::dashboard::{NavEntry, SidebarSnapshot};
use vitals::DashboardEvent;

/// Fixed sidebar with profile and navigation
#[component]
pub fn Sidebar(
    sidebar: SidebarSnapshot,
    on_event: Callback<DashboardEvent>,
) -> impl IntoView {
    let profile = sidebar.profile;

    view! {
        <div
            class="w-64 flex flex-col fixed h-full"
            style="background: linear-gradient(180deg, #3498db 0%, #2ecc71 100%)"
        >
            <div class="p-6">
                // Profile card
                <div class="flex items-center gap-4 mb-8">
                    <div class="relative">
                        <img
                            src=profile.avatar_url
                            alt="Profile"
                            class="w-12 h-12 rounded-full border-2 border-white shadow-md"
                        />
                        <div class="absolute -top-1 -right-1 w-4 h-4 bg-red-500 rounded-full flex items-center justify-center text-white text-xs">
                            {profile.badge_count}
                        </div>
                    </div>
                    <div>
                        <h2 class="text-white font-semibold">{profile.name}</h2>
                        <p class="text-white/70 text-sm">{profile.email}</p>
                    </div>
                </div>

                // Navigation links
                <nav class="space-y-4">
                    {sidebar.nav
                        .into_iter()
                        .map(|entry| view! { <NavLink entry=entry on_event=on_event /> })
                        .collect_view()}
                </nav>
            </div>
        </div>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    entry: NavEntry,
    on_event: Callback<DashboardEvent>,
) -> impl IntoView {
    let label = entry.label.clone();

    view! {
        <a
            href="#"
            class=nav_class(entry.active)
            on:click=move |ev| {
                ev.prevent_default();
                on_event.call(DashboardEvent::Nav(label.clone()));
            }
        >
            {entry.label}
        </a>
    }
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "block px-4 py-2 rounded-lg text-white/70 hover:bg-white/10 transition-colors bg-white/10"
    } else {
        "block px-4 py-2 rounded-lg text-white/70 hover:bg-white/10 transition-colors"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_is_highlighted() {
        assert!(nav_class(true).ends_with("bg-white/10"));
        assert!(!nav_class(false).ends_with(" bg-white/10"));
    }
}
