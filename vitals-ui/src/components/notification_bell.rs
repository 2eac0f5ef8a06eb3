//! Notification Bell Component
//!
//! Bell button with a count badge and a dropdown panel.

use leptos::*;
use vitals::dashboard::NotificationsSnapshot;
use vitals::Icon;

use super::IconGlyph;

/// Bell, badge and disclosure panel
#[component]
pub fn NotificationBell(
    #[prop(into)]
    notifications: Signal<NotificationsSnapshot>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="relative">
            <button on:click=move |_| on_toggle.call(())>
                <IconGlyph icon=Icon::Bell class="text-gray-600 text-lg" />
                {move || {
                    notifications.get().badge.map(|count| view! {
                        <span class="absolute -top-1 -right-1 bg-red-500 text-white text-xs rounded-full px-1">
                            {count}
                        </span>
                    })
                }}
            </button>

            {move || {
                let snapshot = notifications.get();
                if !snapshot.open {
                    return None;
                }
                Some(view! {
                    <div class="absolute right-0 mt-2 w-48 bg-white shadow-lg rounded-lg z-10">
                        <div class="p-2">
                            {panel_rows(snapshot)}
                        </div>
                    </div>
                })
            }}
        </div>
    }
}

/// Rows of an open panel; the placeholder row is styled muted
fn panel_rows(snapshot: NotificationsSnapshot) -> View {
    let class = row_class(snapshot.placeholder);
    snapshot
        .rows
        .into_iter()
        .map(|text| view! { <div class=class>{text}</div> })
        .collect_view()
}

fn row_class(placeholder: bool) -> &'static str {
    if placeholder {
        "p-2 text-gray-500"
    } else {
        "p-2 border-b hover:bg-gray-100 cursor-pointer"
    }
}
