//! Header Component
//!
//! Search box, header buttons, notification bell and profile dropdown.

use leptos::*;
use vitals::config::HeaderButton;
use vitals::dashboard::HeaderSnapshot;
use vitals::{DashboardEvent, Icon};

use super::{IconGlyph, NotificationBell, ProfileDropdown};

/// Page header
#[component]
pub fn Header(
    #[prop(into)]
    header: Signal<HeaderSnapshot>,
    on_event: Callback<DashboardEvent>,
) -> impl IntoView {
    let buttons = header.get_untracked().buttons;
    let placeholder = header.get_untracked().search_placeholder;

    let notifications = Signal::derive(move || header.get().notifications);
    let menu = Signal::derive(move || header.get().profile_menu);

    view! {
        <header class="flex justify-between items-center p-4 bg-white shadow-md">
            // Search
            <div class="flex items-center gap-2">
                <input
                    type="text"
                    class="border border-gray-300 rounded-lg px-4 py-2"
                    placeholder=placeholder
                    prop:value=move || header.get().search_term
                    on:input=move |ev| on_event.call(DashboardEvent::Search(event_target_value(&ev)))
                />
                <button
                    class="p-2 rounded-lg bg-gray-200 hover:bg-gray-300"
                    on:click=move |_| on_event.call(DashboardEvent::SearchSubmit)
                >
                    <IconGlyph icon=Icon::Search />
                </button>
            </div>

            <div class="flex items-center gap-4">
                {buttons
                    .into_iter()
                    .map(|button| view! { <HeaderLink button=button on_event=on_event /> })
                    .collect_view()}

                <NotificationBell
                    notifications=notifications
                    on_toggle=Callback::new(move |_| on_event.call(DashboardEvent::ToggleNotifications))
                />

                <ProfileDropdown
                    menu=menu
                    on_toggle=Callback::new(move |_| on_event.call(DashboardEvent::ToggleProfileMenu))
                    on_action=Callback::new(move |action| on_event.call(DashboardEvent::ProfileAction(action)))
                />
            </div>
        </header>
    }
}

/// Header button; reports the click and does nothing else
#[component]
fn HeaderLink(
    button: HeaderButton,
    on_event: Callback<DashboardEvent>,
) -> impl IntoView {
    let label = button.label.clone();

    view! {
        <button
            class=button_class(button.primary)
            on:click=move |_| on_event.call(DashboardEvent::HeaderButton(label.clone()))
        >
            {button.label}
        </button>
    }
}

fn button_class(primary: bool) -> &'static str {
    if primary {
        "px-4 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600 transition duration-200"
    } else {
        "px-4 py-2 bg-gray-500 text-white rounded-lg hover:bg-gray-600 transition duration-200"
    }
}
