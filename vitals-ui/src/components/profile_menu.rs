//! Profile Menu Component
//!
//! Header avatar with a dropdown of account actions.

use leptos::*;
use vitals::dashboard::ProfileMenuSnapshot;
use vitals::ProfileAction;

/// Avatar button and action dropdown
#[component]
pub fn ProfileDropdown(
    #[prop(into)]
    menu: Signal<ProfileMenuSnapshot>,
    on_toggle: Callback<()>,
    on_action: Callback<ProfileAction>,
) -> impl IntoView {
    view! {
        <div class="relative">
            <img
                src=move || menu.get().avatar_url
                alt="Profile"
                class="w-10 h-10 rounded-full cursor-pointer"
                on:click=move |_| on_toggle.call(())
            />

            {move || {
                let snapshot = menu.get();
                if !snapshot.open {
                    return None;
                }
                Some(view! {
                    <div class="absolute right-0 mt-2 w-48 bg-white shadow-lg rounded-lg z-10">
                        <div class="p-2">
                            {snapshot.actions
                                .into_iter()
                                .map(|action| view! {
                                    <div
                                        class="p-2 hover:bg-gray-100 cursor-pointer"
                                        on:click=move |_| on_action.call(action)
                                    >
                                        {action.label()}
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                })
            }}
        </div>
    }
}
