//! Icon Component

use leptos::*;
use vitals::Icon;

/// Glyph for an icon handle
#[component]
pub fn IconGlyph(
    icon: Icon,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    view! {
        <span class=format!("icon icon-{} {}", icon.name(), class) aria-hidden="true">
            {icon.glyph()}
        </span>
    }
}
