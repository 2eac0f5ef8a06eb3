//! Footer Component

use leptos::*;
use vitals::FooterConfig;

/// Call-to-action banner at the bottom of the report
#[component]
pub fn ConsultFooter(
    footer: FooterConfig,
    on_cta: Callback<()>,
) -> impl IntoView {
    view! {
        <footer class="bg-black text-white p-4 flex justify-between items-center">
            <div>
                <h2 class="text-xl font-semibold">{footer.heading}</h2>
                <p>{footer.body}</p>
            </div>
            <button
                class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition duration-200"
                on:click=move |_| on_cta.call(())
            >
                {footer.button}
            </button>
        </footer>
    }
}
