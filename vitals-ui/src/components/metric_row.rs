//! Metric Row Component
//!
//! Displays a single metric with status, value and progress bar.

use leptos::*;
use vitals::{MetricRow, ProgressBar};

use super::IconGlyph;

/// Metric row card
#[component]
pub fn MetricRowCard(row: MetricRow) -> impl IntoView {
    let value_text = row.value_text();
    let icon_style = row.icon_style();
    let progress = row.progress();

    view! {
        <div class="mb-6 p-4 transition-transform transform hover:scale-105 rounded-lg shadow-md bg-white hover:shadow-lg">
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-4">
                    <div
                        class="w-10 h-10 rounded-lg flex items-center justify-center"
                        style=icon_style
                    >
                        <IconGlyph icon=row.icon class="text-lg" />
                    </div>
                    <div>
                        <h3 class="text-gray-900 font-medium">{row.title}</h3>
                        <p class="text-gray-500 text-sm">{row.status}</p>
                    </div>
                </div>
                <div class="flex items-center gap-4">
                    <span class="font-semibold">{value_text}</span>
                    <IconGlyph icon=row.overflow class="text-gray-400 cursor-pointer hover:text-gray-600" />
                </div>
            </div>

            <div class="mt-3">
                <ProgressTrack bar=progress />
            </div>
        </div>
    }
}

/// Track with a filled segment
#[component]
pub fn ProgressTrack(bar: ProgressBar) -> impl IntoView {
    view! {
        <div class="w-full bg-gray-200 rounded-full h-2">
            <div
                class="h-2 rounded-full transition-all duration-300"
                style=bar.fill_style()
            />
        </div>
    }
}
