//! Dashboard Page
//!
//! Header, report heading, metric grid, progress chart and footer.

use leptos::*;
use vitals::DashboardEvent;

use crate::components::{ConsultFooter, Header, LineChart, MetricRowCard};
use crate::state::DashboardContext;

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");
    let on_event = ctx.callback();

    // Only the header reacts to clicks; everything else is fixed at mount
    let header = Signal::derive(move || ctx.snapshot.get().header);
    let snapshot = ctx.snapshot.get_untracked();

    view! {
        <Header header=header on_event=on_event />

        <main class="p-8 flex-1">
            // Report heading
            <div class="flex justify-between items-center mb-8">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">{snapshot.report.title}</h1>
                    <p class="text-gray-500">{snapshot.report.period}</p>
                </div>

                <div class="flex -space-x-2">
                    {snapshot.report.team_avatars
                        .into_iter()
                        .map(|src| view! {
                            <img
                                src=src
                                alt="Team member"
                                class="w-10 h-10 rounded-full border-2 border-white shadow-md"
                            />
                        })
                        .collect_view()}
                </div>
            </div>

            // Metric grid
            <div class="grid grid-cols-2 gap-6 mb-8">
                {snapshot.metrics
                    .into_iter()
                    .map(|row| view! { <MetricRowCard row=row /> })
                    .collect_view()}
            </div>

            <LineChart chart=snapshot.chart />

            <ConsultFooter
                footer=snapshot.footer
                on_cta=Callback::new(move |_| on_event.call(DashboardEvent::FooterCta))
            />
        </main>
    }
}
