//! Global Application State
//!
//! Reactive wrapper around `vitals::Dashboard` using Leptos signals.

use leptos::*;
use vitals::{Config, Dashboard, DashboardEvent, DashboardSnapshot};

/// Dashboard state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardContext {
    /// The composition root; every click goes through it
    pub dashboard: RwSignal<Dashboard>,
    /// Snapshot recomputed whenever the dashboard changes
    pub snapshot: Memo<DashboardSnapshot>,
}

impl DashboardContext {
    pub fn new(config: Config) -> Self {
        let dashboard = create_rw_signal(Dashboard::from_config(config));
        let snapshot = create_memo(move |_| dashboard.with(Dashboard::snapshot));
        Self {
            dashboard,
            snapshot,
        }
    }

    /// Apply an event; the snapshot memo skips updates that change nothing
    pub fn dispatch(&self, event: DashboardEvent) {
        let mut changed = false;
        self.dashboard.update(|d| changed = d.dispatch(event.clone()));
        web_sys::console::log_1(&event_log_line(&event, changed).into());
    }

    /// Event sink for child components
    pub fn callback(&self) -> Callback<DashboardEvent> {
        let ctx = *self;
        Callback::new(move |event| ctx.dispatch(event))
    }
}

/// Console line for a dispatched event
fn event_log_line(event: &DashboardEvent, changed: bool) -> String {
    if changed {
        format!("[vitals] {:?}", event)
    } else {
        format!("[vitals] {:?} (no change)", event)
    }
}

/// Mount the dashboard and provide it to the component tree
pub fn provide_dashboard(config: Config) -> DashboardContext {
    let ctx = DashboardContext::new(config);
    provide_context(ctx);
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_line() {
        assert_eq!(
            event_log_line(&DashboardEvent::ToggleNotifications, true),
            "[vitals] ToggleNotifications"
        );
        assert_eq!(
            event_log_line(&DashboardEvent::FooterCta, false),
            "[vitals] FooterCta (no change)"
        );
    }
}
