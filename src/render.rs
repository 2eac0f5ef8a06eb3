//! Plain-text rendering of a dashboard snapshot
//!
//! Used by the CLI to preview the page in a terminal. The output is
//! deterministic for a given snapshot.

use std::fmt;

use crate::dashboard::DashboardSnapshot;
use crate::widgets::ProgressBar;

/// Cells in a full (100%) progress track
pub const TRACK_CELLS: usize = 20;

/// Render a progress bar as `[#####.....]`
///
/// Values above 100 keep drawing `#` past the closing bracket, and values
/// at or below 0 leave the track empty.
pub fn progress_text(bar: &ProgressBar) -> String {
    let filled = bar.filled_cells(TRACK_CELLS);
    let inside = filled.min(TRACK_CELLS);
    let overflow = filled - inside;

    format!(
        "[{}{}]{}",
        "#".repeat(inside),
        ".".repeat(TRACK_CELLS - inside),
        "#".repeat(overflow)
    )
}

/// Render the whole page, top to bottom
pub fn render_text(snapshot: &DashboardSnapshot) -> String {
    TextPage(snapshot).to_string()
}

/// A snapshot laid out as terminal text
pub struct TextPage<'a>(pub &'a DashboardSnapshot);

impl fmt::Display for TextPage<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_page(out, self.0)
    }
}

fn write_page(out: &mut fmt::Formatter<'_>, snapshot: &DashboardSnapshot) -> fmt::Result {
    let sidebar = &snapshot.sidebar;
    let header = &snapshot.header;

    // Sidebar
    writeln!(
        out,
        "{} ({})  [{}]",
        sidebar.profile.name, sidebar.profile.email, sidebar.profile.badge_count
    )?;
    let nav: Vec<String> = sidebar
        .nav
        .iter()
        .map(|entry| {
            if entry.active {
                format!("*{}*", entry.label)
            } else {
                entry.label.clone()
            }
        })
        .collect();
    writeln!(out, "{}", nav.join(" | "))?;
    writeln!(out)?;

    // Header
    let search = if header.search_term.is_empty() {
        header.search_placeholder.as_str()
    } else {
        header.search_term.as_str()
    };
    let buttons: Vec<String> = header
        .buttons
        .iter()
        .map(|b| format!("[{}]", b.label))
        .collect();
    let badge = header
        .notifications
        .badge
        .map(|n| format!("({})", n))
        .unwrap_or_default();
    writeln!(
        out,
        "🔍 {}  {}  {}{}  👤",
        search,
        buttons.join(" "),
        header.notifications.icon.glyph(),
        badge
    )?;

    if header.notifications.open {
        writeln!(out, "  Notifications:")?;
        for row in &header.notifications.rows {
            writeln!(out, "    - {}", row)?;
        }
    }
    if header.profile_menu.open {
        writeln!(out, "  Profile menu:")?;
        for action in &header.profile_menu.actions {
            writeln!(out, "    - {}", action)?;
        }
    }
    writeln!(out)?;

    // Report
    writeln!(out, "{}", snapshot.report.title)?;
    writeln!(out, "{}", snapshot.report.period)?;
    writeln!(out)?;

    // Metrics
    let title_width = snapshot
        .metrics
        .iter()
        .map(|m| m.title.chars().count())
        .max()
        .unwrap_or(0);
    for row in &snapshot.metrics {
        writeln!(
            out,
            "{} {:<width$}  {:>5} {}  {}",
            row.icon.glyph(),
            row.title,
            row.value_text(),
            row.overflow.glyph(),
            progress_text(&row.progress()),
            width = title_width
        )?;
        writeln!(out, "   {}", row.status)?;
    }
    writeln!(out)?;

    // Chart
    writeln!(out, "{}", snapshot.chart.title)?;
    writeln!(out, "{}", snapshot.chart.sparkline())?;
    writeln!(out)?;

    // Footer
    writeln!(out, "{}", snapshot.footer.heading)?;
    writeln!(out, "{}", snapshot.footer.body)?;
    write!(out, "[{}]", snapshot.footer.button)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::FixedSeries;
    use crate::config::Config;
    use crate::dashboard::{Dashboard, DashboardEvent};
    use crate::model::Color;

    fn bar(value: i32) -> ProgressBar {
        ProgressBar::new(value, Color::new("#000"))
    }

    #[test]
    fn test_progress_text() {
        assert_eq!(progress_text(&bar(50)), format!("[{}{}]", "#".repeat(10), ".".repeat(10)));
        assert_eq!(progress_text(&bar(0)), format!("[{}]", ".".repeat(20)));
        assert_eq!(progress_text(&bar(-10)), format!("[{}]", ".".repeat(20)));
    }

    #[test]
    fn test_progress_text_overflows() {
        assert_eq!(progress_text(&bar(150)), format!("[{}]{}", "#".repeat(20), "#".repeat(10)));
    }

    #[test]
    fn test_render_closed_page() {
        let dashboard = Dashboard::mount(Config::default(), &FixedSeries::from_values(&[60.0, 90.0]));
        let text = render_text(&dashboard.snapshot());

        assert!(text.starts_with("Samantha (samantha@email.com)  [4]"));
        assert!(text.contains("*Dashboard* | Section"));
        assert!(text.contains("Search..."));
        assert!(text.contains("🔔(3)"));
        assert!(!text.contains("Notifications:"));
        assert!(!text.contains("Profile menu:"));
        assert!(text.contains("01 - 27 October, 2024"));
        assert!(text.contains("89%"));
        assert!(text.contains("Need to Improve"));
        assert!(text.ends_with("[View Tips]"));
    }

    #[test]
    fn test_render_open_panels() {
        let config = Config {
            notifications: vec![],
            ..Config::default()
        };
        let mut dashboard = Dashboard::mount(config, &FixedSeries::default());
        dashboard.dispatch(DashboardEvent::ToggleNotifications);
        dashboard.dispatch(DashboardEvent::ToggleProfileMenu);
        dashboard.dispatch(DashboardEvent::Search("steps".into()));

        let text = render_text(&dashboard.snapshot());
        assert!(text.contains("🔍 steps"));
        assert!(text.contains("🔔  👤"));
        assert!(text.contains("    - No notifications"));
        assert!(text.contains("    - Profile\n    - Settings\n    - Logout"));
    }

    #[test]
    fn test_text_page_writes_into_any_sink() {
        use std::fmt::Write;

        let dashboard = Dashboard::mount(Config::default(), &FixedSeries::from_values(&[70.0]));
        let snapshot = dashboard.snapshot();

        let mut out = String::from("> ");
        write!(out, "{}", TextPage(&snapshot)).unwrap();
        assert_eq!(out, format!("> {}", render_text(&snapshot)));
    }
}
