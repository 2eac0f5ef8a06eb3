//! UI Components
//!
//! Leptos components for the dashboard regions.

pub mod chart;
pub mod footer;
pub mod header;
pub mod icon;
pub mod metric_row;
pub mod notification_bell;
pub mod profile_menu;
pub mod sidebar;

pub use chart::LineChart;
pub use footer::ConsultFooter;
pub use header::Header;
pub use icon::IconGlyph;
pub use metric_row::{MetricRowCard, ProgressTrack};
pub use notification_bell::NotificationBell;
pub use profile_menu::ProfileDropdown;
pub use sidebar::Sidebar;
