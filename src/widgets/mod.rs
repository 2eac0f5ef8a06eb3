//! Presentational widgets
//!
//! Each widget is a value describing what to draw. Renderers (the terminal
//! preview and the Leptos frontend) read these and never hold state of their
//! own.

pub mod icon;
pub mod metric_row;
pub mod notifications;
pub mod profile_menu;
pub mod progress;
pub mod toggle;

pub use icon::Icon;
pub use metric_row::MetricRow;
pub use notifications::{
    default_notifications, NotificationCenter, NotificationPanel, EMPTY_PLACEHOLDER,
};
pub use profile_menu::{ProfileAction, ProfileMenu};
pub use progress::ProgressBar;
pub use toggle::Toggle;
