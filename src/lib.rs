//! # Vitals
//!
//! A health metrics dashboard: a sidebar with the user's profile and
//! navigation, a header with search, a notification bell and a profile
//! dropdown, a grid of metric rows with progress bars, a progress chart and a
//! footer call-to-action.
//!
//! ## Modules
//!
//! - [`model`]: Metric, color, chart point and profile values
//! - [`widgets`]: Toggle, progress bar, metric row, notification center and
//!   profile menu contracts
//! - [`chart`]: Pluggable chart series and axis scaling
//! - [`dashboard`]: The composition root owning all state
//! - [`render`]: Plain-text preview of a dashboard snapshot
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use vitals::{Config, Dashboard, DashboardEvent, FixedSeries};
//!
//! let config = Config {
//!     notifications: vec!["A".into(), "B".into(), "C".into()],
//!     ..Config::default()
//! };
//! let mut dashboard = Dashboard::mount(config, &FixedSeries::from_values(&[60.0, 72.0]));
//!
//! dashboard.dispatch(DashboardEvent::ToggleNotifications);
//!
//! let header = dashboard.snapshot().header;
//! assert_eq!(header.notifications.rows, vec!["A", "B", "C"]);
//! assert_eq!(header.notifications.badge, Some(3));
//! assert!(!header.profile_menu.open);
//! ```

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod model;
pub mod render;
pub mod widgets;

// Re-export top-level types for convenience
pub use model::{ChartPoint, Color, Metric, ReportPeriod, UserProfile};

pub use widgets::{
    Icon, MetricRow, NotificationCenter, NotificationPanel, ProfileAction, ProfileMenu,
    ProgressBar, Toggle, EMPTY_PLACEHOLDER,
};

pub use chart::{ChartScale, ChartSpec, FixedSeries, PlotArea, RandomSeries, SeriesProvider};

pub use dashboard::{Dashboard, DashboardEvent, DashboardSnapshot, DashboardState};

pub use render::{progress_text, render_text, TextPage};

pub use config::{
    generate_default_config, ChartConfig, Config, ConfigError, Discovery, FooterConfig, HeaderButton,
    LayoutConfig, LoggingConfig, ReportConfig,
};
