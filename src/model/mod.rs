//! Dashboard data model
//!
//! Plain values the dashboard is composed from. Nothing here is persisted;
//! every value is rebuilt on mount.

pub mod types;

pub use types::{ChartPoint, Color, Metric, ReportPeriod, UserProfile, DEFAULT_AVATAR_URL};
