//! Core data types for the Vitals dashboard
//!
//! This module defines the values the dashboard displays:
//! - `Color`: A color token passed straight through to renderers
//! - `Metric`: A titled health indicator shown as a row
//! - `ChartPoint`: One point of the progress chart
//! - `UserProfile` and `ReportPeriod`: Header and sidebar details

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A color token (hex, named, `rgb(...)`, ...)
///
/// Tokens are never validated; whatever is configured is what gets rendered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Alpha suffix appended to a hex token for the faint icon background
    pub const TINT_ALPHA: &'static str = "15";

    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Token with the tint alpha appended (`#3498db` -> `#3498db15`)
    pub fn tint(&self) -> String {
        format!("{}{}", self.0, Self::TINT_ALPHA)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// A health indicator displayed as a metric row
///
/// `value` is a percentage by convention (0-100) but is carried as-is:
/// out-of-range values reach the renderer unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metric {
    /// Row title (e.g. "Physical Fitness")
    pub title: String,
    /// Percentage score
    pub value: i32,
    /// Status label shown under the title (e.g. "Excellent")
    pub status: String,
    /// Accent color for the icon tile and progress fill
    pub color: Color,
}

impl Metric {
    pub fn new(
        title: impl Into<String>,
        value: i32,
        status: impl Into<String>,
        color: impl Into<Color>,
    ) -> Self {
        Self {
            title: title.into(),
            value,
            status: status.into(),
            color: color.into(),
        }
    }

    /// The four metrics the dashboard ships with
    pub fn defaults() -> Vec<Metric> {
        vec![
            Metric::new("Physical Fitness", 89, "Excellent", "#3498db"),
            Metric::new("Mental Wellness", 70, "Good", "#9b59b6"),
            Metric::new("Diet", 87, "Excellent", "#e67e22"),
            Metric::new("Daily Routine", 30, "Need to Improve", "#2ecc71"),
        ]
    }
}

/// A single point of the progress chart
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

impl ChartPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The signed-in user shown in the sidebar and header
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    /// Avatar image URL; reachability is not checked
    pub avatar_url: String,
    /// Static counter drawn on the sidebar avatar
    ///
    /// This is independent of the notification sequence.
    pub badge_count: u32,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Samantha".to_string(),
            email: "samantha@email.com".to_string(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
            badge_count: 4,
        }
    }
}

pub const DEFAULT_AVATAR_URL: &str = "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSIEd2zxEc_4IQ1jHyniHLECu15zRjkHTBJzA&s";

/// Inclusive date range shown under the report title
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Human label for the period
    ///
    /// - same month: `01 - 27 October, 2024`
    /// - same year: `28 September - 27 October, 2024`
    /// - otherwise: `28 December, 2023 - 27 January, 2024`
    pub fn label(&self) -> String {
        let (start, end) = (self.start, self.end);
        if start.year() != end.year() {
            format!("{} - {}", start.format("%d %B, %Y"), end.format("%d %B, %Y"))
        } else if start.month() != end.month() {
            format!("{} - {}", start.format("%d %B"), end.format("%d %B, %Y"))
        } else {
            format!("{} - {}", start.format("%d"), end.format("%d %B, %Y"))
        }
    }
}

impl Default for ReportPeriod {
    fn default() -> Self {
        let start = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap_or_default();
        let end = NaiveDate::from_ymd_opt(2024, 10, 27).unwrap_or_default();
        Self { start, end }
    }
}
