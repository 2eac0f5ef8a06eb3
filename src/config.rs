//! Configuration System
//!
//! Handles loading the dashboard's content from files and environment
//! variables. Every field falls back to the built-in dashboard, so an empty
//! file (or no file at all) yields the stock layout.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::chart::RandomSeries;
use crate::model::{Color, Metric, ReportPeriod, UserProfile, DEFAULT_AVATAR_URL};
use crate::widgets::default_notifications;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub profile: UserProfile,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default = "Metric::defaults")]
    pub metrics: Vec<Metric>,

    #[serde(default = "default_notifications")]
    pub notifications: Vec<String>,

    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub footer: FooterConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Report heading, period and team avatars
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    #[serde(default = "default_report_title")]
    pub title: String,

    #[serde(default = "default_period_start")]
    pub start: NaiveDate,

    #[serde(default = "default_period_end")]
    pub end: NaiveDate,

    #[serde(default = "default_team_avatars")]
    pub team_avatars: Vec<String>,
}

fn default_report_title() -> String {
    "Report".to_string()
}

fn default_period_start() -> NaiveDate {
    ReportPeriod::default().start
}

fn default_period_end() -> NaiveDate {
    ReportPeriod::default().end
}

fn default_team_avatars() -> Vec<String> {
    vec![
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcS_NR09b1Z8k0rMj2Phr5LpSQuxEaI8vGKDSQ&s".to_string(),
        "https://imageio.forbes.com/specials-images/imageserve/5c76b7d331358e35dd2773a9/0x0.jpg?format=jpg&crop=4401,4401,x0,y0,safe&height=416&width=416&fit=bounds".to_string(),
    ]
}

impl ReportConfig {
    pub fn period(&self) -> ReportPeriod {
        ReportPeriod::new(self.start, self.end)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_report_title(),
            start: default_period_start(),
            end: default_period_end(),
            team_avatars: default_team_avatars(),
        }
    }
}

/// A header button; `primary` buttons use the accent style
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderButton {
    pub label: String,
    #[serde(default)]
    pub primary: bool,
}

impl HeaderButton {
    pub fn new(label: impl Into<String>, primary: bool) -> Self {
        Self {
            label: label.into(),
            primary,
        }
    }
}

/// Sidebar and header chrome
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    #[serde(default = "default_nav_items")]
    pub nav_items: Vec<String>,

    /// Index into `nav_items` drawn highlighted
    #[serde(default)]
    pub active_nav: usize,

    #[serde(default = "default_header_buttons")]
    pub header_buttons: Vec<HeaderButton>,

    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,
}

fn default_nav_items() -> Vec<String> {
    ["Dashboard", "Section", "Score Card", "Summary", "Accounts", "Settings"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_header_buttons() -> Vec<HeaderButton> {
    vec![
        HeaderButton::new("Home", true),
        HeaderButton::new("Health Assessment", true),
        HeaderButton::new("History", true),
        HeaderButton::new("Leaderboard", false),
        HeaderButton::new("About Us", false),
    ]
}

fn default_search_placeholder() -> String {
    "Search...".to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            nav_items: default_nav_items(),
            active_nav: 0,
            header_buttons: default_header_buttons(),
            search_placeholder: default_search_placeholder(),
        }
    }
}

/// Progress chart panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    #[serde(default = "default_chart_title")]
    pub title: String,

    #[serde(default = "default_chart_stroke")]
    pub stroke: Color,

    #[serde(default = "default_chart_height")]
    pub height: u32,

    #[serde(default = "default_chart_points")]
    pub points: usize,

    #[serde(default = "default_chart_floor")]
    pub floor: u32,

    #[serde(default = "default_chart_span")]
    pub span: u32,

    /// Fixed seed for a reproducible sample series
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_chart_title() -> String {
    "Health Progress".to_string()
}

fn default_chart_stroke() -> Color {
    Color::new("#3498db")
}

fn default_chart_height() -> u32 {
    300
}

fn default_chart_points() -> usize {
    RandomSeries::default().len
}

fn default_chart_floor() -> u32 {
    RandomSeries::default().floor
}

fn default_chart_span() -> u32 {
    RandomSeries::default().span
}

impl ChartConfig {
    /// Sample series described by this section
    pub fn series(&self) -> RandomSeries {
        RandomSeries {
            len: self.points,
            floor: self.floor,
            span: self.span,
            seed: self.seed,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: default_chart_title(),
            stroke: default_chart_stroke(),
            height: default_chart_height(),
            points: default_chart_points(),
            floor: default_chart_floor(),
            span: default_chart_span(),
            seed: None,
        }
    }
}

/// Footer call-to-action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FooterConfig {
    #[serde(default = "default_footer_heading")]
    pub heading: String,

    #[serde(default = "default_footer_body")]
    pub body: String,

    #[serde(default = "default_footer_button")]
    pub button: String,
}

fn default_footer_heading() -> String {
    "Consult A Doctor".to_string()
}

fn default_footer_body() -> String {
    "Save your money by consulting with doctors, and for more tips, see below".to_string()
}

fn default_footer_button() -> String {
    "View Tips".to_string()
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            heading: default_footer_heading(),
            body: default_footer_body(),
            button: default_footer_button(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Standard config locations, most specific first
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("vitals").join("config.toml")),
            Some(PathBuf::from("/etc/vitals/config.toml")),
            Some(PathBuf::from("./vitals.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load the first candidate that parses, falling back to the environment
    ///
    /// Nothing is logged here; call [`Discovery::log`] once a subscriber is up.
    pub fn discover(paths: &[PathBuf]) -> Discovery {
        let mut skipped = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return Discovery {
                        config,
                        source: Some(path.clone()),
                        skipped,
                    }
                }
                Err(e) => skipped.push(e),
            }
        }

        Discovery {
            config: Self::from_env(),
            source: None,
            skipped,
        }
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let discovery = Self::discover(&Self::default_paths());
        discovery.log();
        discovery.config
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (`VITALS_*` names)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Profile overrides
        if let Some(name) = lookup("VITALS_USER_NAME") {
            self.profile.name = name;
        }
        if let Some(email) = lookup("VITALS_USER_EMAIL") {
            self.profile.email = email;
        }

        // Chart overrides
        if let Some(seed) = lookup("VITALS_CHART_SEED") {
            match seed.parse() {
                Ok(s) => self.chart.seed = Some(s),
                Err(_) => tracing::warn!("Ignoring invalid VITALS_CHART_SEED: {}", seed),
            }
        }
        if let Some(points) = lookup("VITALS_CHART_POINTS") {
            match points.parse() {
                Ok(p) => self.chart.points = p,
                Err(_) => tracing::warn!("Ignoring invalid VITALS_CHART_POINTS: {}", points),
            }
        }

        // Logging overrides
        if let Some(level) = lookup("VITALS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("VITALS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.report.start > self.report.end {
            return Err(ConfigError::InvalidPeriod {
                start: self.report.start,
                end: self.report.end,
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: UserProfile::default(),
            report: ReportConfig::default(),
            layout: LayoutConfig::default(),
            metrics: Metric::defaults(),
            notifications: default_notifications(),
            chart: ChartConfig::default(),
            footer: FooterConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Result of searching config locations
#[derive(Debug)]
pub struct Discovery {
    pub config: Config,
    /// File the config came from; `None` when built from defaults
    pub source: Option<PathBuf>,
    /// Candidates that existed but failed to load, in search order
    pub skipped: Vec<ConfigError>,
}

impl Discovery {
    pub fn log(&self) {
        for error in &self.skipped {
            tracing::warn!("Failed to load config: {}", error);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Report period starts ({start}) after it ends ({end})")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    format!(
        r##"# Vitals Configuration
#
# Environment variables override these settings:
# - VITALS_USER_NAME
# - VITALS_USER_EMAIL
# - VITALS_CHART_SEED
# - VITALS_CHART_POINTS
# - VITALS_LOG_LEVEL
# - VITALS_LOG_FORMAT

# Messages shown under the bell, in display order
notifications = [
    "New health tip available!",
    "You have a doctor's appointment tomorrow.",
    "Your fitness goal has been updated.",
]

[profile]
name = "Samantha"
email = "samantha@email.com"
avatar_url = "{avatar}"

# Counter drawn on the sidebar avatar
badge_count = 4

[report]
title = "Report"
start = "2024-10-01"
end = "2024-10-27"

[layout]
nav_items = ["Dashboard", "Section", "Score Card", "Summary", "Accounts", "Settings"]

# Highlighted nav entry (0-based)
active_nav = 0

search_placeholder = "Search..."

header_buttons = [
    {{ label = "Home", primary = true }},
    {{ label = "Health Assessment", primary = true }},
    {{ label = "History", primary = true }},
    {{ label = "Leaderboard", primary = false }},
    {{ label = "About Us", primary = false }},
]

# Metric rows; value is a percentage and is drawn as given
[[metrics]]
title = "Physical Fitness"
value = 89
status = "Excellent"
color = "#3498db"

[[metrics]]
title = "Mental Wellness"
value = 70
status = "Good"
color = "#9b59b6"

[[metrics]]
title = "Diet"
value = 87
status = "Excellent"
color = "#e67e22"

[[metrics]]
title = "Daily Routine"
value = 30
status = "Need to Improve"
color = "#2ecc71"

[chart]
title = "Health Progress"
stroke = "#3498db"

# Panel height (px)
height = 300

# Sample series: `points` values drawn from [floor, floor + span)
points = 20
floor = 60
span = 40

# Uncomment for a reproducible series
# seed = 42

[footer]
heading = "Consult A Doctor"
body = "Save your money by consulting with doctors, and for more tips, see below"
button = "View Tips"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"##,
        avatar = DEFAULT_AVATAR_URL
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config_file_matches_defaults() {
        let parsed = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let parsed = Config::parse("").unwrap();
        assert_eq!(parsed.metrics.len(), 4);
        assert_eq!(parsed.notifications.len(), 3);
        assert_eq!(parsed.chart.points, 20);
        assert_eq!(parsed.report.period().label(), "01 - 27 October, 2024");
    }

    #[test]
    fn test_partial_sections() {
        let parsed = Config::parse(
            r#"
notifications = []

[profile]
name = "Alex"

[[metrics]]
title = "Sleep"
value = 150
status = "Off the chart"
color = "purple"
"#,
        )
        .unwrap();

        assert_eq!(parsed.profile.name, "Alex");
        assert_eq!(parsed.profile.email, "samantha@email.com");
        assert!(parsed.notifications.is_empty());
        assert_eq!(parsed.metrics, vec![Metric::new("Sleep", 150, "Off the chart", "purple")]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chart]\nseed = 9\npoints = 5").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.chart.seed, Some(9));
        assert_eq!(config.chart.series().len, 5);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_parse_error_carries_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chart\nbroken").unwrap();

        match Config::load(file.path()).unwrap_err() {
            ConfigError::Parse { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_discover_skips_broken_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[chart\nbroken").unwrap();
        std::fs::write(&good, "[footer]\nbutton = \"Read More\"").unwrap();

        let discovery = Config::discover(&[missing, broken.clone(), good.clone()]);

        assert_eq!(discovery.source, Some(good));
        assert_eq!(discovery.config.footer.button, "Read More");
        assert_eq!(discovery.skipped.len(), 1);
        match &discovery.skipped[0] {
            ConfigError::Parse { path, .. } => assert_eq!(path, &broken),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_discover_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("vitals.toml");
        std::fs::write(&broken, "[report]\nstart = \"2024-10-27\"\nend = \"2024-10-01\"").unwrap();

        let discovery = Config::discover(&[broken]);

        assert_eq!(discovery.source, None);
        assert!(matches!(discovery.skipped[..], [ConfigError::InvalidPeriod { .. }]));
        assert_eq!(discovery.config.metrics, Metric::defaults());
    }

    #[test]
    fn test_inverted_period_rejected() {
        let err = Config::parse("[report]\nstart = \"2024-10-27\"\nend = \"2024-10-01\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPeriod { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("VITALS_USER_NAME", "Jordan"),
            ("VITALS_CHART_SEED", "42"),
            ("VITALS_CHART_POINTS", "not-a-number"),
            ("VITALS_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.profile.name, "Jordan");
        assert_eq!(config.chart.seed, Some(42));
        assert_eq!(config.chart.points, 20);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }
}
