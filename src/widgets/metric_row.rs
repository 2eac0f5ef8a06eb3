//! Metric row contract

use serde::{Deserialize, Serialize};

use super::{Icon, ProgressBar};
use crate::model::{Color, Metric};

/// One row of the metrics grid
///
/// The trailing overflow icon is decorative; no action is attached to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricRow {
    pub icon: Icon,
    pub title: String,
    pub status: String,
    pub value: i32,
    pub color: Color,
    pub overflow: Icon,
}

impl MetricRow {
    pub fn new(icon: Icon, metric: &Metric) -> Self {
        Self {
            icon,
            title: metric.title.clone(),
            status: metric.status.clone(),
            value: metric.value,
            color: metric.color.clone(),
            overflow: Icon::Overflow,
        }
    }

    /// Displayed value, suffixed with a percent sign
    pub fn value_text(&self) -> String {
        format!("{}%", self.value)
    }

    /// Inline style for the icon tile
    pub fn icon_style(&self) -> String {
        format!("background-color: {}", self.color.tint())
    }

    pub fn progress(&self) -> ProgressBar {
        ProgressBar::new(self.value, self.color.clone())
    }
}

impl From<&Metric> for MetricRow {
    fn from(metric: &Metric) -> Self {
        MetricRow::new(Icon::Person, metric)
    }
}
