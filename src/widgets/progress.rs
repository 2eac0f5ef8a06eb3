//! Progress bar contract

use serde::{Deserialize, Serialize};

use crate::model::Color;

/// A track with a filled segment `value` percent wide
///
/// The value is deliberately left unclamped: -10 yields `-10%` and 150
/// yields `150%`, and the renderer draws whatever that produces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressBar {
    pub value: i32,
    pub color: Color,
}

impl ProgressBar {
    pub fn new(value: i32, color: Color) -> Self {
        Self { value, color }
    }

    /// CSS width of the filled segment
    pub fn width(&self) -> String {
        format!("{}%", self.value)
    }

    /// Inline style for the filled segment
    pub fn fill_style(&self) -> String {
        format!("width: {}; background-color: {}", self.width(), self.color)
    }

    /// Number of filled cells on a track of `cells` cells
    ///
    /// Negative values fill nothing; values over 100 return more cells than
    /// the track holds.
    pub fn filled_cells(&self, cells: usize) -> usize {
        if self.value <= 0 {
            return 0;
        }
        self.value as usize * cells / 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(value: i32) -> ProgressBar {
        ProgressBar::new(value, Color::new("#3498db"))
    }

    #[test]
    fn test_width_matches_value() {
        assert_eq!(bar(89).width(), "89%");
        assert_eq!(bar(0).width(), "0%");
    }

    #[test]
    fn test_width_is_not_clamped() {
        assert_eq!(bar(150).width(), "150%");
        assert_eq!(bar(-5).width(), "-5%");
    }

    #[test]
    fn test_fill_style() {
        assert_eq!(
            bar(70).fill_style(),
            "width: 70%; background-color: #3498db"
        );
    }

    #[test]
    fn test_filled_cells() {
        assert_eq!(bar(50).filled_cells(20), 10);
        assert_eq!(bar(89).filled_cells(20), 17);
        assert_eq!(bar(0).filled_cells(20), 0);
        assert_eq!(bar(-20).filled_cells(20), 0);
        assert_eq!(bar(150).filled_cells(20), 30);
    }
}
