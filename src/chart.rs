//! Progress chart data and scaling
//!
//! The chart panel is drawn by an external renderer (a canvas in the web
//! frontend, a sparkline in the terminal). This module supplies the series,
//! through a pluggable [`SeriesProvider`], and the axis scaling every
//! renderer shares.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::model::{ChartPoint, Color};

/// Source of the points plotted on the progress chart
pub trait SeriesProvider {
    /// Ordered points, left to right
    fn points(&self) -> Vec<ChartPoint>;
}

impl<F> SeriesProvider for F
where
    F: Fn() -> Vec<ChartPoint>,
{
    fn points(&self) -> Vec<ChartPoint> {
        self()
    }
}

/// Synthetic series: `len` points at x = 1..=len with integer y in
/// `[floor, floor + span)`
///
/// The upper bound saturates at `u32::MAX`; an empty range yields `floor`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RandomSeries {
    pub len: usize,
    pub floor: u32,
    pub span: u32,
    /// Fixed seed for a reproducible series
    pub seed: Option<u64>,
}

impl Default for RandomSeries {
    fn default() -> Self {
        Self {
            len: 20,
            floor: 60,
            span: 40,
            seed: None,
        }
    }
}

impl RandomSeries {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> Vec<ChartPoint> {
        (1..=self.len)
            .map(|x| {
                let end = self.floor.saturating_add(self.span);
                let y = if end > self.floor {
                    rng.gen_range(self.floor..end)
                } else {
                    self.floor
                };
                ChartPoint::new(x as f64, y as f64)
            })
            .collect()
    }
}

impl SeriesProvider for RandomSeries {
    fn points(&self) -> Vec<ChartPoint> {
        match self.seed {
            Some(seed) => self.sample(&mut StdRng::seed_from_u64(seed)),
            None => self.sample(&mut rand::thread_rng()),
        }
    }
}

/// A series known up front
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedSeries(pub Vec<ChartPoint>);

impl FixedSeries {
    /// Points at x = 1..=n from a list of y values
    pub fn from_values(values: &[f64]) -> Self {
        Self(
            values
                .iter()
                .enumerate()
                .map(|(i, &y)| ChartPoint::new((i + 1) as f64, y))
                .collect(),
        )
    }
}

impl SeriesProvider for FixedSeries {
    fn points(&self) -> Vec<ChartPoint> {
        self.0.clone()
    }
}

/// Pixel rectangle the plot is drawn into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Canvas of `width` x `height` minus axis margins
    pub fn with_margins(width: f64, height: f64) -> Self {
        let (margin_left, margin_right, margin_top, margin_bottom) = (50.0, 20.0, 5.0, 30.0);
        Self {
            left: margin_left,
            top: margin_top,
            width: width - margin_left - margin_right,
            height: height - margin_top - margin_bottom,
        }
    }
}

/// Axis bounds for a series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ChartScale {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartScale {
    /// Bounds covering all points, y padded by 10% of its range (1.0 when flat)
    pub fn from_points(points: &[ChartPoint]) -> Self {
        if points.is_empty() {
            return Self {
                x_min: 0.0,
                x_max: 1.0,
                y_min: 0.0,
                y_max: 1.0,
            };
        }

        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for p in points {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }

        if x_min == x_max {
            x_max = x_min + 1.0;
        }

        let y_range = y_max - y_min;
        let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };

        Self {
            x_min,
            x_max,
            y_min: y_min - y_padding,
            y_max: y_max + y_padding,
        }
    }

    /// Map a data point into `area`; y grows downward
    pub fn project(&self, point: ChartPoint, area: PlotArea) -> (f64, f64) {
        let x = area.left + (point.x - self.x_min) / (self.x_max - self.x_min) * area.width;
        let y = area.top + (self.y_max - point.y) / (self.y_max - self.y_min) * area.height;
        (x, y)
    }

    /// `n + 1` evenly spaced y values, top to bottom
    pub fn y_ticks(&self, n: usize) -> Vec<f64> {
        let n = n.max(1);
        (0..=n)
            .map(|i| self.y_max - (i as f64 / n as f64) * (self.y_max - self.y_min))
            .collect()
    }

    /// `n + 1` evenly spaced x values, left to right
    pub fn x_ticks(&self, n: usize) -> Vec<f64> {
        let n = n.max(1);
        (0..=n)
            .map(|i| self.x_min + (i as f64 / n as f64) * (self.x_max - self.x_min))
            .collect()
    }
}

/// Everything the chart panel needs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub stroke: Color,
    /// Panel height in pixels
    pub height: u32,
    pub points: Vec<ChartPoint>,
}

impl ChartSpec {
    pub fn scale(&self) -> ChartScale {
        ChartScale::from_points(&self.points)
    }

    /// Unicode sparkline of the series, one block per point
    pub fn sparkline(&self) -> String {
        const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

        let scale = self.scale();
        let range = scale.y_max - scale.y_min;
        self.points
            .iter()
            .map(|p| {
                let level = ((p.y - scale.y_min) / range * BLOCKS.len() as f64) as usize;
                BLOCKS[level.min(BLOCKS.len() - 1)]
            })
            .collect()
    }
}
