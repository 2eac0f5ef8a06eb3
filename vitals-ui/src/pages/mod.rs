//! Pages
//!
//! Top-level page components.

pub mod dashboard;

pub use dashboard::DashboardPage;
