//! State Management
//!
//! The dashboard's single reactive state container.

pub mod global;

pub use global::{provide_dashboard, DashboardContext};
