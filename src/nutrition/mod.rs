//! Nutrition calculation module
//!
//! Handles nutrition aggregation across diary entries.

pub mod totals;

pub use totals::{daily_totals, DailyTotals};
