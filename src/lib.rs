//! Food Diary Library
//!
//! CSV import/export of food diary entries and nutrition totals.

pub mod build_info;
pub mod config;
pub mod csv_io;
pub mod either;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
