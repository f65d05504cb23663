//! Food Diary Tools module
//!
//! MCP tool implementations for the food diary.

pub mod diary_csv;
pub mod status;
