//! Food Diary Status Tool
//!
//! Provides runtime status information about the food diary service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::DiaryConfig;

/// CSV tool instructions for AI assistants
pub const CSV_INSTRUCTIONS: &str = r#"
# Food Diary CSV Instructions

This guide explains how to move diary entries in and out of CSV using the food diary tools.

## Export

**Tool:** `export_entries_csv`
- `entries`: diary entries as returned by the diary backend
- `output_path` (optional): also write the CSV to this file

Each entry has `consumed_at` (ISO 8601), `servings`, and either a `nutrition_item`
or a `recipe` with `recipe_items`.

| Entry refers to | Rows written | Servings column |
|-----------------|--------------|-----------------|
| nutrition item | 1 | entry servings |
| recipe | 1 per recipe item | entry servings x item servings |
| neither | 0 | - |

Recipe rows are described as `Recipe Name - Ingredient`. Ingredient nutrition is
written per serving, not multiplied.

## Import

**Tool:** `import_entries_csv`
- Provide exactly one of `csv_text` or `file_path`
- The first row must be the header written by the export tool

Required columns: `Consumed At`, `Description`, `Servings`.
Nutrition columns that are missing or not numeric are read as 0.

Rows that fail are reported with their row number and reason:
- `Invalid Consumed At Date` - the timestamp could not be parsed
- `Unexpected row shape` - a required column is missing or Servings is not a number

Valid rows are returned as new diary entries ready to submit. Failed rows never
stop the rest of the file from importing.

## Daily Totals

**Tool:** `daily_nutrition_totals`
- `entries`: the same shape as for export

Returns one total per day (by the entry's own date), scaled by servings.

## Notes

- Timestamps without an offset use FOOD_DIARY_DEFAULT_OFFSET (default +00:00)
- Consumed At is written as `2024-03-05T07:30:00.000-05:00`
- Time is written as `7:30 AM`
"#;

/// Runtime status of the food diary service
#[derive(Debug, Clone, Serialize)]
pub struct DiaryStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Active configuration
    pub default_offset: String,
    pub error_preview_limit: usize,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    config: DiaryConfig,
}

impl StatusTracker {
    pub fn new(config: DiaryConfig) -> Self {
        Self {
            start_time: Instant::now(),
            config,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> DiaryStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        DiaryStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            default_offset: self.config.default_offset.to_string(),
            error_preview_limit: self.config.error_preview_limit,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_config() {
        let tracker = StatusTracker::new(DiaryConfig::default());
        let status = tracker.get_status();
        assert_eq!(status.default_offset, "+00:00");
        assert_eq!(status.error_preview_limit, 10);
        assert_eq!(status.process_id, std::process::id());
    }
}
