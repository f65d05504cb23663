//! Diary CSV import and export
//!
//! Export flattens diary entries into one row per logged nutrition item.
//! Import parses CSV text into rows and validates each into a `NewDiaryEntry`.

pub mod columns;
pub mod datetime;
pub mod export;
pub mod import;

use thiserror::Error;

pub use columns::{Column, ColumnValue, EXPORT_COLUMNS, IMPORT_COLUMNS};
pub use datetime::{format_date, format_iso, format_time, parse_consumed_at};
pub use export::entries_to_csv;
pub use import::{
    import_csv, parse_csv, row_to_entry, rows_to_entries, CsvRow, ImportRowError, ShapeError,
};

/// Stream-level CSV pipeline errors
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CSV pipeline operations
pub type CsvResult<T> = Result<T, CsvError>;
