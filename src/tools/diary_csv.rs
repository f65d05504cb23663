//! Diary CSV MCP Tools
//!
//! Export, import and daily totals over diary entries.

use std::path::Path;

use serde::Serialize;

use crate::config::DiaryConfig;
use crate::csv_io::{self, CsvError, CsvResult, ImportRowError};
use crate::either::{split, Either};
use crate::models::{DiaryEntryRecord, NewDiaryEntry};
use crate::nutrition::{daily_totals, DailyTotals};

/// Response for export_entries_csv
#[derive(Debug, Serialize)]
pub struct ExportCsvResponse {
    pub entries: usize,
    pub rows: usize,
    pub output_path: Option<String>,
    pub csv: String,
}

/// A failed import row with its 1-based data row number
#[derive(Debug, Serialize)]
pub struct ImportRowFailure {
    pub row_num: usize,
    pub message: String,
    pub error: ImportRowError,
}

/// Response for import_entries_csv
#[derive(Debug, Serialize)]
pub struct ImportCsvResponse {
    pub success: bool,
    pub source: String,
    pub total_rows: usize,
    pub imported: usize,
    pub failed: usize,
    pub errors: Vec<ImportRowFailure>,
    pub entries: Vec<NewDiaryEntry>,
}

/// Response for daily_nutrition_totals
#[derive(Debug, Serialize)]
pub struct DailyTotalsResponse {
    pub days: Vec<DailyTotals>,
    pub total_days: usize,
}

/// Where import text comes from
#[derive(Debug, Clone, Copy)]
pub enum CsvSource<'a> {
    Text(&'a str),
    File(&'a str),
}

impl<'a> CsvSource<'a> {
    /// Exactly one of inline text or a file path
    pub fn from_params(text: Option<&'a str>, file_path: Option<&'a str>) -> Result<Self, String> {
        match (text, file_path) {
            (Some(text), None) => Ok(CsvSource::Text(text)),
            (None, Some(path)) => Ok(CsvSource::File(path)),
            (Some(_), Some(_)) => Err("Provide either csv_text or file_path, not both".to_string()),
            (None, None) => Err("Provide csv_text or file_path".to_string()),
        }
    }

    fn label(&self) -> String {
        match self {
            CsvSource::Text(_) => "inline".to_string(),
            CsvSource::File(path) => path.to_string(),
        }
    }

    fn read(&self) -> CsvResult<String> {
        match self {
            CsvSource::Text(text) => Ok(text.to_string()),
            CsvSource::File(path) => read_csv_file(path),
        }
    }
}

/// Read a CSV file as text
pub fn read_csv_file<P: AsRef<Path>>(path: P) -> CsvResult<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Read diary entries from a JSON array file
pub fn read_entries_file<P: AsRef<Path>>(path: P) -> CsvResult<Vec<DiaryEntryRecord>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Export diary entries as CSV, optionally writing the file
pub fn export_entries_csv(
    config: &DiaryConfig,
    entries: &[DiaryEntryRecord],
    output_path: Option<&str>,
) -> Result<ExportCsvResponse, String> {
    let csv = csv_io::entries_to_csv(entries, config);
    let rows = csv.lines().count().saturating_sub(1);

    if let Some(path) = output_path {
        std::fs::write(path, &csv)
            .map_err(|e| format!("Failed to write CSV to '{}': {}", path, e))?;
        tracing::info!(path, rows, "Wrote diary CSV");
    }

    Ok(ExportCsvResponse {
        entries: entries.len(),
        rows,
        output_path: output_path.map(str::to_string),
        csv,
    })
}

/// Import diary CSV text or file into new entries, collecting row failures
pub fn import_entries_csv(
    config: &DiaryConfig,
    source: CsvSource<'_>,
) -> Result<ImportCsvResponse, String> {
    let label = source.label();
    let text = source.read().map_err(|e| describe(&label, e))?;
    let rows = csv_io::parse_csv(&text).map_err(|e| describe(&label, e))?;

    let results = rows.iter().enumerate().map(|(index, row)| {
        match csv_io::row_to_entry(row, config) {
            Ok(entry) => Either::Right(entry),
            Err(error) => Either::Left(ImportRowFailure {
                row_num: index + 1,
                message: error.to_string(),
                error,
            }),
        }
    });
    let parts = split(results);

    let failed = parts.lefts.len();
    if failed > 0 {
        tracing::warn!(source = %label, failed, "Some diary CSV rows failed to import");
    }

    let mut errors = parts.lefts;
    errors.truncate(config.error_preview_limit);

    Ok(ImportCsvResponse {
        success: failed == 0,
        source: label,
        total_rows: rows.len(),
        imported: parts.rights.len(),
        failed,
        errors,
        entries: parts.rights,
    })
}

/// Per-day nutrition totals
pub fn daily_nutrition_totals(
    config: &DiaryConfig,
    entries: &[DiaryEntryRecord],
) -> DailyTotalsResponse {
    let days = daily_totals(entries, config);
    DailyTotalsResponse {
        total_days: days.len(),
        days,
    }
}

fn describe(label: &str, err: CsvError) -> String {
    match err {
        CsvError::Io(e) => format!("Failed to read '{}': {}", label, e),
        other => format!("Failed to parse '{}': {}", label, other),
    }
}
