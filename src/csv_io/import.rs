//! CSV import
//!
//! Parses CSV text into header-keyed rows and validates each row into a
//! `NewDiaryEntry`. Row failures are collected, never fatal to the batch.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use super::columns::{nutrition_header, CONSUMED_AT, DESCRIPTION, SERVINGS};
use super::datetime::{format_iso, parse_consumed_at};
use super::CsvResult;
use crate::config::DiaryConfig;
use crate::either::{split, Either, Split};
use crate::models::{NewDiaryEntry, NewNutritionItem, Nutrition, NutritionField};

/// One parsed data row, keyed by header
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CsvRow {
    cells: BTreeMap<String, String>,
}

impl CsvRow {
    /// Raw cell for a column, if the row has one
    pub fn cell(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Raw cell for a required column
    pub fn get(&self, column: &str) -> Result<&str, ShapeError> {
        self.cell(column)
            .ok_or_else(|| ShapeError::MissingColumn(column.to_string()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CsvRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Why a row could not be read as a diary entry
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "reason", content = "value", rename_all = "snake_case")]
pub enum ShapeError {
    #[error("missing column '{0}'")]
    MissingColumn(String),

    #[error("invalid Servings value '{0}'")]
    InvalidServings(String),
}

/// Per-row import failure
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImportRowError {
    #[error("Invalid Consumed At Date")]
    InvalidDate,

    #[error("Unexpected row shape: {cause}")]
    UnexpectedShape { cause: ShapeError, row: CsvRow },
}

impl ImportRowError {
    fn shape(cause: ShapeError, row: &CsvRow) -> Self {
        ImportRowError::UnexpectedShape {
            cause,
            row: row.clone(),
        }
    }
}

/// Parse CSV text whose first record is the header.
///
/// Cell `i` of each record is keyed by header `i`. Cells past the end of the
/// header are dropped; a short record keeps only the cells it has.
pub fn parse_csv(text: &str) -> CsvResult<Vec<CsvRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != headers.len() {
            tracing::debug!(
                row = index + 1,
                cells = record.len(),
                headers = headers.len(),
                "CSV record length differs from header"
            );
        }
        rows.push(headers.iter().zip(record.iter()).collect::<CsvRow>());
    }

    Ok(rows)
}

/// Validate one row into a new diary entry
pub fn row_to_entry(row: &CsvRow, config: &DiaryConfig) -> Result<NewDiaryEntry, ImportRowError> {
    let consumed_at = row
        .get(CONSUMED_AT)
        .map_err(|cause| ImportRowError::shape(cause, row))?;
    let consumed_at =
        parse_consumed_at(consumed_at, config.default_offset).ok_or(ImportRowError::InvalidDate)?;

    let description = row
        .get(DESCRIPTION)
        .map_err(|cause| ImportRowError::shape(cause, row))?;

    let servings = row
        .get(SERVINGS)
        .and_then(parse_servings)
        .map_err(|cause| ImportRowError::shape(cause, row))?;

    let nutrition =
        Nutrition::from_fn(|field| coerce_number(row.cell(nutrition_header(field)), field));

    Ok(NewDiaryEntry {
        consumed_at: format_iso(&consumed_at),
        servings,
        nutrition_item: NewNutritionItem {
            description: description.to_string(),
            nutrition,
        },
    })
}

/// Validate every row, keeping row order
pub fn rows_to_entries(
    rows: &[CsvRow],
    config: &DiaryConfig,
) -> Vec<Either<ImportRowError, NewDiaryEntry>> {
    rows.iter()
        .map(|row| Either::from(row_to_entry(row, config)))
        .collect()
}

/// Parse CSV text and partition rows into failures and new entries
pub fn import_csv(
    text: &str,
    config: &DiaryConfig,
) -> CsvResult<Split<ImportRowError, NewDiaryEntry>> {
    let rows = parse_csv(text)?;
    let results = split(rows_to_entries(&rows, config));
    tracing::info!(
        rows = rows.len(),
        imported = results.rights.len(),
        failed = results.lefts.len(),
        "Imported diary CSV"
    );
    Ok(results)
}

fn parse_servings(raw: &str) -> Result<f64, ShapeError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ShapeError::InvalidServings(raw.to_string()))
}

/// Parse a nutrition cell from its leading number, falling back to 0 when
/// there is none. Whole-number fields stop at the first non-digit.
fn coerce_number(raw: Option<&str>, field: NutritionField) -> f64 {
    raw.and_then(|s| numeric_prefix(s, field.is_integral()))
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Longest leading number of `raw`, ignoring whatever follows it.
/// With `integral` only a sign and digits are read.
fn numeric_prefix(raw: &str, integral: bool) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let whole = digits_from(end);
    end += whole;
    let mut digits = whole;

    if !integral {
        if bytes.get(end) == Some(&b'.') {
            let fraction = digits_from(end + 1);
            if whole + fraction > 0 {
                end += 1 + fraction;
                digits += fraction;
            }
        }

        if digits > 0 && matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let exp_digits = digits_from(exp);
            if exp_digits > 0 {
                end = exp + exp_digits;
            }
        }
    }

    if digits == 0 {
        return None;
    }
    s[..end].parse::<f64>().ok()
}
