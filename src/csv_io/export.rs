//! CSV export
//!
//! One row per logged nutrition item. Recipes expand into one row per
//! ingredient with servings multiplied through; ingredient nutrition is
//! written per serving, unscaled.

use chrono::{DateTime, FixedOffset};

use super::columns::{header_row, ColumnValue, EXPORT_COLUMNS};
use super::datetime::{format_date, format_iso, format_time, parse_consumed_at};
use crate::config::DiaryConfig;
use crate::models::{DiaryEntryRecord, LoggedItem};

/// Render diary entries as CSV text.
///
/// Only the Description cell of data rows is quoted. A missing nutrition
/// value renders as an empty cell. Entries with neither a nutrition item nor
/// a recipe produce no rows.
pub fn entries_to_csv(entries: &[DiaryEntryRecord], config: &DiaryConfig) -> String {
    let mut lines = vec![header_row()];

    for (index, entry) in entries.iter().enumerate() {
        let items = entry.logged_items();
        if items.is_empty() {
            tracing::debug!(index, "Skipping diary entry with no nutrition item or recipe");
            continue;
        }

        let consumed_at = parse_consumed_at(&entry.consumed_at, config.default_offset);
        if consumed_at.is_none() {
            tracing::warn!(
                index,
                consumed_at = %entry.consumed_at,
                "Diary entry has an unparseable consumed_at; Date and Time left empty"
            );
        }

        for item in &items {
            lines.push(render_row(entry, consumed_at.as_ref(), item));
        }
    }

    let csv = lines.join("\n");
    tracing::debug!(entries = entries.len(), rows = lines.len() - 1, "Exported diary CSV");
    csv.trim_end().to_string()
}

fn render_row(
    entry: &DiaryEntryRecord,
    consumed_at: Option<&DateTime<FixedOffset>>,
    logged: &LoggedItem<'_>,
) -> String {
    EXPORT_COLUMNS
        .iter()
        .map(|column| match column.value {
            ColumnValue::Date => consumed_at.map(format_date).unwrap_or_default(),
            ColumnValue::Time => consumed_at.map(format_time).unwrap_or_default(),
            ColumnValue::ConsumedAt => consumed_at
                .map(format_iso)
                .unwrap_or_else(|| entry.consumed_at.clone()),
            ColumnValue::Description => quote(&logged.description),
            ColumnValue::Servings => format_number(logged.servings),
            ColumnValue::Nutrition(field) => {
                logged.item.get(field).map(format_number).unwrap_or_default()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Wrap in double quotes, doubling embedded quotes
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Shortest decimal text that reads back as the same number
fn format_number(value: f64) -> String {
    value.to_string()
}
