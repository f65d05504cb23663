//! Daily nutrition totals
//!
//! Sums the nutrition of every logged item per calendar day, scaled by the
//! item's effective servings.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::DiaryConfig;
use crate::csv_io::{format_date, parse_consumed_at};
use crate::models::{DiaryEntryRecord, Nutrition};

/// Totals for one day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotals {
    /// `yyyy-MM-dd` in the entry's own offset
    pub date: String,
    /// Logged items contributing to the day
    pub item_count: usize,
    pub nutrition: Nutrition,
}

/// Group entries by day, ascending by date.
///
/// Entries whose `consumed_at` cannot be parsed are left out.
pub fn daily_totals(entries: &[DiaryEntryRecord], config: &DiaryConfig) -> Vec<DailyTotals> {
    let mut days: BTreeMap<String, (usize, Nutrition)> = BTreeMap::new();

    for entry in entries {
        let items = entry.logged_items();
        if items.is_empty() {
            continue;
        }

        let Some(consumed_at) = parse_consumed_at(&entry.consumed_at, config.default_offset) else {
            tracing::warn!(consumed_at = %entry.consumed_at, "Skipping entry with unparseable consumed_at");
            continue;
        };

        let day = days.entry(format_date(&consumed_at)).or_default();
        for logged in &items {
            day.0 += 1;
            day.1 = day.1.add(&logged.item.nutrition().scale(logged.servings));
        }
    }

    days.into_iter()
        .map(|(date, (item_count, nutrition))| DailyTotals {
            date,
            item_count,
            nutrition,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NutritionItemRecord, RecipeItemRecord, RecipeRecord};

    fn item(calories: f64, protein: Option<f64>) -> NutritionItemRecord {
        NutritionItemRecord {
            description: Some("Item".to_string()),
            calories: Some(calories),
            protein,
            ..Default::default()
        }
    }

    #[test]
    fn test_totals_scale_and_group_by_day() {
        let entries = vec![
            DiaryEntryRecord {
                consumed_at: "2024-03-06T08:00:00Z".to_string(),
                servings: 2.0,
                nutrition_item: Some(item(100.0, Some(5.0))),
                recipe: None,
            },
            DiaryEntryRecord {
                consumed_at: "2024-03-05T12:00:00Z".to_string(),
                servings: 2.0,
                nutrition_item: None,
                recipe: Some(RecipeRecord {
                    name: "Chili".to_string(),
                    recipe_items: vec![
                        RecipeItemRecord { servings: 1.0, nutrition_item: item(120.0, None) },
                        RecipeItemRecord { servings: 2.0, nutrition_item: item(250.0, Some(20.0)) },
                    ],
                }),
            },
            DiaryEntryRecord {
                consumed_at: "2024-03-06T20:00:00Z".to_string(),
                servings: 0.5,
                nutrition_item: Some(item(300.0, None)),
                recipe: None,
            },
        ];

        let totals = daily_totals(&entries, &DiaryConfig::default());
        assert_eq!(totals.len(), 2);

        assert_eq!(totals[0].date, "2024-03-05");
        assert_eq!(totals[0].item_count, 2);
        assert!((totals[0].nutrition.calories - (240.0 + 1000.0)).abs() < 0.001);
        assert!((totals[0].nutrition.protein - 80.0).abs() < 0.001);

        assert_eq!(totals[1].date, "2024-03-06");
        assert_eq!(totals[1].item_count, 2);
        assert!((totals[1].nutrition.calories - 350.0).abs() < 0.001);
        assert!((totals[1].nutrition.protein - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_day_follows_entry_offset() {
        let entries = vec![DiaryEntryRecord {
            consumed_at: "2024-03-05T23:30:00-05:00".to_string(),
            servings: 1.0,
            nutrition_item: Some(item(50.0, None)),
            recipe: None,
        }];
        let totals = daily_totals(&entries, &DiaryConfig::default());
        assert_eq!(totals[0].date, "2024-03-05");
    }

    #[test]
    fn test_skips_unparseable_and_empty_entries() {
        let entries = vec![
            DiaryEntryRecord {
                consumed_at: "never".to_string(),
                servings: 1.0,
                nutrition_item: Some(item(50.0, None)),
                recipe: None,
            },
            DiaryEntryRecord {
                consumed_at: "2024-03-05T10:00:00Z".to_string(),
                servings: 1.0,
                nutrition_item: None,
                recipe: None,
            },
        ];
        assert!(daily_totals(&entries, &DiaryConfig::default()).is_empty());
    }
}
