//! Diary entry models
//!
//! Represents food consumed, either from a recipe or a direct nutrition item.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::{NewNutritionItem, NutritionItemRecord, RecipeRecord};

/// A logged diary entry as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DiaryEntryRecord {
    pub consumed_at: String,
    pub servings: f64,
    pub nutrition_item: Option<NutritionItemRecord>,
    pub recipe: Option<RecipeRecord>,
}

/// One loggable nutrition item of an entry, with its effective servings
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedItem<'a> {
    pub description: String,
    pub servings: f64,
    pub item: &'a NutritionItemRecord,
}

/// What a diary entry refers to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntrySource<'a> {
    Item(&'a NutritionItemRecord),
    Recipe(&'a RecipeRecord),
}

impl DiaryEntryRecord {
    /// The entry's source; a nutrition item wins over a recipe when both are set.
    pub fn source(&self) -> Option<EntrySource<'_>> {
        match (&self.nutrition_item, &self.recipe) {
            (Some(item), _) => Some(EntrySource::Item(item)),
            (None, Some(recipe)) => Some(EntrySource::Recipe(recipe)),
            (None, None) => None,
        }
    }

    /// Expand into loggable items: the item itself at the entry's servings, or
    /// one line per recipe ingredient at entry servings times ingredient servings.
    pub fn logged_items(&self) -> Vec<LoggedItem<'_>> {
        match self.source() {
            Some(EntrySource::Item(item)) => vec![LoggedItem {
                description: item.description().to_string(),
                servings: self.servings,
                item,
            }],
            Some(EntrySource::Recipe(recipe)) => recipe
                .recipe_items
                .iter()
                .map(|ri| LoggedItem {
                    description: ri.row_description(&recipe.name),
                    servings: self.servings * ri.servings,
                    item: &ri.nutrition_item,
                })
                .collect(),
            None => Vec::new(),
        }
    }
}

/// A validated entry built from an imported CSV row, ready for submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDiaryEntry {
    pub consumed_at: String,
    pub servings: f64,
    pub nutrition_item: NewNutritionItem,
}
