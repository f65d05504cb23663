//! Data models
//!
//! Diary entries as received from the backend, and the entries built by CSV import.

mod diary_entry;
mod nutrition;
mod nutrition_item;
mod recipe;

pub use diary_entry::{DiaryEntryRecord, EntrySource, LoggedItem, NewDiaryEntry};
pub use nutrition::{Nutrition, NutritionField};
pub use nutrition_item::{NewNutritionItem, NutritionItemRecord};
pub use recipe::{RecipeItemRecord, RecipeRecord};
