//! Recipe model
//!
//! A named list of ingredients, each a nutrition item with a serving multiplier.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::NutritionItemRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct RecipeRecord {
    pub name: String,
    #[serde(default)]
    pub recipe_items: Vec<RecipeItemRecord>,
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct RecipeItemRecord {
    pub servings: f64,
    pub nutrition_item: NutritionItemRecord,
}

impl RecipeItemRecord {
    /// Description as shown in an exported row, e.g. "Chili - Beans"
    pub fn row_description(&self, recipe_name: &str) -> String {
        format!("{} - {}", recipe_name, self.nutrition_item.description())
    }
}
