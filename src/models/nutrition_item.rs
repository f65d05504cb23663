//! Nutrition item models
//!
//! `NutritionItemRecord` is the catalogue item as the backend returns it; any
//! field may be absent. `NewNutritionItem` is the fully populated item built
//! from an imported CSV row.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::{Nutrition, NutritionField};

/// A catalogued nutrition item referenced by a diary entry or recipe item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct NutritionItemRecord {
    pub description: Option<String>,
    pub calories: Option<f64>,
    pub total_fat: Option<f64>,
    pub saturated_fat: Option<f64>,
    pub trans_fat: Option<f64>,
    pub polyunsaturated_fat: Option<f64>,
    pub monounsaturated_fat: Option<f64>,
    pub cholesterol: Option<f64>,
    pub sodium: Option<f64>,
    pub total_carbohydrate: Option<f64>,
    pub dietary_fiber: Option<f64>,
    pub total_sugars: Option<f64>,
    pub added_sugars: Option<f64>,
    pub protein: Option<f64>,
}

impl NutritionItemRecord {
    pub fn get(&self, field: NutritionField) -> Option<f64> {
        match field {
            NutritionField::Calories => self.calories,
            NutritionField::TotalFat => self.total_fat,
            NutritionField::SaturatedFat => self.saturated_fat,
            NutritionField::TransFat => self.trans_fat,
            NutritionField::PolyunsaturatedFat => self.polyunsaturated_fat,
            NutritionField::MonounsaturatedFat => self.monounsaturated_fat,
            NutritionField::Cholesterol => self.cholesterol,
            NutritionField::Sodium => self.sodium,
            NutritionField::TotalCarbohydrate => self.total_carbohydrate,
            NutritionField::DietaryFiber => self.dietary_fiber,
            NutritionField::TotalSugars => self.total_sugars,
            NutritionField::AddedSugars => self.added_sugars,
            NutritionField::Protein => self.protein,
        }
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Nutrition per serving, missing fields counted as zero
    pub fn nutrition(&self) -> Nutrition {
        Nutrition::from_fn(|field| self.get(field).unwrap_or(0.0))
    }
}

/// Nutrition item payload of a `NewDiaryEntry`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewNutritionItem {
    pub description: String,
    #[serde(flatten)]
    pub nutrition: Nutrition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let item: NutritionItemRecord =
            serde_json::from_str(r#"{"description": "Apple", "calories": 95}"#).unwrap();
        assert_eq!(item.description(), "Apple");
        assert_eq!(item.get(NutritionField::Calories), Some(95.0));
        assert_eq!(item.get(NutritionField::Protein), None);
        assert_eq!(item.nutrition().protein, 0.0);
    }

    #[test]
    fn test_new_item_serializes_flat() {
        let item = NewNutritionItem {
            description: "Oats".to_string(),
            nutrition: Nutrition {
                calories: 150.0,
                ..Nutrition::zero()
            },
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["description"], "Oats");
        assert_eq!(json["calories"], 150.0);
        assert!(json.get("nutrition").is_none());
    }
}
