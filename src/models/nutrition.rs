//! Shared nutrition data structure
//!
//! Used by imported entries and daily totals.

use serde::{Deserialize, Serialize};

/// One of the thirteen numeric nutrition facts carried by a nutrition item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionField {
    Calories,
    TotalFat,
    SaturatedFat,
    TransFat,
    PolyunsaturatedFat,
    MonounsaturatedFat,
    Cholesterol,
    Sodium,
    TotalCarbohydrate,
    DietaryFiber,
    TotalSugars,
    AddedSugars,
    Protein,
}

impl NutritionField {
    pub const ALL: [NutritionField; 13] = [
        NutritionField::Calories,
        NutritionField::TotalFat,
        NutritionField::SaturatedFat,
        NutritionField::TransFat,
        NutritionField::PolyunsaturatedFat,
        NutritionField::MonounsaturatedFat,
        NutritionField::Cholesterol,
        NutritionField::Sodium,
        NutritionField::TotalCarbohydrate,
        NutritionField::DietaryFiber,
        NutritionField::TotalSugars,
        NutritionField::AddedSugars,
        NutritionField::Protein,
    ];

    /// Field name as used in the backend's nutrition item records
    pub fn as_str(&self) -> &'static str {
        match self {
            NutritionField::Calories => "calories",
            NutritionField::TotalFat => "total_fat",
            NutritionField::SaturatedFat => "saturated_fat",
            NutritionField::TransFat => "trans_fat",
            NutritionField::PolyunsaturatedFat => "polyunsaturated_fat",
            NutritionField::MonounsaturatedFat => "monounsaturated_fat",
            NutritionField::Cholesterol => "cholesterol",
            NutritionField::Sodium => "sodium",
            NutritionField::TotalCarbohydrate => "total_carbohydrate",
            NutritionField::DietaryFiber => "dietary_fiber",
            NutritionField::TotalSugars => "total_sugars",
            NutritionField::AddedSugars => "added_sugars",
            NutritionField::Protein => "protein",
        }
    }

    /// Whether the field is stored as a whole number (kcal, mg)
    pub fn is_integral(&self) -> bool {
        matches!(
            self,
            NutritionField::Calories | NutritionField::Cholesterol | NutritionField::Sodium
        )
    }
}

/// Nutritional information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub total_fat: f64,           // grams
    pub saturated_fat: f64,       // grams
    pub trans_fat: f64,           // grams
    pub polyunsaturated_fat: f64, // grams
    pub monounsaturated_fat: f64, // grams
    pub cholesterol: f64,         // milligrams
    pub sodium: f64,              // milligrams
    pub total_carbohydrate: f64,  // grams
    pub dietary_fiber: f64,       // grams
    pub total_sugars: f64,        // grams
    pub added_sugars: f64,        // grams
    pub protein: f64,             // grams
}

impl Nutrition {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, field: NutritionField) -> f64 {
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

    pub fn set(&mut self, field: NutritionField, value: f64) {
        let slot = match field {
            NutritionField::Calories => &mut self.calories,
            NutritionField::TotalFat => &mut self.total_fat,
            NutritionField::SaturatedFat => &mut self.saturated_fat,
            NutritionField::TransFat => &mut self.trans_fat,
            NutritionField::PolyunsaturatedFat => &mut self.polyunsaturated_fat,
            NutritionField::MonounsaturatedFat => &mut self.monounsaturated_fat,
            NutritionField::Cholesterol => &mut self.cholesterol,
            NutritionField::Sodium => &mut self.sodium,
            NutritionField::TotalCarbohydrate => &mut self.total_carbohydrate,
            NutritionField::DietaryFiber => &mut self.dietary_fiber,
            NutritionField::TotalSugars => &mut self.total_sugars,
            NutritionField::AddedSugars => &mut self.added_sugars,
            NutritionField::Protein => &mut self.protein,
        };
        *slot = value;
    }

    /// Build from a per-field lookup
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(NutritionField) -> f64,
    {
        let mut nutrition = Self::zero();
        for field in NutritionField::ALL {
            nutrition.set(field, f(field));
        }
        nutrition
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self::from_fn(|field| self.get(field) * multiplier)
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self::from_fn(|field| self.get(field) + other.get(field))
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, multiplier: f64) -> Nutrition {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_cover_every_field() {
        let mut n = Nutrition::zero();
        for (i, field) in NutritionField::ALL.iter().enumerate() {
            n.set(*field, i as f64 + 1.0);
        }
        for (i, field) in NutritionField::ALL.iter().enumerate() {
            assert_eq!(n.get(*field), i as f64 + 1.0);
        }
        assert_eq!(n.calories, 1.0);
        assert_eq!(n.protein, 13.0);
    }

    #[test]
    fn test_scale_and_sum() {
        let a = Nutrition {
            calories: 100.0,
            protein: 5.0,
            ..Nutrition::zero()
        };
        let b = Nutrition {
            calories: 50.0,
            sodium: 20.0,
            ..Nutrition::zero()
        };
        let total: Nutrition = vec![a.clone() * 2.0, b].into_iter().sum();
        assert!((total.calories - 250.0).abs() < 0.001);
        assert!((total.protein - 10.0).abs() < 0.001);
        assert!((total.sodium - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_field_names_match_serde() {
        let json = serde_json::to_value(Nutrition::zero()).unwrap();
        for field in NutritionField::ALL {
            assert!(json.get(field.as_str()).is_some(), "missing {}", field.as_str());
        }
    }
}
