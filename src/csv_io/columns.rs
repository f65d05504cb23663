//! Column table shared by export and import
//!
//! Maps each CSV header to the value it carries.

use crate::models::NutritionField;

pub const DATE: &str = "Date";
pub const TIME: &str = "Time";
pub const CONSUMED_AT: &str = "Consumed At";
pub const DESCRIPTION: &str = "Description";
pub const SERVINGS: &str = "Servings";

/// Where a column's cell comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnValue {
    Date,
    Time,
    ConsumedAt,
    Description,
    Servings,
    Nutrition(NutritionField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub value: ColumnValue,
}

const fn column(header: &'static str, value: ColumnValue) -> Column {
    Column { header, value }
}

const fn nutrient(header: &'static str, field: NutritionField) -> Column {
    Column {
        header,
        value: ColumnValue::Nutrition(field),
    }
}

/// Export columns in output order
pub const EXPORT_COLUMNS: [Column; 18] = [
    column(DATE, ColumnValue::Date),
    column(TIME, ColumnValue::Time),
    column(CONSUMED_AT, ColumnValue::ConsumedAt),
    column(DESCRIPTION, ColumnValue::Description),
    column(SERVINGS, ColumnValue::Servings),
    nutrient("Calories", NutritionField::Calories),
    nutrient("Total Fat (g)", NutritionField::TotalFat),
    nutrient("Saturated Fat (g)", NutritionField::SaturatedFat),
    nutrient("Trans Fat (g)", NutritionField::TransFat),
    nutrient("Polyunsaturated Fat (g)", NutritionField::PolyunsaturatedFat),
    nutrient("Monounsaturated Fat (g)", NutritionField::MonounsaturatedFat),
    nutrient("Cholesterol (mg)", NutritionField::Cholesterol),
    nutrient("Sodium (mg)", NutritionField::Sodium),
    nutrient("Total Carbohydrate (g)", NutritionField::TotalCarbohydrate),
    nutrient("Dietary Fiber (g)", NutritionField::DietaryFiber),
    nutrient("Total Sugars (g)", NutritionField::TotalSugars),
    nutrient("Added Sugars (g)", NutritionField::AddedSugars),
    nutrient("Protein (g)", NutritionField::Protein),
];

/// Headers the importer reads; Date and Time are derived data and ignored
pub const IMPORT_COLUMNS: [&str; 16] = [
    CONSUMED_AT,
    DESCRIPTION,
    SERVINGS,
    "Calories",
    "Total Fat (g)",
    "Saturated Fat (g)",
    "Trans Fat (g)",
    "Polyunsaturated Fat (g)",
    "Monounsaturated Fat (g)",
    "Cholesterol (mg)",
    "Sodium (mg)",
    "Total Carbohydrate (g)",
    "Dietary Fiber (g)",
    "Total Sugars (g)",
    "Added Sugars (g)",
    "Protein (g)",
];

/// Header of the column carrying a nutrition field
pub fn nutrition_header(field: NutritionField) -> &'static str {
    EXPORT_COLUMNS
        .iter()
        .find(|c| c.value == ColumnValue::Nutrition(field))
        .map(|c| c.header)
        .unwrap_or_else(|| field.as_str())
}

/// The export header row
pub fn header_row() -> String {
    EXPORT_COLUMNS
        .iter()
        .map(|c| c.header)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_nutrition_field_has_a_column() {
        for field in NutritionField::ALL {
            let header = nutrition_header(field);
            assert_ne!(header, field.as_str(), "no column for {:?}", field);
            assert!(IMPORT_COLUMNS.contains(&header));
        }
    }

    #[test]
    fn test_import_columns_are_export_columns_minus_date_time() {
        let exported: Vec<&str> = EXPORT_COLUMNS
            .iter()
            .map(|c| c.header)
            .filter(|h| *h != DATE && *h != TIME)
            .collect();
        assert_eq!(exported, IMPORT_COLUMNS.to_vec());
    }

    #[test]
    fn test_header_row() {
        let header = header_row();
        assert!(header.starts_with("Date,Time,Consumed At,Description,Servings,Calories,"));
        assert!(header.ends_with(",Added Sugars (g),Protein (g)"));
        assert_eq!(header.split(',').count(), 18);
    }
}
