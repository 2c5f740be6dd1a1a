use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    catalog::MacroMetric,
    food_item::entities::{FoodItem, ItemSource},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodSearchResult {
    pub fdc_id: u64,
    pub description: String,
    pub data_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_owner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodNutrient {
    pub nutrient_id: u32,
    pub nutrient_name: String,
    pub unit_name: String,
    /// Amount per 100 g.
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodDetails {
    pub fdc_id: u64,
    pub description: String,
    pub data_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_owner: Option<String>,
    pub food_nutrients: Vec<FoodNutrient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size_unit: Option<String>,
}

impl FoodDetails {
    /// Multiplier turning per-100 g amounts into per-serving amounts. Only a
    /// gram-based serving can be converted.
    pub fn serving_factor(&self) -> Option<f64> {
        match (self.serving_size, self.serving_size_unit.as_deref()) {
            (Some(size), Some(unit))
                if size > 0.0
                    && matches!(unit.to_ascii_lowercase().as_str(), "g" | "grm" | "gram" | "grams") =>
            {
                Some(size / 100.0)
            }
            _ => None,
        }
    }

    /// Grocery item carrying the nutrients the catalog knows about, per
    /// serving. Nutrition databases say nothing about allergens, so no
    /// allergen flag is set. Without a gram-based serving size no macro is
    /// set either, since caps apply per serving.
    pub fn to_food_item(&self) -> FoodItem {
        let mut item = FoodItem::new(self.description.clone()).with_source(ItemSource::Grocery);
        item.brand = self.brand_owner.clone();

        let Some(factor) = self.serving_factor() else {
            return item;
        };

        for nutrient in &self.food_nutrients {
            let Some(metric) = MacroMetric::from_alias(&nutrient.nutrient_name) else {
                continue;
            };
            // Energy is also reported in kJ.
            if metric == MacroMetric::Calories && !nutrient.unit_name.eq_ignore_ascii_case("kcal") {
                continue;
            }
            item.macros.entry(metric).or_insert(nutrient.amount * factor);
        }

        item
    }
}
