use safeplate_core::domain::{
    food_item::{FoodItem, ItemSource},
    profile::RestrictionProfile,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

fn validate_item(item: &FoodItem) -> Result<(), ValidationError> {
    if item.name.trim().is_empty() {
        return Err(ValidationError::new("item_name").with_message("item name is required".into()));
    }
    Ok(())
}

fn validate_items(items: &[FoodItem]) -> Result<(), ValidationError> {
    items.iter().try_for_each(validate_item)
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ClassifyItemValidator {
    #[serde(default)]
    pub profile: RestrictionProfile,

    #[validate(custom(function = "validate_item"))]
    pub item: FoodItem,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct EvaluateItemsValidator {
    #[validate(
        length(max = 500, message = "too many items in one request"),
        custom(function = "validate_items")
    )]
    pub items: Vec<FoodItem>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct EvaluateRecordsValidator {
    pub source: ItemSource,

    #[validate(length(max = 500, message = "too many records in one request"))]
    #[schema(value_type = Vec<Object>)]
    pub records: Vec<Value>,
}
