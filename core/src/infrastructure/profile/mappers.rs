use sea_orm::prelude::Json;

use crate::{domain::profile::entities::ProfileDocument, entity::restriction_profiles};

/// String entries of a JSON array column; anything else is skipped.
pub fn json_strings(value: &Json) -> Vec<String> {
    value
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(Json::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

pub fn strings_json(values: &[String]) -> Json {
    Json::Array(values.iter().cloned().map(Json::String).collect())
}

impl From<&restriction_profiles::Model> for ProfileDocument {
    fn from(model: &restriction_profiles::Model) -> Self {
        Self {
            user_id: model.user_id,
            allergens: json_strings(&model.allergens),
            conditions: json_strings(&model.conditions),
            lifestyles: json_strings(&model.lifestyles),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<restriction_profiles::Model> for ProfileDocument {
    fn from(model: restriction_profiles::Model) -> Self {
        Self::from(&model)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_model_maps_to_document() {
        let model = restriction_profiles::Model {
            user_id: Uuid::new_v4(),
            allergens: json!(["peanut", 3, "sesame"]),
            conditions: json!(["gout"]),
            lifestyles: json!(null),
            updated_at: Utc::now().fixed_offset(),
        };

        let document = ProfileDocument::from(&model);

        assert_eq!(document.allergens, vec!["peanut", "sesame"]);
        assert_eq!(document.conditions, vec!["gout"]);
        assert!(document.lifestyles.is_empty());
        assert_eq!(strings_json(&document.allergens), json!(["peanut", "sesame"]));
    }
}
