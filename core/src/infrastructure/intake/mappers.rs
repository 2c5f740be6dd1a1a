use std::collections::BTreeMap;

use sea_orm::prelude::Json;

use crate::{
    domain::{catalog::MacroMetric, intake::entities::IntakeEntry},
    entity::intake_entries,
};

pub fn macros_to_json(macros: &BTreeMap<MacroMetric, f64>) -> Json {
    Json::Object(
        macros
            .iter()
            .map(|(metric, value)| (metric.to_string(), Json::from(*value)))
            .collect(),
    )
}

/// Unknown metrics and non-numeric values are dropped.
pub fn macros_from_json(value: &Json) -> BTreeMap<MacroMetric, f64> {
    value
        .as_object()
        .map(|object| {
            object
                .iter()
                .filter_map(|(key, value)| Some((MacroMetric::from_alias(key)?, value.as_f64()?)))
                .collect()
        })
        .unwrap_or_default()
}

impl From<&intake_entries::Model> for IntakeEntry {
    fn from(model: &intake_entries::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            consumed_on: model.consumed_on,
            name: model.name.clone(),
            servings: model.servings,
            macros: macros_from_json(&model.macros),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<intake_entries::Model> for IntakeEntry {
    fn from(model: intake_entries::Model) -> Self {
        Self::from(&model)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_macros_json_mapping() {
        let macros = BTreeMap::from([(MacroMetric::Carbs, 12.5), (MacroMetric::Sodium, 300.0)]);

        let value = macros_to_json(&macros);
        assert_eq!(value, json!({ "carbs": 12.5, "sodium": 300.0 }));
        assert_eq!(macros_from_json(&value), macros);

        let noisy = json!({ "carbs": 4, "vitaminC": 9, "fat": "lots" });
        assert_eq!(
            macros_from_json(&noisy),
            BTreeMap::from([(MacroMetric::Carbs, 4.0)])
        );
    }
}
