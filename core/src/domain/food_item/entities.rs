use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::catalog::{Allergen, MacroMetric, canonical_tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemSource {
    Restaurant,
    Grocery,
    Recipe,
}

/// A restaurant menu item, grocery product or recipe, in the shape the
/// classifier consumes.
///
/// A banned allergen missing from `allergen_flags` means "not verified",
/// never "absent".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub source: Option<ItemSource>,
    #[serde(default, deserialize_with = "deserialize_allergen_flags")]
    #[schema(value_type = Object)]
    pub allergen_flags: BTreeMap<Allergen, bool>,
    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    pub category_tags: BTreeSet<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub macros: BTreeMap<MacroMetric, f64>,
}

/// Merges one allergen declaration into `flags`.
///
/// Several spellings can land on the same allergen, so "present" wins over
/// "absent". Absence is only recorded for a tag naming the whole allergen.
pub fn record_allergen_flag(flags: &mut BTreeMap<Allergen, bool>, raw_tag: &str, present: bool) {
    let allergen = if present {
        Allergen::parse(raw_tag)
    } else {
        Allergen::parse_absent(raw_tag)
    };

    if let Some(allergen) = allergen {
        flags
            .entry(allergen)
            .and_modify(|current| *current |= present)
            .or_insert(present);
    }
}

fn deserialize_allergen_flags<'de, D>(deserializer: D) -> Result<BTreeMap<Allergen, bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let declared = BTreeMap::<String, bool>::deserialize(deserializer)?;

    let mut flags = BTreeMap::new();
    for (tag, present) in &declared {
        record_allergen_flag(&mut flags, tag, *present);
    }
    Ok(flags)
}

impl FoodItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brand: None,
            source: None,
            allergen_flags: BTreeMap::new(),
            category_tags: BTreeSet::new(),
            macros: BTreeMap::new(),
        }
    }

    pub fn with_source(mut self, source: ItemSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_allergen(mut self, allergen: Allergen, present: bool) -> Self {
        self.allergen_flags.insert(allergen, present);
        self
    }

    pub fn with_category(mut self, tag: &str) -> Self {
        let tag = canonical_tag(tag);
        if !tag.is_empty() {
            self.category_tags.insert(tag);
        }
        self
    }

    pub fn with_macro(mut self, metric: MacroMetric, value: f64) -> Self {
        self.macros.insert(metric, value);
        self
    }

    /// Category tags in canonical form, whatever spelling the item arrived with.
    pub fn canonical_categories(&self) -> BTreeSet<String> {
        self.category_tags
            .iter()
            .map(|tag| canonical_tag(tag))
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{
        profile::entities::RestrictionProfile,
        safety::{classifier::classify, entities::SafetyLevel},
    };

    fn banning(allergen: &Allergen) -> RestrictionProfile {
        RestrictionProfile {
            banned_allergens: BTreeSet::from([allergen.clone()]),
            ..Default::default()
        }
    }

    #[test]
    fn test_declared_presence_survives_alias_absence() {
        let item: FoodItem = serde_json::from_value(json!({
            "name": "Cheese",
            "allergen_flags": { "dairy": true, "milk": false }
        }))
        .unwrap();

        assert_eq!(item.allergen_flags, BTreeMap::from([(Allergen::Dairy, true)]));

        let item: FoodItem = serde_json::from_value(json!({
            "name": "Cheese",
            "allergen_flags": { "milk": true, "dairy": false }
        }))
        .unwrap();

        assert_eq!(item.allergen_flags, BTreeMap::from([(Allergen::Dairy, true)]));
    }

    #[test]
    fn test_serialized_flags_read_back_unchanged() {
        let item = FoodItem::new("Trail Mix")
            .with_allergen(Allergen::TreeNut, true)
            .with_allergen(Allergen::Peanut, false);

        let parsed: FoodItem = serde_json::from_value(serde_json::to_value(&item).unwrap()).unwrap();

        assert_eq!(parsed, item);
    }

    #[test]
    fn test_absence_under_any_alias_is_never_safe() {
        for allergen in Allergen::KNOWN {
            for alias in allergen.names().iter().chain(allergen.narrower_aliases()) {
                let mut flags = serde_json::Map::new();
                flags.insert(alias.to_string(), json!(false));
                let item: FoodItem = serde_json::from_value(json!({
                    "name": "Declared free",
                    "allergen_flags": flags
                }))
                .unwrap();

                let level = classify(&item, &banning(&allergen)).level;

                if allergen.names().contains(alias) {
                    assert_eq!(level, SafetyLevel::Safe, "{alias}");
                } else {
                    assert_eq!(level, SafetyLevel::Unknown, "{alias}");
                }
            }
        }
    }
}
