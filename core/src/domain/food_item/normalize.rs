use std::{
    collections::{BTreeMap, BTreeSet},
    sync::LazyLock,
};

use regex::Regex;
use serde_json::{Map, Value};

use crate::domain::{
    catalog::{Allergen, MacroMetric, canonical_tag},
    common::entities::app_errors::CoreError,
    food_item::{
        entities::{FoodItem, ItemSource, record_allergen_flag},
        value_objects::{NormalizedBatch, RejectedRecord},
    },
};

const NAME_KEYS: [&str; 4] = ["name", "title", "dishName", "description"];
const BRAND_KEYS: [&str; 3] = ["brand", "brandOwner", "restaurant"];
const FLAG_OBJECT_KEYS: [&str; 2] = ["allergens", "allergenFlags"];
const TAG_KEYS: [&str; 4] = ["categories", "categoryTags", "tags", "dietaryTags"];
const MACRO_KEYS: [&str; 3] = ["macros", "nutrition", "nutrients"];

static CONTAINS_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^contains[\s_-]*([a-z].*)$").expect("contains pattern is valid")
});

static FREE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.*[a-z])[\s_-]*free$").expect("free pattern is valid")
});

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(-?\d+(?:\.\d+)?)").expect("number pattern is valid")
});

/// Maps one heterogeneous catalog record into a [`FoodItem`].
///
/// Only the name is mandatory. Allergen information is read from every
/// shape the catalog sources use; when two shapes disagree, "present" wins.
pub fn normalize_record(source: ItemSource, record: &Value) -> Result<FoodItem, CoreError> {
    let object = record
        .as_object()
        .ok_or_else(|| CoreError::Invalid("catalog record must be a JSON object".to_string()))?;

    let name = first_string(object, &NAME_KEYS)
        .ok_or_else(|| CoreError::Invalid("catalog record has no name".to_string()))?;

    let mut item = FoodItem::new(name).with_source(source);
    item.brand = first_string(object, &BRAND_KEYS);
    item.allergen_flags = read_allergen_flags(object);
    item.category_tags = read_category_tags(object);
    item.macros = read_macros(object);

    Ok(item)
}

pub fn normalize_records(source: ItemSource, records: &[Value]) -> NormalizedBatch {
    let mut batch = NormalizedBatch::default();

    for (index, record) in records.iter().enumerate() {
        match normalize_record(source, record) {
            Ok(item) => batch.items.push((index, item)),
            Err(e) => batch.rejected.push(RejectedRecord {
                index,
                reason: e.to_string(),
            }),
        }
    }

    batch
}

fn first_string(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

fn as_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" => Some(true),
            "false" | "no" | "n" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn read_allergen_flags(object: &Map<String, Value>) -> BTreeMap<Allergen, bool> {
    let mut flags = BTreeMap::new();

    for key in FLAG_OBJECT_KEYS {
        match object.get(key) {
            Some(Value::Object(declared)) => {
                for (tag, value) in declared {
                    if let Some(present) = as_flag(value) {
                        record_allergen_flag(&mut flags, tag, present);
                    }
                }
            }
            Some(Value::Array(listed)) => {
                for tag in listed.iter().filter_map(Value::as_str) {
                    record_allergen_flag(&mut flags, tag, true);
                }

                // A verified list is exhaustive for the known allergens.
                if object.get("allergensVerified").and_then(as_flag) == Some(true) {
                    for allergen in Allergen::KNOWN {
                        flags.entry(allergen).or_insert(false);
                    }
                }
            }
            _ => {}
        }
    }

    for (key, value) in object {
        let Some(flag) = as_flag(value) else {
            continue;
        };

        if let Some(captures) = CONTAINS_KEY.captures(key) {
            record_allergen_flag(&mut flags, &captures[1], flag);
        } else if flag && let Some(captures) = FREE_KEY.captures(key) {
            record_allergen_flag(&mut flags, &captures[1], false);
        }
    }

    flags
}

fn read_category_tags(object: &Map<String, Value>) -> BTreeSet<String> {
    let listed = TAG_KEYS
        .iter()
        .filter_map(|key| object.get(*key))
        .filter_map(Value::as_array)
        .flatten()
        .filter_map(Value::as_str);

    let single = object.get("category").and_then(Value::as_str);

    listed
        .chain(single)
        .map(canonical_tag)
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn as_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => LEADING_NUMBER.captures(text)?[1].parse().ok()?,
        Value::Object(inner) => ["amount", "value", "quantity"]
            .iter()
            .find_map(|key| inner.get(*key).and_then(as_amount))?,
        _ => return None,
    };

    (amount.is_finite() && amount >= 0.0).then_some(amount)
}

fn read_macros(object: &Map<String, Value>) -> BTreeMap<MacroMetric, f64> {
    let mut macros = BTreeMap::new();

    for key in MACRO_KEYS {
        match object.get(key) {
            Some(Value::Object(declared)) => {
                for (name, value) in declared {
                    if let (Some(metric), Some(amount)) = (MacroMetric::from_alias(name), as_amount(value)) {
                        macros.entry(metric).or_insert(amount);
                    }
                }
            }
            // USDA style: [{ "nutrientName": "Protein", "value": 3.1 }, ...]
            Some(Value::Array(entries)) => {
                for entry in entries.iter().filter_map(Value::as_object) {
                    let metric = ["name", "nutrientName"]
                        .iter()
                        .filter_map(|key| entry.get(*key).and_then(Value::as_str))
                        .find_map(MacroMetric::from_alias);
                    let amount = ["amount", "value"]
                        .iter()
                        .find_map(|key| entry.get(*key).and_then(as_amount));

                    if let (Some(metric), Some(amount)) = (metric, amount) {
                        macros.entry(metric).or_insert(amount);
                    }
                }
            }
            _ => {}
        }
    }

    macros
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{
        profile::entities::RestrictionProfile,
        safety::{classifier::classify, entities::SafetyLevel},
    };

    #[test]
    fn test_restaurant_menu_document() {
        let record = json!({
            "dishName": "Pad Thai",
            "restaurant": "Thai Garden",
            "allergens": { "Peanuts": true, "contains_dairy": false, "Gluten": "no" },
            "tags": ["High Sodium", "spicy"],
            "nutrition": { "Carbohydrates": "56g", "sodium": 1400, "calories": 620 }
        });

        let item = normalize_record(ItemSource::Restaurant, &record).unwrap();

        assert_eq!(item.name, "Pad Thai");
        assert_eq!(item.brand.as_deref(), Some("Thai Garden"));
        assert_eq!(item.source, Some(ItemSource::Restaurant));
        assert_eq!(
            item.allergen_flags,
            BTreeMap::from([
                (Allergen::Gluten, false),
                (Allergen::Dairy, false),
                (Allergen::Peanut, true),
            ])
        );
        assert_eq!(
            item.category_tags,
            BTreeSet::from(["highSodium".to_string(), "spicy".to_string()])
        );
        assert_eq!(item.macros.get(&MacroMetric::Carbs), Some(&56.0));
        assert_eq!(item.macros.get(&MacroMetric::Sodium), Some(&1400.0));
    }

    #[test]
    fn test_grocery_product_with_top_level_flags() {
        let record = json!({
            "title": "Oat Crackers",
            "brandOwner": "Acme Foods",
            "contains_gluten": true,
            "dairyFree": true,
            "nut_free": false,
            "categories": ["grains", "processed"]
        });

        let item = normalize_record(ItemSource::Grocery, &record).unwrap();

        assert_eq!(item.allergen_flags.get(&Allergen::Gluten), Some(&true));
        assert_eq!(item.allergen_flags.get(&Allergen::Dairy), Some(&false));
        // "nut_free: false" says nothing about presence.
        assert_eq!(item.allergen_flags.get(&Allergen::TreeNut), None);
    }

    #[test]
    fn test_verified_allergen_list_marks_others_absent() {
        let record = json!({
            "name": "Shrimp Salad",
            "allergens": ["Shellfish"],
            "allergensVerified": true
        });

        let item = normalize_record(ItemSource::Recipe, &record).unwrap();

        assert_eq!(item.allergen_flags.len(), Allergen::KNOWN.len());
        assert_eq!(item.allergen_flags.get(&Allergen::Shellfish), Some(&true));
        assert_eq!(item.allergen_flags.get(&Allergen::Peanut), Some(&false));
    }

    #[test]
    fn test_unverified_allergen_list_leaves_others_unknown() {
        let record = json!({ "name": "Shrimp Salad", "allergens": ["Shellfish"] });

        let item = normalize_record(ItemSource::Recipe, &record).unwrap();

        assert_eq!(
            item.allergen_flags,
            BTreeMap::from([(Allergen::Shellfish, true)])
        );
    }

    #[test]
    fn test_present_wins_over_absent() {
        let record = json!({
            "name": "Cheese Plate",
            "allergenFlags": { "dairy": false },
            "contains_milk": true
        });

        let item = normalize_record(ItemSource::Restaurant, &record).unwrap();

        assert_eq!(item.allergen_flags.get(&Allergen::Dairy), Some(&true));
    }

    #[test]
    fn test_narrow_free_claims_leave_allergen_unverified() {
        let cases = [
            (json!({ "name": "Lactose-free milk", "lactoseFree": true }), Allergen::Dairy),
            (json!({ "name": "Barley soup", "allergens": { "wheat": false } }), Allergen::Gluten),
            (json!({ "name": "Peanut brittle", "nut_free": true }), Allergen::Peanut),
            (json!({ "name": "Walnut loaf", "nut_free": true }), Allergen::TreeNut),
        ];

        for (record, allergen) in cases {
            let item = normalize_record(ItemSource::Grocery, &record).unwrap();
            let profile = RestrictionProfile {
                banned_allergens: BTreeSet::from([allergen.clone()]),
                ..Default::default()
            };

            assert_eq!(item.allergen_flags.get(&allergen), None, "{record}");
            assert_eq!(classify(&item, &profile).level, SafetyLevel::Unknown, "{record}");
        }
    }

    #[test]
    fn test_absence_shapes_under_every_alias() {
        for allergen in Allergen::KNOWN {
            let profile = RestrictionProfile {
                banned_allergens: BTreeSet::from([allergen.clone()]),
                ..Default::default()
            };

            for alias in allergen.names().iter().chain(allergen.narrower_aliases()) {
                let mut declared = Map::new();
                declared.insert(alias.to_string(), json!(false));

                let records = [
                    json!({ "name": "Snack", "allergens": declared }),
                    json!({ "name": "Snack", format!("{alias}Free"): true }),
                    json!({ "name": "Snack", format!("{alias}_free"): "yes" }),
                    json!({ "name": "Snack", format!("contains_{alias}"): false }),
                ];

                for record in records {
                    let item = normalize_record(ItemSource::Grocery, &record).unwrap();
                    let level = classify(&item, &profile).level;

                    if allergen.names().contains(alias) {
                        assert_eq!(level, SafetyLevel::Safe, "{record}");
                    } else {
                        assert_ne!(level, SafetyLevel::Safe, "{record}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_usda_style_nutrient_array() {
        let record = json!({
            "description": "Banana, raw",
            "nutrients": [
                { "nutrientName": "Carbohydrate, by difference", "value": 22.8 },
                { "nutrientName": "Potassium, K", "value": 358 },
                { "nutrientName": "Vitamin C", "value": 8.7 }
            ]
        });

        let item = normalize_record(ItemSource::Grocery, &record).unwrap();

        assert_eq!(item.name, "Banana, raw");
        assert_eq!(item.macros.len(), 2);
        assert_eq!(item.macros.get(&MacroMetric::Potassium), Some(&358.0));
    }

    #[test]
    fn test_record_without_name_is_rejected() {
        let err = normalize_record(ItemSource::Grocery, &json!({ "brand": "Acme" })).unwrap_err();
        assert!(matches!(err, CoreError::Invalid(_)));

        let err = normalize_record(ItemSource::Grocery, &json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err, CoreError::Invalid(_)));
    }

    #[test]
    fn test_batch_reports_failures_without_aborting() {
        let records = vec![
            json!({ "name": "Toast" }),
            json!({ "brand": "Nameless" }),
            json!({ "name": "Jam" }),
        ];

        let batch = normalize_records(ItemSource::Grocery, &records);

        assert_eq!(batch.items.len(), 2);
        assert_eq!(batch.items[1].0, 2);
        assert_eq!(batch.rejected.len(), 1);
        assert_eq!(batch.rejected[0].index, 1);
    }
}
