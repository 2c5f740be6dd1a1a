use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    catalog::vocabulary::{canonical_tag, compact_key},
    common::entities::app_errors::CoreError,
};

/// Nutrition facts a lifestyle may cap and an item may declare.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum MacroMetric {
    Calories,
    Carbs,
    Protein,
    Fat,
    Sugar,
    Sodium,
    Potassium,
    Fiber,
}

impl MacroMetric {
    pub const ALL: [MacroMetric; 8] = [
        MacroMetric::Calories,
        MacroMetric::Carbs,
        MacroMetric::Protein,
        MacroMetric::Fat,
        MacroMetric::Sugar,
        MacroMetric::Sodium,
        MacroMetric::Potassium,
        MacroMetric::Fiber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MacroMetric::Calories => "calories",
            MacroMetric::Carbs => "carbs",
            MacroMetric::Protein => "protein",
            MacroMetric::Fat => "fat",
            MacroMetric::Sugar => "sugar",
            MacroMetric::Sodium => "sodium",
            MacroMetric::Potassium => "potassium",
            MacroMetric::Fiber => "fiber",
        }
    }

    /// Lenient lookup used when reading nutrition data from outside sources.
    pub fn from_alias(raw: &str) -> Option<Self> {
        let metric = match compact_key(raw).as_str() {
            "calories" | "calorie" | "energy" | "kcal" => MacroMetric::Calories,
            "carbs" | "carb" | "carbohydrate" | "carbohydrates" | "totalcarbohydrate"
            | "carbohydratebydifference" => MacroMetric::Carbs,
            "protein" | "proteins" => MacroMetric::Protein,
            "fat" | "fats" | "totalfat" | "totallipidfat" => MacroMetric::Fat,
            "sugar" | "sugars" | "totalsugars" | "sugarstotalincludingnlea" => MacroMetric::Sugar,
            "sodium" | "sodiumna" | "salt" => MacroMetric::Sodium,
            "potassium" | "potassiumk" => MacroMetric::Potassium,
            "fiber" | "fibre" | "dietaryfiber" | "fibertotaldietary" => MacroMetric::Fiber,
            _ => return None,
        };
        Some(metric)
    }
}

impl fmt::Display for MacroMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Medical conditions a user can declare during onboarding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum Condition {
    KidneyDisease,
    Hypertension,
    Diabetes,
    HeartDisease,
    Gout,
    Ibs,
    Gerd,
    LactoseIntolerance,
    Pregnancy,
}

impl Condition {
    pub const ALL: [Condition; 9] = [
        Condition::KidneyDisease,
        Condition::Hypertension,
        Condition::Diabetes,
        Condition::HeartDisease,
        Condition::Gout,
        Condition::Ibs,
        Condition::Gerd,
        Condition::LactoseIntolerance,
        Condition::Pregnancy,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Condition::KidneyDisease => "kidneyDisease",
            Condition::Hypertension => "hypertension",
            Condition::Diabetes => "diabetes",
            Condition::HeartDisease => "heartDisease",
            Condition::Gout => "gout",
            Condition::Ibs => "ibs",
            Condition::Gerd => "gerd",
            Condition::LactoseIntolerance => "lactoseIntolerance",
            Condition::Pregnancy => "pregnancy",
        }
    }

    /// Auto-shield mapping: category tags banned while the condition is active.
    pub fn shield_tags(&self) -> &'static [&'static str] {
        match self {
            Condition::KidneyDisease => &["highSodium", "highPotassium", "highPhosphorus"],
            Condition::Hypertension => &["highSodium"],
            Condition::Diabetes => &["refinedSugar", "highSugar"],
            Condition::HeartDisease => &["highSodium", "saturatedFat", "friedFood"],
            Condition::Gout => &["highPurine", "organMeat", "alcohol"],
            Condition::Ibs => &["highFodmap", "friedFood"],
            Condition::Gerd => &["spicy", "acidic", "caffeine", "alcohol"],
            Condition::LactoseIntolerance => &["dairy"],
            Condition::Pregnancy => &["alcohol", "rawFish", "unpasteurized", "highMercury"],
        }
    }
}

impl FromStr for Condition {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = compact_key(&canonical_tag(s));
        Condition::ALL
            .into_iter()
            .find(|condition| compact_key(condition.id()) == key)
            .ok_or_else(|| CoreError::unknown_catalog_id("condition", s))
    }
}

/// Lifestyle diets a user can follow.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum Lifestyle {
    Vegan,
    Vegetarian,
    Pescatarian,
    Keto,
    Paleo,
    LowCarb,
    LowSodium,
    Halal,
    Kosher,
}

impl Lifestyle {
    pub const ALL: [Lifestyle; 9] = [
        Lifestyle::Vegan,
        Lifestyle::Vegetarian,
        Lifestyle::Pescatarian,
        Lifestyle::Keto,
        Lifestyle::Paleo,
        Lifestyle::LowCarb,
        Lifestyle::LowSodium,
        Lifestyle::Halal,
        Lifestyle::Kosher,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Lifestyle::Vegan => "vegan",
            Lifestyle::Vegetarian => "vegetarian",
            Lifestyle::Pescatarian => "pescatarian",
            Lifestyle::Keto => "keto",
            Lifestyle::Paleo => "paleo",
            Lifestyle::LowCarb => "lowCarb",
            Lifestyle::LowSodium => "lowSodium",
            Lifestyle::Halal => "halal",
            Lifestyle::Kosher => "kosher",
        }
    }

    pub fn shield_tags(&self) -> &'static [&'static str] {
        match self {
            Lifestyle::Vegan => &[
                "meat", "poultry", "pork", "fish", "seafood", "dairy", "egg", "honey", "gelatin",
            ],
            Lifestyle::Vegetarian => &["meat", "poultry", "pork", "fish", "seafood", "gelatin"],
            Lifestyle::Pescatarian => &["meat", "poultry", "pork"],
            Lifestyle::Keto => &["refinedSugar", "grains", "starch"],
            Lifestyle::Paleo => &["grains", "legumes", "dairy", "refinedSugar", "processed"],
            Lifestyle::LowCarb => &["refinedSugar"],
            Lifestyle::LowSodium => &["highSodium"],
            Lifestyle::Halal => &["pork", "alcohol"],
            Lifestyle::Kosher => &["pork", "shellfish"],
        }
    }

    /// Per-serving ceilings (grams, milligrams for sodium).
    pub fn macro_caps(&self) -> &'static [(MacroMetric, f64)] {
        match self {
            Lifestyle::Keto => &[(MacroMetric::Carbs, 10.0)],
            Lifestyle::Paleo => &[(MacroMetric::Carbs, 25.0)],
            Lifestyle::LowCarb => &[(MacroMetric::Carbs, 30.0)],
            Lifestyle::LowSodium => &[(MacroMetric::Sodium, 600.0)],
            _ => &[],
        }
    }
}

impl FromStr for Lifestyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = compact_key(&canonical_tag(s));
        Lifestyle::ALL
            .into_iter()
            .find(|lifestyle| compact_key(lifestyle.id()) == key)
            .ok_or_else(|| CoreError::unknown_catalog_id("lifestyle", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_ids_parse_leniently() {
        assert_eq!("kidneyDisease".parse::<Condition>(), Ok(Condition::KidneyDisease));
        assert_eq!("kidney_disease".parse::<Condition>(), Ok(Condition::KidneyDisease));
        assert_eq!("GERD".parse::<Condition>(), Ok(Condition::Gerd));
    }

    #[test]
    fn test_unknown_catalog_id_is_rejected() {
        assert_eq!(
            "scurvy".parse::<Condition>(),
            Err(CoreError::unknown_catalog_id("condition", "scurvy"))
        );
        assert_eq!(
            "carnivore".parse::<Lifestyle>(),
            Err(CoreError::unknown_catalog_id("lifestyle", "carnivore"))
        );
        assert!("".parse::<Lifestyle>().is_err());
    }

    #[test]
    fn test_every_id_round_trips_through_from_str() {
        for condition in Condition::ALL {
            assert_eq!(condition.id().parse::<Condition>(), Ok(condition));
        }
        for lifestyle in Lifestyle::ALL {
            assert_eq!(lifestyle.id().parse::<Lifestyle>(), Ok(lifestyle));
        }
    }

    #[test]
    fn test_shield_tags_are_canonical() {
        let tags = Condition::ALL
            .iter()
            .flat_map(|c| c.shield_tags())
            .chain(Lifestyle::ALL.iter().flat_map(|l| l.shield_tags()));
        for tag in tags {
            assert_eq!(canonical_tag(tag), *tag);
        }
    }

    #[test]
    fn test_serde_ids_match_catalog_ids() {
        assert_eq!(
            serde_json::to_string(&Lifestyle::LowSodium).unwrap(),
            "\"lowSodium\""
        );
        assert_eq!(
            serde_json::to_string(&Condition::LactoseIntolerance).unwrap(),
            "\"lactoseIntolerance\""
        );
    }

    #[test]
    fn test_metric_aliases() {
        assert_eq!(MacroMetric::from_alias("Carbohydrates"), Some(MacroMetric::Carbs));
        assert_eq!(MacroMetric::from_alias("Sodium, Na"), Some(MacroMetric::Sodium));
        assert_eq!(MacroMetric::from_alias("Energy"), Some(MacroMetric::Calories));
        assert_eq!(MacroMetric::from_alias("vitamin c"), None);
    }
}
