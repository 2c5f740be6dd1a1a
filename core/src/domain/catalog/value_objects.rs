use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::catalog::{
    allergen::Allergen,
    entities::{Condition, Lifestyle, MacroMetric},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MacroCapEntry {
    pub metric: MacroMetric,
    pub cap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogEntry {
    pub id: String,
    pub shield_tags: Vec<String>,
    pub macro_caps: Vec<MacroCapEntry>,
}

/// Everything a client needs to render the onboarding pickers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogListing {
    pub allergens: Vec<String>,
    pub conditions: Vec<CatalogEntry>,
    pub lifestyles: Vec<CatalogEntry>,
}

impl CatalogListing {
    pub fn current() -> Self {
        let allergens = Allergen::KNOWN
            .iter()
            .map(|allergen| allergen.as_str().to_string())
            .collect();

        let conditions = Condition::ALL
            .iter()
            .map(|condition| CatalogEntry {
                id: condition.id().to_string(),
                shield_tags: to_owned_tags(condition.shield_tags()),
                macro_caps: Vec::new(),
            })
            .collect();

        let lifestyles = Lifestyle::ALL
            .iter()
            .map(|lifestyle| CatalogEntry {
                id: lifestyle.id().to_string(),
                shield_tags: to_owned_tags(lifestyle.shield_tags()),
                macro_caps: lifestyle
                    .macro_caps()
                    .iter()
                    .map(|(metric, cap)| MacroCapEntry {
                        metric: *metric,
                        cap: *cap,
                    })
                    .collect(),
            })
            .collect();

        Self {
            allergens,
            conditions,
            lifestyles,
        }
    }
}

fn to_owned_tags(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|tag| tag.to_string()).collect()
}
