use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    catalog::{Allergen, MacroMetric},
    profile::value_objects::ProfileSources,
};

/// Effective restriction set of a user, always derived fresh from the stored
/// allergen, condition and lifestyle lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct RestrictionProfile {
    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    pub banned_allergens: BTreeSet<Allergen>,
    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    pub banned_categories: BTreeSet<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub macro_caps: BTreeMap<MacroMetric, f64>,
}

impl RestrictionProfile {
    pub fn is_unrestricted(&self) -> bool {
        self.banned_allergens.is_empty()
            && self.banned_categories.is_empty()
            && self.macro_caps.is_empty()
    }
}

/// Per-user document as kept by the profile store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfileDocument {
    pub user_id: Uuid,
    pub allergens: Vec<String>,
    pub conditions: Vec<String>,
    pub lifestyles: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileDocument {
    pub fn new(user_id: Uuid, sources: ProfileSources) -> Self {
        Self {
            user_id,
            allergens: sources.allergens,
            conditions: sources.conditions,
            lifestyles: sources.lifestyles,
            updated_at: Utc::now(),
        }
    }

    pub fn sources(&self) -> ProfileSources {
        ProfileSources {
            allergens: self.allergens.clone(),
            conditions: self.conditions.clone(),
            lifestyles: self.lifestyles.clone(),
        }
    }
}
