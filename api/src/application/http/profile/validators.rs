use safeplate_core::domain::profile::ProfileSources;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProfileSourcesValidator {
    #[serde(default)]
    #[validate(length(max = 64, message = "too many allergens"))]
    pub allergens: Vec<String>,

    #[serde(default)]
    #[validate(length(max = 64, message = "too many conditions"))]
    pub conditions: Vec<String>,

    #[serde(default)]
    #[validate(length(max = 64, message = "too many lifestyles"))]
    pub lifestyles: Vec<String>,
}

impl From<ProfileSourcesValidator> for ProfileSources {
    fn from(payload: ProfileSourcesValidator) -> Self {
        ProfileSources {
            allergens: payload.allergens,
            conditions: payload.conditions,
            lifestyles: payload.lifestyles,
        }
    }
}
