use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{catalog::MacroMetric, common::entities::app_errors::CoreError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LogIntakeInput {
    pub consumed_on: NaiveDate,
    pub name: String,
    pub servings: f64,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub macros: BTreeMap<MacroMetric, f64>,
}

impl LogIntakeInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Invalid("intake name must not be empty".to_string()));
        }

        if !self.servings.is_finite() || self.servings <= 0.0 {
            return Err(CoreError::Invalid("servings must be greater than zero".to_string()));
        }

        if let Some((metric, _)) = self
            .macros
            .iter()
            .find(|(_, value)| !value.is_finite() || **value < 0.0)
        {
            return Err(CoreError::Invalid(format!(
                "{metric} must be a non-negative number"
            )));
        }

        Ok(())
    }
}
