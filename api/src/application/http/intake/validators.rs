use std::collections::BTreeMap;

use chrono::NaiveDate;
use safeplate_core::domain::{catalog::MacroMetric, intake::value_objects::LogIntakeInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LogIntakeValidator {
    pub consumed_on: NaiveDate,

    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, message = "servings must be greater than zero"))]
    pub servings: f64,

    #[serde(default)]
    #[schema(value_type = Object)]
    pub macros: BTreeMap<MacroMetric, f64>,
}

impl From<LogIntakeValidator> for LogIntakeInput {
    fn from(payload: LogIntakeValidator) -> Self {
        LogIntakeInput {
            consumed_on: payload.consumed_on,
            name: payload.name,
            servings: payload.servings,
            macros: payload.macros,
        }
    }
}
