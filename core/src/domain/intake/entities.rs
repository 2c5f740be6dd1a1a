use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    catalog::MacroMetric, common::generate_timestamp, intake::value_objects::LogIntakeInput,
};

/// One logged food, with macros given per serving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IntakeEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub consumed_on: NaiveDate,
    pub name: String,
    pub servings: f64,
    #[schema(value_type = Object)]
    pub macros: BTreeMap<MacroMetric, f64>,
    pub created_at: DateTime<Utc>,
}

impl IntakeEntry {
    pub fn new(user_id: Uuid, input: LogIntakeInput) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            consumed_on: input.consumed_on,
            name: input.name.trim().to_string(),
            servings: input.servings,
            macros: input.macros,
            created_at: now,
        }
    }

    pub fn total(&self, metric: MacroMetric) -> f64 {
        self.macros.get(&metric).copied().unwrap_or(0.0) * self.servings
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailySummary {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub entry_count: usize,
    /// Sum of macros times servings over the day's entries.
    #[schema(value_type = Object)]
    pub totals: BTreeMap<MacroMetric, f64>,
    pub entries: Vec<IntakeEntry>,
}

impl DailySummary {
    pub fn from_entries(user_id: Uuid, date: NaiveDate, entries: Vec<IntakeEntry>) -> Self {
        let mut totals = BTreeMap::new();
        for entry in &entries {
            for metric in entry.macros.keys() {
                *totals.entry(*metric).or_insert(0.0) += entry.total(*metric);
            }
        }

        Self {
            user_id,
            date,
            entry_count: entries.len(),
            totals,
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn entry(name: &str, servings: f64, macros: &[(MacroMetric, f64)]) -> IntakeEntry {
        IntakeEntry::new(
            Uuid::new_v4(),
            LogIntakeInput {
                consumed_on: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
                name: name.to_string(),
                servings,
                macros: macros.iter().copied().collect(),
            },
        )
    }

    #[test]
    fn test_totals_multiply_by_servings() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let entries = vec![
            entry("Oatmeal", 2.0, &[(MacroMetric::Carbs, 27.0), (MacroMetric::Calories, 150.0)]),
            entry("Coffee", 1.0, &[(MacroMetric::Calories, 5.0)]),
            entry("Half Bagel", 0.5, &[(MacroMetric::Carbs, 48.0)]),
        ];

        let summary = DailySummary::from_entries(Uuid::new_v4(), date, entries);

        assert_eq!(summary.entry_count, 3);
        assert_eq!(summary.totals.get(&MacroMetric::Carbs), Some(&78.0));
        assert_eq!(summary.totals.get(&MacroMetric::Calories), Some(&305.0));
        assert_eq!(summary.totals.get(&MacroMetric::Protein), None);
    }

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(entry("  Apple ", 1.0, &[]).name, "Apple");
    }
}
