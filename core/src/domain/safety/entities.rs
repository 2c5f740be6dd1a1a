use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    food_item::{entities::FoodItem, value_objects::RejectedRecord},
    profile::entities::RestrictionProfile,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    Safe,
    Caution,
    Unsafe,
    Unknown,
}

impl SafetyLevel {
    /// Position in list displays: unsafe, caution, unknown, safe.
    pub fn display_rank(&self) -> u8 {
        match self {
            SafetyLevel::Unsafe => 0,
            SafetyLevel::Caution => 1,
            SafetyLevel::Unknown => 2,
            SafetyLevel::Safe => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyLevel::Safe => "safe",
            SafetyLevel::Caution => "caution",
            SafetyLevel::Unsafe => "unsafe",
            SafetyLevel::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Verdict {
    pub level: SafetyLevel,
    /// One entry per finding at `level`, most severe finding first.
    pub reasons: Vec<String>,
}

impl Verdict {
    pub fn safe() -> Self {
        Self {
            level: SafetyLevel::Safe,
            reasons: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EvaluatedItem {
    pub item: FoodItem,
    pub verdict: Verdict,
}

/// Items bucketed by verdict; input order is kept inside each bucket.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct Partition {
    pub safe: Vec<EvaluatedItem>,
    pub caution: Vec<EvaluatedItem>,
    #[serde(rename = "unsafe")]
    pub unsafe_items: Vec<EvaluatedItem>,
    pub unknown: Vec<EvaluatedItem>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.safe.len() + self.caution.len() + self.unsafe_items.len() + self.unknown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct SafetySummary {
    pub total: usize,
    pub safe: usize,
    pub caution: usize,
    #[serde(rename = "unsafe")]
    pub unsafe_count: usize,
    pub unknown: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SafetyReport {
    pub profile: RestrictionProfile,
    /// Sorted for display, dangerous items first.
    pub items: Vec<EvaluatedItem>,
    pub summary: SafetySummary,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<RejectedRecord>,
}
