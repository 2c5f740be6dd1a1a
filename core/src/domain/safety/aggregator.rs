use crate::domain::{
    food_item::entities::FoodItem,
    profile::entities::RestrictionProfile,
    safety::{
        classifier::classify,
        entities::{EvaluatedItem, Partition, SafetyLevel, SafetySummary},
    },
};

pub fn evaluate(
    items: impl IntoIterator<Item = FoodItem>,
    profile: &RestrictionProfile,
) -> Vec<EvaluatedItem> {
    items
        .into_iter()
        .map(|item| {
            let verdict = classify(&item, profile);
            EvaluatedItem { item, verdict }
        })
        .collect()
}

/// Buckets every item by verdict, keeping input order inside each bucket.
pub fn partition(
    items: impl IntoIterator<Item = FoodItem>,
    profile: &RestrictionProfile,
) -> Partition {
    let mut partition = Partition::default();

    for evaluated in evaluate(items, profile) {
        let bucket = match evaluated.verdict.level {
            SafetyLevel::Safe => &mut partition.safe,
            SafetyLevel::Caution => &mut partition.caution,
            SafetyLevel::Unsafe => &mut partition.unsafe_items,
            SafetyLevel::Unknown => &mut partition.unknown,
        };
        bucket.push(evaluated);
    }

    partition
}

/// Stable sort for display: unsafe, caution, unknown, then safe.
pub fn sort_by_severity(
    items: impl IntoIterator<Item = FoodItem>,
    profile: &RestrictionProfile,
) -> Vec<EvaluatedItem> {
    let mut evaluated = evaluate(items, profile);
    evaluated.sort_by_key(|evaluated| evaluated.verdict.level.display_rank());
    evaluated
}

pub fn summarize(evaluated: &[EvaluatedItem]) -> SafetySummary {
    evaluated
        .iter()
        .fold(SafetySummary::default(), |mut summary, evaluated| {
            summary.total += 1;
            match evaluated.verdict.level {
                SafetyLevel::Safe => summary.safe += 1,
                SafetyLevel::Caution => summary.caution += 1,
                SafetyLevel::Unsafe => summary.unsafe_count += 1,
                SafetyLevel::Unknown => summary.unknown += 1,
            }
            summary
        })
}
