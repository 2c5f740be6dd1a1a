use crate::domain::{
    catalog::canonical_tag,
    food_item::entities::FoodItem,
    profile::entities::RestrictionProfile,
    safety::entities::{SafetyLevel, Verdict},
};

/// Classifies one item against a restriction profile.
///
/// Banned allergens are checked first and decide the verdict on their own:
/// any flag set to `true` gives `unsafe`, otherwise any flag that is missing
/// gives `unknown`. Categories and macro caps are only looked at once every
/// banned allergen is verified absent.
pub fn classify(item: &FoodItem, profile: &RestrictionProfile) -> Verdict {
    let mut contained = Vec::new();
    let mut unverified = Vec::new();

    for allergen in &profile.banned_allergens {
        match item.allergen_flags.get(allergen) {
            Some(true) => contained.push(format!("Contains {allergen}")),
            Some(false) => {}
            None => unverified.push(format!("Allergen data unverified for {allergen}")),
        }
    }

    if !contained.is_empty() {
        return Verdict {
            level: SafetyLevel::Unsafe,
            reasons: contained,
        };
    }

    if !unverified.is_empty() {
        return Verdict {
            level: SafetyLevel::Unknown,
            reasons: unverified,
        };
    }

    let mut cautions = Vec::new();
    let item_categories = item.canonical_categories();

    for tag in &profile.banned_categories {
        let tag = canonical_tag(tag);
        if item_categories.contains(&tag) {
            cautions.push(format!("Conflicts with {tag} restriction"));
        }
    }

    for (metric, cap) in &profile.macro_caps {
        if let Some(value) = item.macros.get(metric)
            && value > cap
        {
            cautions.push(format!("Exceeds {metric} limit"));
        }
    }

    if cautions.is_empty() {
        Verdict::safe()
    } else {
        Verdict {
            level: SafetyLevel::Caution,
            reasons: cautions,
        }
    }
}
