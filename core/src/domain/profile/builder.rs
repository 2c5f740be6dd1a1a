use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{
    catalog::{Allergen, Condition, Lifestyle},
    common::entities::app_errors::CoreError,
    profile::{entities::RestrictionProfile, value_objects::ProfileSources},
};

/// Builds the effective restriction profile from raw catalog ids.
///
/// Condition and lifestyle ids outside the catalog fail with
/// [`CoreError::UnknownCatalogId`]; explicit allergens are canonicalized and
/// never rejected.
pub fn build_profile<A, C, L>(
    explicit_allergens: &[A],
    conditions: &[C],
    lifestyles: &[L],
) -> Result<RestrictionProfile, CoreError>
where
    A: AsRef<str>,
    C: AsRef<str>,
    L: AsRef<str>,
{
    let conditions = conditions
        .iter()
        .map(|id| id.as_ref().parse::<Condition>())
        .collect::<Result<Vec<_>, _>>()?;

    let lifestyles = lifestyles
        .iter()
        .map(|id| id.as_ref().parse::<Lifestyle>())
        .collect::<Result<Vec<_>, _>>()?;

    let allergens = explicit_allergens
        .iter()
        .filter_map(|raw| Allergen::parse(raw.as_ref()));

    Ok(derive_profile(allergens, &conditions, &lifestyles))
}

pub fn build_profile_from_sources(
    sources: &ProfileSources,
) -> Result<RestrictionProfile, CoreError> {
    build_profile(&sources.allergens, &sources.conditions, &sources.lifestyles)
}

/// Typed counterpart of [`build_profile`]; cannot fail.
pub fn derive_profile(
    allergens: impl IntoIterator<Item = Allergen>,
    conditions: &[Condition],
    lifestyles: &[Lifestyle],
) -> RestrictionProfile {
    let banned_allergens: BTreeSet<Allergen> = allergens.into_iter().collect();

    let banned_categories: BTreeSet<String> = conditions
        .iter()
        .flat_map(|condition| condition.shield_tags())
        .chain(lifestyles.iter().flat_map(|lifestyle| lifestyle.shield_tags()))
        .map(|tag| tag.to_string())
        .collect();

    // Strictest cap wins when several lifestyles cap the same metric.
    let mut macro_caps = BTreeMap::new();
    for (metric, cap) in lifestyles.iter().flat_map(|lifestyle| lifestyle.macro_caps()) {
        macro_caps
            .entry(*metric)
            .and_modify(|current: &mut f64| *current = current.min(*cap))
            .or_insert(*cap);
    }

    RestrictionProfile {
        banned_allergens,
        banned_categories,
        macro_caps,
    }
}
