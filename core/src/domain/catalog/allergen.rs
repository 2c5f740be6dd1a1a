use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    catalog::vocabulary::{canonical_tag, compact_key},
    common::entities::app_errors::CoreError,
};

/// Canonical allergen tag shared by restriction profiles and food items.
///
/// Anything outside the nine declared allergens is kept as a canonical
/// `Custom` tag rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Allergen {
    Gluten,
    Dairy,
    Peanut,
    TreeNut,
    Soy,
    Egg,
    Shellfish,
    Fish,
    Sesame,
    Custom(String),
}

impl Allergen {
    pub const KNOWN: [Allergen; 9] = [
        Allergen::Gluten,
        Allergen::Dairy,
        Allergen::Peanut,
        Allergen::TreeNut,
        Allergen::Soy,
        Allergen::Egg,
        Allergen::Shellfish,
        Allergen::Fish,
        Allergen::Sesame,
    ];

    /// Spellings that name the whole allergen.
    pub fn names(&self) -> &'static [&'static str] {
        match self {
            Allergen::Gluten => &["gluten"],
            Allergen::Dairy => &["dairy"],
            Allergen::Peanut => &["peanut", "peanuts"],
            Allergen::TreeNut => &["treenut", "treenuts"],
            Allergen::Soy => &["soy"],
            Allergen::Egg => &["egg", "eggs"],
            Allergen::Shellfish => &["shellfish"],
            Allergen::Fish => &["fish"],
            Allergen::Sesame => &["sesame"],
            Allergen::Custom(_) => &[],
        }
    }

    /// Ingredients that imply the allergen when present. Their absence says
    /// nothing about the allergen: lactose-free milk still carries milk
    /// protein, wheat-free bread may still use barley.
    pub fn narrower_aliases(&self) -> &'static [&'static str] {
        match self {
            Allergen::Gluten => &["wheat", "barley", "rye"],
            Allergen::Dairy => &["milk", "lactose", "casein", "whey"],
            Allergen::Peanut => &["groundnut", "groundnuts"],
            Allergen::TreeNut => &["nut", "nuts"],
            Allergen::Soy => &["soya", "soybean", "soybeans"],
            Allergen::Shellfish => &["crustacean", "crustaceans"],
            Allergen::Sesame => &["sesameseed", "sesameseeds"],
            Allergen::Egg | Allergen::Fish | Allergen::Custom(_) => &[],
        }
    }

    /// Allergen implied by a tag declared as present.
    ///
    /// Returns `None` only when nothing tag-like is left after canonicalization.
    pub fn parse(raw: &str) -> Option<Self> {
        let tag = canonical_tag(raw);
        if tag.is_empty() {
            return None;
        }

        let key = compact_key(&tag);
        let known = Allergen::KNOWN.into_iter().find(|allergen| {
            allergen.names().contains(&key.as_str())
                || allergen.narrower_aliases().contains(&key.as_str())
        });
        Some(known.unwrap_or(Allergen::Custom(tag)))
    }

    /// Allergen ruled out by a tag declared as absent.
    ///
    /// Only a tag naming the whole allergen counts. A narrower alias yields
    /// `None`, leaving the allergen unverified.
    pub fn parse_absent(raw: &str) -> Option<Self> {
        let tag = canonical_tag(raw);
        if tag.is_empty() {
            return None;
        }

        let key = compact_key(&tag);
        for allergen in Allergen::KNOWN {
            if allergen.names().contains(&key.as_str()) {
                return Some(allergen);
            }
            if allergen.narrower_aliases().contains(&key.as_str()) {
                return None;
            }
        }
        Some(Allergen::Custom(tag))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Allergen::Gluten => "gluten",
            Allergen::Dairy => "dairy",
            Allergen::Peanut => "peanut",
            Allergen::TreeNut => "treeNut",
            Allergen::Soy => "soy",
            Allergen::Egg => "egg",
            Allergen::Shellfish => "shellfish",
            Allergen::Fish => "fish",
            Allergen::Sesame => "sesame",
            Allergen::Custom(tag) => tag,
        }
    }
}

impl fmt::Display for Allergen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Allergen {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Allergen::parse(&value)
            .ok_or_else(|| CoreError::Invalid(format!("'{}' is not an allergen tag", value)))
    }
}

impl From<Allergen> for String {
    fn from(allergen: Allergen) -> Self {
        allergen.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Allergen::parse("Gluten"), Some(Allergen::Gluten));
        assert_eq!(Allergen::parse("milk"), Some(Allergen::Dairy));
        assert_eq!(Allergen::parse("contains_dairy"), Some(Allergen::Dairy));
        assert_eq!(Allergen::parse("Tree Nuts"), Some(Allergen::TreeNut));
        assert_eq!(Allergen::parse("tree_nut"), Some(Allergen::TreeNut));
        assert_eq!(Allergen::parse("Peanuts"), Some(Allergen::Peanut));
        assert_eq!(Allergen::parse("soya"), Some(Allergen::Soy));
    }

    #[test]
    fn test_absence_only_counts_for_whole_allergen_names() {
        assert_eq!(Allergen::parse_absent("Dairy"), Some(Allergen::Dairy));
        assert_eq!(Allergen::parse_absent("contains_gluten"), Some(Allergen::Gluten));
        assert_eq!(Allergen::parse_absent("Tree Nuts"), Some(Allergen::TreeNut));
        assert_eq!(Allergen::parse_absent("eggs"), Some(Allergen::Egg));
        assert_eq!(Allergen::parse_absent("lactose"), None);
        assert_eq!(Allergen::parse_absent("wheat"), None);
        assert_eq!(Allergen::parse_absent("nut"), None);
        assert_eq!(
            Allergen::parse_absent("kiwi"),
            Some(Allergen::Custom("kiwi".to_string()))
        );
    }

    #[test]
    fn test_every_alias_parses_to_its_allergen() {
        for allergen in Allergen::KNOWN {
            for alias in allergen.names().iter().chain(allergen.narrower_aliases()) {
                assert_eq!(Allergen::parse(alias), Some(allergen.clone()), "{alias}");
            }
        }
    }

    #[test]
    fn test_parse_custom_and_empty() {
        assert_eq!(
            Allergen::parse("Kiwi Fruit"),
            Some(Allergen::Custom("kiwiFruit".to_string()))
        );
        assert_eq!(Allergen::parse("  "), None);
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let json = serde_json::to_string(&Allergen::TreeNut).unwrap();
        assert_eq!(json, "\"treeNut\"");

        let parsed: Allergen = serde_json::from_str("\"Eggs\"").unwrap();
        assert_eq!(parsed, Allergen::Egg);

        assert!(serde_json::from_str::<Allergen>("\"--\"").is_err());
    }
}
