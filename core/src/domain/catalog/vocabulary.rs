/// Canonical form of a free-form tag: words split on separators and camelCase
/// boundaries, a leading `contains` dropped, joined as lowerCamelCase.
///
/// `contains_dairy`, `Dairy` and `DAIRY` all become `dairy`; `High Sodium` and
/// `high_sodium` both become `highSodium`.
pub fn canonical_tag(raw: &str) -> String {
    let mut words = split_words(raw);

    if words.len() > 1 && words[0] == "contains" {
        words.remove(0);
    }

    let mut tag = String::with_capacity(raw.len());
    for (index, word) in words.iter().enumerate() {
        if index == 0 {
            tag.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            tag.extend(first.to_uppercase());
            tag.push_str(chars.as_str());
        }
    }
    tag
}

/// Lowercase alphanumeric key used for alias lookups (`treeNut` -> `treenut`).
pub fn compact_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn split_words(raw: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut previous_lower = false;

    for c in raw.trim().chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            previous_lower = false;
            continue;
        }

        if c.is_uppercase() && previous_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        previous_lower = c.is_lowercase() || c.is_numeric();
        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spelling_variants_collapse() {
        for raw in ["contains_dairy", "dairy", "Dairy", "DAIRY", " Contains Dairy "] {
            assert_eq!(canonical_tag(raw), "dairy", "raw = {raw:?}");
        }
    }

    #[test]
    fn test_multi_word_tags() {
        assert_eq!(canonical_tag("high_sodium"), "highSodium");
        assert_eq!(canonical_tag("High Sodium"), "highSodium");
        assert_eq!(canonical_tag("highSodium"), "highSodium");
        assert_eq!(canonical_tag("refined-sugar"), "refinedSugar");
    }

    #[test]
    fn test_contains_alone_is_kept() {
        assert_eq!(canonical_tag("contains"), "contains");
    }

    #[test]
    fn test_empty_and_symbols() {
        assert_eq!(canonical_tag(""), "");
        assert_eq!(canonical_tag("  -_ "), "");
    }

    #[test]
    fn test_compact_key() {
        assert_eq!(compact_key("treeNut"), "treenut");
        assert_eq!(compact_key("Tree Nuts"), "treenuts");
    }
}
