//! Naming convention tally over file stems

use std::collections::BTreeMap;

use crate::types::utils::{file_name, file_stem};
use crate::types::{NamingConvention, NamingPattern, casing_of};

/// Tally stem casings and pick the dominant one.
///
/// Single lowercase words and names without letters are not classifiable.
/// A casing wins when its share of classifiable names exceeds `dominance`.
pub fn naming_convention<'a, I>(paths: I, dominance: f64) -> NamingConvention
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: BTreeMap<NamingPattern, usize> = BTreeMap::new();
    let mut total = 0;

    for path in paths {
        total += 1;
        let stem = file_stem(file_name(path));
        if let Some(pattern) = casing_of(stem).naming_pattern() {
            *counts.entry(pattern).or_insert(0) += 1;
        }
    }

    let classified: usize = counts.values().sum();
    NamingConvention {
        dominant: dominant_pattern(&counts, classified, dominance),
        counts,
        classified,
        total,
    }
}

fn dominant_pattern(
    counts: &BTreeMap<NamingPattern, usize>,
    classified: usize,
    dominance: f64,
) -> NamingPattern {
    if classified == 0 {
        return NamingPattern::Mixed;
    }
    counts
        .iter()
        .find(|(_, count)| **count as f64 / classified as f64 > dominance)
        .map(|(pattern, _)| *pattern)
        .unwrap_or(NamingPattern::Mixed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::classification::NAMING_DOMINANCE_THRESHOLD;

    fn dominant(paths: &[&str]) -> NamingPattern {
        naming_convention(paths.iter().copied(), NAMING_DOMINANCE_THRESHOLD).dominant
    }

    #[test]
    fn test_pascal_dominates() {
        assert_eq!(
            dominant(&["src/Button.tsx", "src/Card.tsx", "src/Modal.tsx", "src/useModal.ts"]),
            NamingPattern::PascalCase
        );
    }

    #[test]
    fn test_lowercase_words_not_classifiable() {
        let convention = naming_convention(
            ["src/index.ts", "src/main.ts", "src/date-utils.ts"],
            NAMING_DOMINANCE_THRESHOLD,
        );
        assert_eq!(convention.total, 3);
        assert_eq!(convention.classified, 1);
        assert_eq!(convention.dominant, NamingPattern::KebabCase);
    }

    #[test]
    fn test_even_split_is_mixed() {
        assert_eq!(
            dominant(&["a/Button.tsx", "a/date-picker.tsx", "a/Card.tsx", "a/time-field.tsx"]),
            NamingPattern::Mixed
        );
    }

    #[test]
    fn test_exactly_sixty_percent_is_not_dominant() {
        assert_eq!(
            dominant(&["Alpha.tsx", "Beta.tsx", "Gamma.tsx", "a-b.ts", "c-d.ts"]),
            NamingPattern::Mixed
        );
    }

    #[test]
    fn test_nothing_classifiable() {
        let convention = naming_convention(std::iter::empty(), NAMING_DOMINANCE_THRESHOLD);
        assert_eq!(convention.dominant, NamingPattern::Mixed);
        assert_eq!(convention.total, 0);
    }
}
