//! Variant matrix: presets × themes → ordered, uniquely keyed combinations.
//!
//! Inputs are trimmed, lowercased, stripped of blanks, and deduplicated
//! keeping first occurrence. The matrix is presets-outer, themes-inner, so
//! `["luxury", "friendly"] × ["light", "dark"]` comes out as
//! `luxury-light, luxury-dark, friendly-light, friendly-dark`.
//!
//! Short keys are derived in parallel (rayon's indexed collect keeps input
//! order). Collisions are rare but possible on the codec's lossy paths, so
//! a sequential pass re-keys any repeat with a hash-derived tail.

use crate::variant_key::{self, VariantKeyCodec};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;

/// One cell of the variant matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantCombination {
    pub preset: String,
    pub theme: String,
    /// Short, path-safe variant key. Unique within one expansion.
    pub key: String,
    /// `preset-theme` before shortening.
    pub long_key: String,
    /// 1-based position in the matrix.
    pub index: usize,
    pub total: usize,
}

impl VariantCombination {
    pub fn label(&self) -> String {
        format!("variant {} of {}", self.index, self.total)
    }
}

/// Expand with the standard codec.
pub fn expand_variants<P, T>(presets: &[P], themes: &[T]) -> Vec<VariantCombination>
where
    P: AsRef<str>,
    T: AsRef<str>,
{
    expand_with(variant_key::standard_codec(), presets, themes)
}

pub fn expand_with<P, T>(
    codec: &VariantKeyCodec,
    presets: &[P],
    themes: &[T],
) -> Vec<VariantCombination>
where
    P: AsRef<str>,
    T: AsRef<str>,
{
    let presets = dedup_entries(presets);
    let themes = dedup_entries(themes);
    let total = presets.len() * themes.len();

    let pairs: Vec<(&str, &str)> = presets
        .iter()
        .flat_map(|p| themes.iter().map(move |t| (p.as_str(), t.as_str())))
        .collect();

    let keyed: Vec<(String, String)> = pairs
        .par_iter()
        .map(|(preset, theme)| {
            let long = format!("{preset}-{theme}");
            let short = codec.shorten(&long);
            (long, short)
        })
        .collect();

    let mut seen = HashSet::with_capacity(total);
    let mut combinations = Vec::with_capacity(total);
    for (i, ((preset, theme), (long, short))) in pairs.iter().zip(keyed).enumerate() {
        let key = if seen.contains(&short) {
            let mut salt = 0;
            let mut candidate = codec.disambiguate(&short, &long, salt);
            while seen.contains(&candidate) {
                salt += 1;
                candidate = codec.disambiguate(&short, &long, salt);
            }
            tracing::warn!(
                long = %long,
                collided = %short,
                key = %candidate,
                "variant key collision, disambiguated"
            );
            candidate
        } else {
            short
        };
        seen.insert(key.clone());
        combinations.push(VariantCombination {
            preset: preset.to_string(),
            theme: theme.to_string(),
            key,
            long_key: long,
            index: i + 1,
            total,
        });
    }

    tracing::debug!(
        presets = presets.len(),
        themes = themes.len(),
        total,
        "expanded variant matrix"
    );
    combinations
}

fn dedup_entries<S: AsRef<str>>(entries: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .map(|e| e.as_ref().trim().to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .filter(|e| seen.insert(e.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(combos: &[VariantCombination]) -> Vec<&str> {
        combos.iter().map(|c| c.key.as_str()).collect()
    }

    #[test]
    fn two_by_two_is_ordered_and_distinct() {
        let combos = expand_variants(&["luxury", "friendly"], &["light", "dark"]);
        assert_eq!(combos.len(), 4);
        let pairs: Vec<(&str, &str)> = combos
            .iter()
            .map(|c| (c.preset.as_str(), c.theme.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("luxury", "light"),
                ("luxury", "dark"),
                ("friendly", "light"),
                ("friendly", "dark"),
            ]
        );
        assert_eq!(keys(&combos), vec!["lux-lt", "lux-dk", "frnd-lt", "frnd-dk"]);
    }

    #[test]
    fn index_and_label() {
        let combos = expand_variants(&["luxury", "friendly"], &["light", "dark"]);
        for (i, c) in combos.iter().enumerate() {
            assert_eq!(c.index, i + 1);
            assert_eq!(c.total, 4);
        }
        assert_eq!(combos[2].label(), "variant 3 of 4");
    }

    #[test]
    fn duplicates_and_blanks_are_dropped() {
        let combos = expand_variants(
            &["modern", " Modern ", "", "bold", "modern"],
            &["dark", "  ", "dark", "light"],
        );
        assert_eq!(combos.len(), 2 * 2);
        assert_eq!(combos[0].preset, "modern");
        assert_eq!(combos[0].theme, "dark");
        assert_eq!(combos[3].preset, "bold");
        assert_eq!(combos[3].theme, "light");
    }

    #[test]
    fn count_is_product_of_deduped_inputs() {
        let presets = ["luxury", "friendly", "modern", "luxury"];
        let themes = ["light", "medium", "dark", "medium"];
        assert_eq!(expand_variants(&presets, &themes).len(), 3 * 3);
    }

    #[test]
    fn empty_inputs_give_empty_matrix() {
        let none: [&str; 0] = [];
        assert!(expand_variants(&none, &["light"]).is_empty());
        assert!(expand_variants(&["luxury"], &none).is_empty());
    }

    #[test]
    fn accepts_owned_strings() {
        let presets = vec!["classic".to_string()];
        let themes = vec!["medium".to_string()];
        let combos = expand_variants(&presets, &themes);
        assert_eq!(combos[0].key, "cls-md");
        assert_eq!(combos[0].long_key, "classic-medium");
    }

    #[test]
    fn colliding_keys_are_disambiguated() {
        // both suffixes truncate to "gall"
        let codec = VariantKeyCodec::new(&[("bold", "bld")], &[]);
        let combos = expand_with(&codec, &["bold"], &["gallery-a", "gallery-b"]);
        assert_eq!(combos[0].key, "bld-gall");
        assert_ne!(combos[1].key, combos[0].key);
        assert!(combos[1].key.starts_with("bld-ga"));
        assert!(combos[1].key.len() <= variant_key::MAX_SHORT_LEN);
    }

    #[test]
    fn six_letter_head_collision_stays_short() {
        // "vaporwave-light" hashes to "vaporw-xxxx"; a literal "vaporw"/"xxxx"
        // pair is already short form and lands on the same key.
        let first = variant_key::shorten_variant_key("vaporwave-light");
        let (_, hash_tail) = first.split_once('-').unwrap();
        let combos = expand_variants(&["vaporwave", "vaporw"], &["light", hash_tail]);
        assert_eq!(combos.len(), 4);
        assert_eq!(combos[0].key, first);
        assert_eq!(combos[3].long_key, first);
        assert_ne!(combos[3].key, first);
        let unique: HashSet<&str> = keys(&combos).into_iter().collect();
        assert_eq!(unique.len(), 4);
        for c in &combos {
            assert!(c.key.len() <= variant_key::MAX_SHORT_LEN, "{}", c.key);
        }
    }

    #[test]
    fn expansion_is_deterministic() {
        let presets = ["luxury", "friendly", "minimal", "playful", "rustic"];
        let themes = ["light", "medium", "dark"];
        assert_eq!(
            expand_variants(&presets, &themes),
            expand_variants(&presets, &themes)
        );
    }
}
