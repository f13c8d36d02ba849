//! Variant key codec: `preset-layout` ↔ short path-safe tokens.
//!
//! Generated sites land in directories named after their variant, and some
//! target filesystems choke on long paths. Long keys like
//! `luxury-appetizing-visual` are therefore shortened to `lux-vis` by
//! abbreviating the preset and the layout (or theme) suffix independently.
//!
//! ## Short Form
//!
//! A short key matches `^[a-z]+-[a-z0-9]{1,6}$`, is at most 12 characters,
//! and its head is never a full preset name. [`VariantKeyCodec::shorten`] is
//! idempotent: short keys pass through unchanged.
//!
//! ## Lossy Paths
//!
//! - Known preset, unknown suffix: the suffix is truncated to its first four
//!   `[a-z0-9]` characters. `expand` returns the truncated suffix, so distinct
//!   suffixes sharing a four-character prefix collide.
//! - No known preset prefix: the key becomes `{up to 6 letters}-{4 hex}`
//!   where the hex is a SHA-256 prefix of the normalized long key. `expand`
//!   cannot recover the original.
//!
//! Both paths log a warning so collision risk shows up in monitoring.

use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Upper bound on a short key's length.
pub const MAX_SHORT_LEN: usize = 12;
/// Maximum suffix length in a short key.
const MAX_TAIL_LEN: usize = 6;
/// Suffix truncation length when no abbreviation exists.
const TRUNCATE_LEN: usize = 4;
const HASH_HEX_LEN: usize = 4;
const MAX_FALLBACK_HEAD: usize = 6;

/// Preset → abbreviation. Abbreviations are never themselves a preset name.
const PRESET_ABBREVIATIONS: &[(&str, &str)] = &[
    ("luxury", "lux"),
    ("friendly", "frnd"),
    ("modern", "mod"),
    ("minimal", "min"),
    ("bold", "bld"),
    ("classic", "cls"),
    ("elegant", "elg"),
    ("playful", "ply"),
    ("rustic", "rst"),
    ("professional", "pro"),
    ("energetic", "nrg"),
    ("warm", "wrm"),
];

/// Layout and theme → abbreviation.
const SUFFIX_ABBREVIATIONS: &[(&str, &str)] = &[
    ("appetizing-visual", "vis"),
    ("menu-focused", "menu"),
    ("story-driven", "story"),
    ("order-first", "order"),
    ("cozy-story", "cozy"),
    ("nightlife-bold", "night"),
    ("portfolio-showcase", "port"),
    ("booking-first", "book"),
    ("classic-heritage", "herit"),
    ("serene-minimal", "serene"),
    ("high-impact", "impact"),
    ("schedule-first", "sched"),
    ("trust-builder", "trust"),
    ("service-grid", "svc"),
    ("emergency-first", "emerg"),
    ("authority-classic", "auth"),
    ("listing-showcase", "list"),
    ("clean-professional", "clean"),
    ("light", "lt"),
    ("medium", "md"),
    ("dark", "dk"),
];

static STANDARD: LazyLock<VariantKeyCodec> = LazyLock::new(VariantKeyCodec::standard);

/// Shorten with the standard abbreviation tables.
pub fn shorten_variant_key(key: &str) -> String {
    STANDARD.shorten(key)
}

/// Expand with the standard abbreviation tables.
pub fn expand_variant_key(key: &str) -> String {
    STANDARD.expand(key)
}

/// The codec with the standard tables.
pub fn standard_codec() -> &'static VariantKeyCodec {
    &STANDARD
}

/// Bidirectional abbreviation tables.
#[derive(Debug, Clone)]
pub struct VariantKeyCodec {
    /// Presets longest first so `shorten` matches the most specific prefix.
    presets: Vec<(String, String)>,
    preset_expand: HashMap<String, String>,
    suffix_shorten: HashMap<String, String>,
    suffix_expand: HashMap<String, String>,
}

impl VariantKeyCodec {
    pub fn standard() -> Self {
        Self::new(PRESET_ABBREVIATIONS, SUFFIX_ABBREVIATIONS)
    }

    /// Build a codec from `(long, short)` tables.
    pub fn new(presets: &[(&str, &str)], suffixes: &[(&str, &str)]) -> Self {
        let mut preset_list: Vec<(String, String)> = presets
            .iter()
            .map(|(long, short)| (long.to_string(), short.to_string()))
            .collect();
        preset_list.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        Self {
            preset_expand: presets
                .iter()
                .map(|(long, short)| (short.to_string(), long.to_string()))
                .collect(),
            presets: preset_list,
            suffix_shorten: suffixes
                .iter()
                .map(|(long, short)| (long.to_string(), short.to_string()))
                .collect(),
            suffix_expand: suffixes
                .iter()
                .map(|(long, short)| (short.to_string(), long.to_string()))
                .collect(),
        }
    }

    fn is_preset(&self, name: &str) -> bool {
        self.presets.iter().any(|(long, _)| long == name)
    }

    fn preset_short<'a>(&'a self, name: &str) -> Option<&'a str> {
        self.presets
            .iter()
            .find(|(long, _)| long == name)
            .map(|(_, short)| short.as_str())
    }

    /// True when `key` already has the short shape and would not be
    /// re-encoded by [`shorten`](Self::shorten).
    pub fn is_short_form(&self, key: &str) -> bool {
        if key.len() > MAX_SHORT_LEN {
            return false;
        }
        let Some((head, tail)) = key.split_once('-') else {
            return false;
        };
        !head.is_empty()
            && head.bytes().all(|b| b.is_ascii_lowercase())
            && (1..=MAX_TAIL_LEN).contains(&tail.len())
            && tail
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
            && !self.is_preset(head)
    }

    /// Shorten a `preset-layout` key. Never fails; see the module docs for
    /// the lossy paths.
    pub fn shorten(&self, key: &str) -> String {
        let key = key.trim().to_ascii_lowercase();
        if self.is_short_form(&key) {
            return key;
        }

        let matched = self.presets.iter().find_map(|(long, short)| {
            key.strip_prefix(long.as_str())
                .and_then(|rest| rest.strip_prefix('-'))
                .filter(|suffix| !suffix.is_empty())
                .map(|suffix| (short, suffix))
        });

        match matched {
            Some((preset_short, suffix)) => {
                let tail = match self.suffix_shorten.get(suffix) {
                    Some(abbrev) => abbrev.clone(),
                    None => {
                        let truncated: String = suffix
                            .chars()
                            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
                            .take(TRUNCATE_LEN)
                            .collect();
                        let tail = if truncated.is_empty() {
                            short_hash(&key)
                        } else {
                            truncated
                        };
                        tracing::warn!(
                            key = %key,
                            tail = %tail,
                            "no abbreviation for variant suffix, truncating"
                        );
                        tail
                    }
                };
                format!("{preset_short}-{tail}")
            }
            None => self.fallback(&key),
        }
    }

    /// `{letters}-{hash}` for keys without a known preset prefix.
    fn fallback(&self, key: &str) -> String {
        let first_segment = key.split('-').find(|s| !s.is_empty()).unwrap_or("");
        let letters: String = first_segment
            .chars()
            .filter(char::is_ascii_lowercase)
            .take(MAX_FALLBACK_HEAD)
            .collect();
        let head = match self.preset_short(&letters) {
            Some(short) => short.to_string(),
            None if letters.is_empty() => "key".to_string(),
            None => letters,
        };
        let short = format!("{head}-{}", short_hash(key));
        tracing::warn!(
            key = %key,
            short = %short,
            "variant key has no known preset prefix, using hashed fallback"
        );
        short
    }

    /// Expand a short key back to `preset-layout`. Tokens without a reverse
    /// mapping come back unchanged.
    pub fn expand(&self, key: &str) -> String {
        let key = key.trim().to_ascii_lowercase();
        let Some((head, tail)) = key.split_once('-') else {
            return key;
        };
        let preset = self.preset_expand.get(head).map_or(head, String::as_str);
        let suffix = self.suffix_expand.get(tail).map_or(tail, String::as_str);
        format!("{preset}-{suffix}")
    }

    /// Short key with a disambiguated tail, for callers that found a
    /// collision. `salt` varies the hash between attempts. The result stays
    /// within [`MAX_SHORT_LEN`]; the kept tail shrinks first, then the head.
    pub fn disambiguate(&self, short: &str, long: &str, salt: u32) -> String {
        let (head, tail) = short.split_once('-').unwrap_or((short, ""));
        let head: String = head.chars().take(MAX_SHORT_LEN - 1 - HASH_HEX_LEN).collect();
        let room = MAX_SHORT_LEN.saturating_sub(head.len() + 1 + HASH_HEX_LEN);
        let keep: String = tail
            .chars()
            .take(room.min(MAX_TAIL_LEN - HASH_HEX_LEN))
            .collect();
        let hash = short_hash(&format!("{long}#{salt}"));
        format!("{head}-{keep}{hash}")
    }
}

/// First four hex characters of the SHA-256 of `input`.
fn short_hash(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut hex = format!("{:x}", digest);
    hex.truncate(HASH_HEX_LEN);
    hex
}
