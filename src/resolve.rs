//! Input resolution: business profile + input level → resolved configuration.
//!
//! The input level controls how much of the configuration is written out:
//!
//! - **minimal**: every design decision stays [`Choice::Auto`]; the
//!   `resolved` record carries catalog defaults (preset from industry and
//!   price tier, the industry theme, the standard page tier, the industry's
//!   default layout and archetype).
//! - **moderate**: the same derivations pinned as explicit values, plus an
//!   archetype from the business name, a page tier from the opportunity
//!   score, and a tagline.
//! - **extreme**: moderate plus the full industry page list, mood sliders,
//!   palette, typography, features, and hero/card style tokens.
//!
//! Explicit [`InputOverrides`] beat every derivation at every level.
//!
//! Resolution never guesses about identity: a profile without a name is
//! rejected. Everything else degrades to a catalog default.

use crate::catalog::{IndustryCatalog, IndustryDefinition, Palette};
use crate::mood::{self, MoodSliders, StyleTokens, Typography};
use crate::naming;
use crate::types::{
    Archetype, BusinessProfile, Choice, InputLevel, PageTier, PriceLevel, ProfileError, Theme,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Opportunity score at or above which the premium package is offered.
pub const PREMIUM_SCORE: u8 = 75;
/// Opportunity score at or above which the standard package is offered.
pub const STANDARD_SCORE: u8 = 50;

/// Name keywords that pin an archetype, in priority order.
const NAME_KEYWORDS: &[(&str, Archetype)] = &[
    ("luxury", Archetype::LuxuryRefined),
    ("luxe", Archetype::LuxuryRefined),
    ("elite", Archetype::LuxuryRefined),
    ("premier", Archetype::LuxuryRefined),
    ("prestige", Archetype::LuxuryRefined),
    ("boutique", Archetype::LuxuryRefined),
    ("vintage", Archetype::VintageClassic),
    ("classic", Archetype::VintageClassic),
    ("heritage", Archetype::VintageClassic),
    ("retro", Archetype::VintageClassic),
    ("antique", Archetype::VintageClassic),
    ("olde", Archetype::VintageClassic),
    ("traditional", Archetype::VintageClassic),
    ("modern", Archetype::ModernSleek),
    ("contemporary", Archetype::ModernSleek),
    ("urban", Archetype::ModernSleek),
    ("studio", Archetype::ModernSleek),
    ("lab", Archetype::ModernSleek),
    ("organic", Archetype::NaturalOrganic),
    ("natural", Archetype::NaturalOrganic),
    ("botanical", Archetype::NaturalOrganic),
    ("green", Archetype::NaturalOrganic),
    ("farm", Archetype::NaturalOrganic),
    ("extreme", Archetype::HighEnergy),
    ("power", Archetype::HighEnergy),
    ("iron", Archetype::HighEnergy),
    ("turbo", Archetype::HighEnergy),
    ("fit", Archetype::HighEnergy),
    ("fun", Archetype::PlayfulBold),
    ("funky", Archetype::PlayfulBold),
    ("party", Archetype::PlayfulBold),
    ("kids", Archetype::PlayfulBold),
    ("happy", Archetype::PlayfulBold),
    ("family", Archetype::WarmLocal),
    ("neighborhood", Archetype::WarmLocal),
    ("hometown", Archetype::WarmLocal),
    ("corner", Archetype::WarmLocal),
];

/// Caller-pinned decisions that take precedence over derivation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype: Option<Archetype>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_tier: Option<PageTier>,
}

/// Every design decision with a concrete value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedChoices {
    pub preset: String,
    pub theme: Theme,
    pub page_tier: PageTier,
    pub layout: String,
    pub archetype: Archetype,
}

/// Output of input resolution. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfiguration {
    pub level: InputLevel,
    pub industry: String,
    pub preset: Choice<String>,
    pub theme: Choice<Theme>,
    pub page_tier: Choice<PageTier>,
    pub layout: Choice<String>,
    pub archetype: Choice<Archetype>,
    pub resolved: ResolvedChoices,
    /// Resolved page list, never the `auto` sentinel.
    pub pages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_sliders: Option<MoodSliders>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Palette>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<Typography>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_tokens: Option<StyleTokens>,
}

/// Resolves profiles against an industry catalog.
#[derive(Debug, Clone, Copy)]
pub struct InputResolver<'a> {
    catalog: &'a IndustryCatalog,
}

impl<'a> InputResolver<'a> {
    pub fn new(catalog: &'a IndustryCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a IndustryCatalog {
        self.catalog
    }

    pub fn resolve(
        &self,
        profile: &BusinessProfile,
        level: InputLevel,
    ) -> Result<ResolvedConfiguration, ProfileError> {
        self.resolve_with(profile, level, &InputOverrides::default())
    }

    pub fn resolve_with(
        &self,
        profile: &BusinessProfile,
        level: InputLevel,
        overrides: &InputOverrides,
    ) -> Result<ResolvedConfiguration, ProfileError> {
        profile.validate()?;
        let research = profile.research_or_default();
        let industry = self.catalog.lookup(self.detect_industry(profile));

        let layout_override = match overrides.layout.as_deref() {
            Some(id) if industry.layouts.contains_key(id) => Some(id.to_string()),
            Some(id) => {
                tracing::warn!(
                    layout = id,
                    industry = %industry.key,
                    "layout not offered by industry, using default"
                );
                None
            }
            None => None,
        };

        let preset = Choice::from(overrides.preset.clone());
        let theme = Choice::from(overrides.theme);
        let page_tier = Choice::from(overrides.page_tier);
        let layout = Choice::from(layout_override);
        let archetype = Choice::from(overrides.archetype);

        let resolved = ResolvedChoices {
            preset: preset
                .clone()
                .resolve_with(|| preset_for(industry, research.price_level)),
            theme: theme.clone().resolve(industry.default_theme),
            page_tier: page_tier.clone().resolve_with(|| match level {
                InputLevel::Minimal => PageTier::Standard,
                _ => derive_tier(research.opportunity_score),
            }),
            layout: layout
                .clone()
                .resolve_with(|| industry.default_layout.clone()),
            archetype: archetype.clone().resolve_with(|| match level {
                InputLevel::Minimal => industry.default_archetype,
                _ => archetype_for(industry, profile),
            }),
        };

        let pages = match level {
            InputLevel::Extreme => industry.tiers.full.clone(),
            _ => industry.tiers.pages(resolved.page_tier).to_vec(),
        };

        let mut config = match level {
            InputLevel::Minimal => ResolvedConfiguration {
                level,
                industry: industry.key.clone(),
                preset,
                theme,
                page_tier,
                layout,
                archetype,
                resolved,
                pages,
                tagline: None,
                mood_sliders: None,
                colors: None,
                typography: None,
                features: Vec::new(),
                style_tokens: None,
            },
            InputLevel::Moderate | InputLevel::Extreme => ResolvedConfiguration {
                level,
                industry: industry.key.clone(),
                preset: Choice::Explicit(resolved.preset.clone()),
                theme: Choice::Explicit(resolved.theme),
                page_tier: Choice::Explicit(resolved.page_tier),
                layout: Choice::Explicit(resolved.layout.clone()),
                archetype: Choice::Explicit(resolved.archetype),
                tagline: select_tagline(industry, profile),
                resolved,
                pages,
                mood_sliders: None,
                colors: None,
                typography: None,
                features: Vec::new(),
                style_tokens: None,
            },
        };

        if level == InputLevel::Extreme {
            let archetype = config.resolved.archetype;
            config.mood_sliders = Some(mood::derive_mood_sliders(archetype, &research));
            config.colors = Some(mood::derive_colors(&industry.key, archetype));
            config.typography = Some(mood::derive_typography(&config.resolved.preset));
            config.features = industry.features.clone();
            config.style_tokens = Some(mood::style_tokens(archetype));
        }

        tracing::debug!(
            business = %profile.name,
            industry = %config.industry,
            level = level.key(),
            preset = %config.resolved.preset,
            layout = %config.resolved.layout,
            pages = config.pages.len(),
            "resolved inputs"
        );
        Ok(config)
    }

    /// First catalog match among the fixture hint, the industry string,
    /// research categories, profile categories, and the business name.
    pub fn detect_industry(&self, profile: &BusinessProfile) -> &'a str {
        let research_categories = profile
            .research
            .iter()
            .flat_map(|r| r.categories.iter().map(String::as_str));
        let candidates = profile
            .fixture_id
            .as_deref()
            .into_iter()
            .chain(profile.industry.as_deref())
            .chain(research_categories)
            .chain(profile.categories.iter().map(String::as_str))
            .chain(std::iter::once(profile.name.as_str()));

        for candidate in candidates {
            if let Some(key) = self.catalog.match_industry(candidate) {
                return key;
            }
        }
        self.catalog.default_industry()
    }

    /// Preset for an industry key and price tier.
    pub fn derive_preset(&self, industry: &str, price: Option<PriceLevel>) -> String {
        preset_for(self.catalog.lookup(industry), price)
    }

    /// Archetype for an industry key and profile.
    pub fn derive_archetype(&self, industry: &str, profile: &BusinessProfile) -> Archetype {
        archetype_for(self.catalog.lookup(industry), profile)
    }
}

/// `$$$`/`$$$$` → the industry's luxury preset, `$` → its budget preset,
/// anything else → its default.
pub fn preset_for(industry: &IndustryDefinition, price: Option<PriceLevel>) -> String {
    match price {
        Some(PriceLevel::Upscale | PriceLevel::Luxury) => industry.presets.luxury.clone(),
        Some(PriceLevel::Budget) => industry.presets.budget.clone(),
        Some(PriceLevel::Moderate) | None => industry.presets.default.clone(),
    }
}

/// Name keywords first, then price tier, then the industry default.
pub fn archetype_for(industry: &IndustryDefinition, profile: &BusinessProfile) -> Archetype {
    let name_words = naming::words(&profile.name);
    if let Some((_, archetype)) = NAME_KEYWORDS
        .iter()
        .find(|(keyword, _)| name_words.iter().any(|w| w.as_str() == *keyword))
    {
        return *archetype;
    }
    match profile.research.as_ref().and_then(|r| r.price_level) {
        Some(level) if level.is_premium() => Archetype::LuxuryRefined,
        Some(PriceLevel::Budget) => Archetype::WarmLocal,
        _ => industry.default_archetype,
    }
}

/// Page tier from the scouting opportunity score. A missing score is
/// treated as standard.
pub fn derive_tier(opportunity_score: Option<u8>) -> PageTier {
    match opportunity_score {
        Some(score) if score >= PREMIUM_SCORE => PageTier::Premium,
        Some(score) if score >= STANDARD_SCORE => PageTier::Standard,
        Some(_) => PageTier::Basic,
        None => PageTier::Standard,
    }
}

/// Pick a tagline from the industry pool by hashing the business identity,
/// so the same business always gets the same line.
pub fn select_tagline(industry: &IndustryDefinition, profile: &BusinessProfile) -> Option<String> {
    if industry.taglines.is_empty() {
        return None;
    }
    let mut hasher = Sha256::new();
    hasher.update(naming::slugify(&profile.name).as_bytes());
    hasher.update(b"\0");
    hasher.update(industry.key.as_bytes());
    let digest = hasher.finalize();
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let index = (u64::from_be_bytes(prefix) % industry.taglines.len() as u64) as usize;
    Some(industry.taglines[index].replace("{name}", profile.name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{bakery_profile, profile_with_research, test_catalog};
    use crate::types::ResearchSignals;

    fn resolver() -> InputResolver<'static> {
        InputResolver::new(IndustryCatalog::builtin())
    }

    #[test]
    fn minimal_bakery_uses_standard_tier_pages() {
        let config = resolver()
            .resolve(&bakery_profile(), InputLevel::Minimal)
            .unwrap();
        let bakery = IndustryCatalog::builtin().lookup("bakery");
        assert_eq!(config.industry, "bakery");
        assert_eq!(config.pages, bakery.tiers.standard);
        assert!(config.pages.len() >= 3);
    }

    #[test]
    fn minimal_leaves_decisions_on_auto() {
        let config = resolver()
            .resolve(&bakery_profile(), InputLevel::Minimal)
            .unwrap();
        assert!(config.preset.is_auto());
        assert!(config.theme.is_auto());
        assert!(config.page_tier.is_auto());
        assert!(config.layout.is_auto());
        assert!(config.archetype.is_auto());
        assert_eq!(config.resolved.preset, "friendly");
        assert_eq!(config.resolved.theme, Theme::Light);
        assert_eq!(config.resolved.page_tier, PageTier::Standard);
        assert_eq!(config.resolved.layout, "appetizing-visual");
        assert_eq!(config.resolved.archetype, Archetype::WarmLocal);
        assert!(config.tagline.is_none());
    }

    #[test]
    fn minimal_serializes_auto_sentinels_and_resolved_pages() {
        let config = resolver()
            .resolve(&bakery_profile(), InputLevel::Minimal)
            .unwrap();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["preset"], "auto");
        assert_eq!(json["resolved"]["preset"], "friendly");
        assert_eq!(json["pages"][0], "HomePage");
    }

    #[test]
    fn minimal_ignores_name_keywords() {
        let profile = BusinessProfile {
            fixture_id: Some("bakery".into()),
            ..BusinessProfile::new("Vintage Crumbs")
        };
        let config = resolver().resolve(&profile, InputLevel::Minimal).unwrap();
        assert_eq!(config.resolved.archetype, Archetype::WarmLocal);

        let config = resolver().resolve(&profile, InputLevel::Moderate).unwrap();
        assert_eq!(config.resolved.archetype, Archetype::VintageClassic);
    }

    #[test]
    fn moderate_pins_everything_and_adds_tagline() {
        let config = resolver()
            .resolve(&bakery_profile(), InputLevel::Moderate)
            .unwrap();
        assert_eq!(config.preset, Choice::Explicit("friendly".to_string()));
        assert_eq!(config.theme, Choice::Explicit(Theme::Light));
        assert!(config.tagline.is_some());
        assert!(config.mood_sliders.is_none());
        assert!(config.features.is_empty());
    }

    #[test]
    fn moderate_tier_follows_opportunity_score() {
        let cases = [
            (Some(90), PageTier::Premium),
            (Some(75), PageTier::Premium),
            (Some(74), PageTier::Standard),
            (Some(50), PageTier::Standard),
            (Some(49), PageTier::Basic),
            (None, PageTier::Standard),
        ];
        for (score, tier) in cases {
            let profile = profile_with_research(
                "Crumbs",
                "bakery",
                ResearchSignals {
                    opportunity_score: score,
                    ..ResearchSignals::default()
                },
            );
            let config = resolver().resolve(&profile, InputLevel::Moderate).unwrap();
            assert_eq!(config.resolved.page_tier, tier, "score {score:?}");
            let bakery = IndustryCatalog::builtin().lookup("bakery");
            assert_eq!(config.pages, bakery.tiers.pages(tier));
        }
    }

    #[test]
    fn extreme_adds_full_pages_and_tokens() {
        let profile = profile_with_research(
            "Iron Temple",
            "gym",
            ResearchSignals {
                rating: Some(4.9),
                price_level: Some(PriceLevel::Moderate),
                ..ResearchSignals::default()
            },
        );
        let config = resolver().resolve(&profile, InputLevel::Extreme).unwrap();
        let fitness = IndustryCatalog::builtin().lookup("fitness");
        assert_eq!(config.industry, "fitness");
        assert_eq!(config.pages, fitness.tiers.full);
        assert_eq!(config.resolved.archetype, Archetype::HighEnergy);
        let sliders = config.mood_sliders.unwrap();
        assert_eq!(sliders.energy, 100);
        assert_eq!(sliders.price, 45);
        assert_eq!(config.colors.unwrap().name, "voltage");
        assert_eq!(config.typography.unwrap().name, "energetic");
        assert_eq!(config.features, fitness.features);
        assert_eq!(config.style_tokens.unwrap().hero_style, "action-video");
    }

    #[test]
    fn every_level_has_minimum_pages() {
        let catalog = IndustryCatalog::builtin();
        for key in catalog.industry_keys() {
            let profile = BusinessProfile {
                fixture_id: Some(key.to_string()),
                ..BusinessProfile::new("Test Co")
            };
            for level in [InputLevel::Minimal, InputLevel::Moderate, InputLevel::Extreme] {
                let config = resolver().resolve(&profile, level).unwrap();
                assert!(config.pages.len() >= 3, "{key} {level:?}");
            }
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        let profile = profile_with_research(
            "Luxe Locks",
            "hair salon",
            ResearchSignals {
                rating: Some(4.6),
                price_level: Some(PriceLevel::Luxury),
                opportunity_score: Some(80),
                ..ResearchSignals::default()
            },
        );
        let a = resolver().resolve(&profile, InputLevel::Extreme).unwrap();
        let b = resolver().resolve(&profile, InputLevel::Extreme).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn overrides_beat_derivation() {
        let overrides = InputOverrides {
            preset: Some("bold".into()),
            theme: Some(Theme::Dark),
            layout: Some("story-driven".into()),
            archetype: Some(Archetype::PlayfulBold),
            page_tier: Some(PageTier::Premium),
        };
        let config = resolver()
            .resolve_with(&bakery_profile(), InputLevel::Minimal, &overrides)
            .unwrap();
        assert_eq!(config.preset, Choice::Explicit("bold".to_string()));
        assert_eq!(config.resolved.theme, Theme::Dark);
        assert_eq!(config.resolved.layout, "story-driven");
        assert_eq!(config.resolved.archetype, Archetype::PlayfulBold);
        assert_eq!(config.resolved.page_tier, PageTier::Premium);
    }

    #[test]
    fn unknown_layout_override_falls_back() {
        let overrides = InputOverrides {
            layout: Some("nightlife-bold".into()),
            ..InputOverrides::default()
        };
        let config = resolver()
            .resolve_with(&bakery_profile(), InputLevel::Moderate, &overrides)
            .unwrap();
        assert_eq!(config.resolved.layout, "appetizing-visual");
    }

    #[test]
    fn missing_name_is_rejected() {
        let profile = BusinessProfile {
            fixture_id: Some("bakery".into()),
            ..BusinessProfile::default()
        };
        let err = resolver()
            .resolve(&profile, InputLevel::Moderate)
            .unwrap_err();
        assert_eq!(err, ProfileError::MissingName);
    }

    #[test]
    fn missing_research_is_empty_research() {
        let mut with_empty = bakery_profile();
        with_empty.research = Some(ResearchSignals::default());
        let a = resolver().resolve(&bakery_profile(), InputLevel::Extreme).unwrap();
        let b = resolver().resolve(&with_empty, InputLevel::Extreme).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn detect_industry_order() {
        let r = resolver();
        let mut profile = BusinessProfile::new("Sal's Pizza");
        assert_eq!(r.detect_industry(&profile), "pizza");
        profile.industry = Some("Mechanic".into());
        assert_eq!(r.detect_industry(&profile), "auto-shop");
        profile.fixture_id = Some("bakery".into());
        assert_eq!(r.detect_industry(&profile), "bakery");
        assert_eq!(r.detect_industry(&BusinessProfile::new("Acme")), "general");
    }

    #[test]
    fn detect_industry_uses_research_categories() {
        let profile = profile_with_research(
            "Blue Door",
            "",
            ResearchSignals {
                categories: vec!["point_of_interest".into(), "beauty_salon".into()],
                ..ResearchSignals::default()
            },
        );
        assert_eq!(resolver().detect_industry(&profile), "salon");
    }

    #[test]
    fn barbershop_luxury_preset() {
        let r = resolver();
        assert_eq!(r.derive_preset("barbershop", PriceLevel::parse("$$$$")), "luxury");
        assert_eq!(r.derive_preset("barbershop", PriceLevel::parse("$$$")), "luxury");
        assert_eq!(r.derive_preset("barbershop", PriceLevel::parse("$")), "friendly");
        assert_eq!(r.derive_preset("barbershop", PriceLevel::parse("$$")), "classic");
        assert_eq!(r.derive_preset("barbershop", None), "classic");
    }

    #[test]
    fn unknown_industry_preset_uses_default_bucket() {
        assert_eq!(resolver().derive_preset("spaceport", None), "modern");
    }

    #[test]
    fn archetype_precedence() {
        let r = resolver();
        let mut profile = profile_with_research(
            "Modern Cuts",
            "barbershop",
            ResearchSignals {
                price_level: Some(PriceLevel::Luxury),
                ..ResearchSignals::default()
            },
        );
        assert_eq!(r.derive_archetype("barbershop", &profile), Archetype::ModernSleek);
        profile.name = "Cuts".into();
        assert_eq!(r.derive_archetype("barbershop", &profile), Archetype::LuxuryRefined);
        profile.research = None;
        assert_eq!(r.derive_archetype("barbershop", &profile), Archetype::VintageClassic);
    }

    #[test]
    fn archetype_keywords_match_whole_words() {
        let profile = BusinessProfile::new("Benefit Bakery");
        assert_eq!(
            resolver().derive_archetype("bakery", &profile),
            Archetype::WarmLocal
        );
    }

    #[test]
    fn tagline_is_stable_and_personalized() {
        let bakery = IndustryCatalog::builtin().lookup("bakery");
        let profile = bakery_profile();
        let first = select_tagline(bakery, &profile).unwrap();
        assert_eq!(select_tagline(bakery, &profile).unwrap(), first);
        assert!(!first.contains("{name}"));
        assert!(
            bakery
                .taglines
                .iter()
                .any(|t| t.replace("{name}", &profile.name) == first)
        );
    }

    #[test]
    fn resolver_works_with_alternate_catalog() {
        let catalog = test_catalog();
        let resolver = InputResolver::new(&catalog);
        let profile = BusinessProfile::new("Le Patisserie");
        let config = resolver.resolve(&profile, InputLevel::Moderate).unwrap();
        assert_eq!(config.industry, "bakery");
        assert_eq!(config.resolved.layout, "plain");
    }
}
