//! Industry catalog: layouts, palettes, page tiers, and alias normalization.
//!
//! The catalog is a read-only registry keyed by canonical industry slug
//! (`bakery`, `auto-shop`, ...). The built-in catalog is compiled into the
//! binary from `catalog.toml`; alternate catalogs (tests, custom deployments)
//! load from any TOML string or file with the same shape.
//!
//! ## File Shape
//!
//! ```toml
//! default_industry = "general"
//!
//! [layouts.story-driven]               # shared layout library
//! name = "Story Driven"
//! description = "..."
//! style = { hero_style = "split-image", card_style = "editorial", border_radius = "4px", shadows = "subtle", spacing = "generous" }
//! palette = { primary = "#6b4226", secondary = "#efe6da", accent = "#c58940", background = "#fbf8f3", text = "#2a2118" }
//!
//! [layouts.story-driven.section_order]
//! HomePage = ["hero", "origin-story", "cta"]
//!
//! [industries.bakery]
//! name = "Bakery"
//! aliases = ["bakeshop", "cake-shop"]
//! layouts = ["story-driven"]
//! default_layout = "story-driven"
//! default_theme = "light"
//! default_archetype = "warm-local"
//! presets = { default = "friendly", luxury = "elegant", budget = "playful" }
//!
//! [industries.bakery.tiers]
//! basic = ["HomePage", "MenuPage", "ContactPage"]
//! standard = ["HomePage", "MenuPage", "AboutPage", "ContactPage"]
//! premium = ["HomePage", "MenuPage", "AboutPage", "GalleryPage", "ContactPage"]
//! full = ["HomePage", "MenuPage", "AboutPage", "GalleryPage", "FaqPage", "ContactPage"]
//! ```
//!
//! Industry `sections` fill page section orders a layout leaves open, and
//! industry `palettes` replace a layout's palette for that industry only.
//!
//! ## Normalization
//!
//! [`IndustryCatalog::normalize`] maps free text to a canonical key in two
//! phases: an exact hash lookup over aliases and keys, then a scan for any
//! alias or key that appears as whole words of the input, optionally
//! pluralized (longest needle first). Unknown text lands on the default
//! industry.

use crate::naming;
use crate::types::{Archetype, PageTier, Theme};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum number of pages in any tier.
pub const MIN_TIER_PAGES: usize = 3;

static CATALOG_TOML: &str = include_str!("catalog.toml");

static BUILTIN: LazyLock<IndustryCatalog> = LazyLock::new(|| {
    IndustryCatalog::from_toml_str(CATALOG_TOML).expect("embedded catalog.toml is invalid")
});

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Catalog validation error: {0}")]
    Validation(String),
}

/// Visual style descriptors for a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutStyle {
    pub hero_style: String,
    pub card_style: String,
    pub border_radius: String,
    pub shadows: String,
    pub spacing: String,
}

/// A color palette handed to the renderer as CSS custom properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    #[serde(default)]
    pub name: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Palette {
    /// The neutral "local business" palette used when nothing more
    /// specific applies.
    pub fn local() -> Self {
        Self {
            name: "local".to_string(),
            primary: "#3d5a80".to_string(),
            secondary: "#e0fbfc".to_string(),
            accent: "#ee6c4d".to_string(),
            background: "#ffffff".to_string(),
            text: "#293241".to_string(),
        }
    }
}

/// One layout option for an industry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutVariant {
    pub name: String,
    pub description: String,
    pub style: LayoutStyle,
    pub emphasis: Vec<String>,
    /// Page name → ordered section ids.
    pub section_order: BTreeMap<String, Vec<String>>,
}

impl LayoutVariant {
    pub fn sections_for(&self, page: &str) -> Option<&[String]> {
        self.section_order.get(page).map(Vec::as_slice)
    }
}

/// Industry-specific preset names picked by price tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetChoices {
    pub default: String,
    pub luxury: String,
    pub budget: String,
}

/// Page lists per package. `full` is the extreme-level list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageTiers {
    pub basic: Vec<String>,
    pub standard: Vec<String>,
    pub premium: Vec<String>,
    pub full: Vec<String>,
}

impl PageTiers {
    pub fn pages(&self, tier: PageTier) -> &[String] {
        match tier {
            PageTier::Basic => &self.basic,
            PageTier::Standard => &self.standard,
            PageTier::Premium => &self.premium,
        }
    }
}

/// Everything the core knows about one industry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryDefinition {
    pub key: String,
    pub name: String,
    pub aliases: Vec<String>,
    pub layouts: BTreeMap<String, LayoutVariant>,
    pub default_layout: String,
    pub color_palettes: BTreeMap<String, Palette>,
    pub presets: PresetChoices,
    pub default_theme: Theme,
    pub default_archetype: Archetype,
    /// Pages the planner always adds for this industry.
    pub page_types: Vec<String>,
    pub tiers: PageTiers,
    pub taglines: Vec<String>,
    pub features: Vec<String>,
}

impl IndustryDefinition {
    pub fn layout(&self, id: &str) -> Option<&LayoutVariant> {
        self.layouts.get(id)
    }

    /// `id` if this industry offers it, otherwise the default layout id.
    pub fn layout_id_or_default<'a>(&'a self, id: Option<&'a str>) -> &'a str {
        match id {
            Some(id) if self.layouts.contains_key(id) => id,
            _ => &self.default_layout,
        }
    }

    pub fn palette(&self, layout_id: &str) -> Option<&Palette> {
        self.color_palettes.get(layout_id)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    default_industry: String,
    #[serde(default)]
    layouts: BTreeMap<String, RawLayout>,
    industries: BTreeMap<String, RawIndustry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLayout {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    emphasis: Vec<String>,
    style: LayoutStyle,
    #[serde(default)]
    section_order: BTreeMap<String, Vec<String>>,
    palette: Palette,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawIndustry {
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
    layouts: Vec<String>,
    default_layout: String,
    default_theme: Theme,
    default_archetype: Archetype,
    presets: PresetChoices,
    #[serde(default)]
    page_types: Vec<String>,
    tiers: PageTiers,
    #[serde(default)]
    sections: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    palettes: BTreeMap<String, Palette>,
    #[serde(default)]
    taglines: Vec<String>,
    #[serde(default)]
    features: Vec<String>,
}

/// Read-only industry registry with a precomputed alias index.
#[derive(Debug, Clone)]
pub struct IndustryCatalog {
    default_industry: String,
    industries: BTreeMap<String, IndustryDefinition>,
    /// Slugified alias or key → canonical key.
    exact: HashMap<String, String>,
    /// Substring needles, longest first, then alphabetical.
    needles: Vec<(String, String)>,
}

impl IndustryCatalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> &'static IndustryCatalog {
        &BUILTIN
    }

    /// Load a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse, resolve layout references, and validate a catalog.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = toml::from_str(content)?;
        let mut industries = BTreeMap::new();

        for (key, ind) in raw.industries {
            let mut layouts = BTreeMap::new();
            let mut color_palettes = BTreeMap::new();
            for layout_id in &ind.layouts {
                let lib = raw.layouts.get(layout_id).ok_or_else(|| {
                    CatalogError::Validation(format!(
                        "industry '{key}' references unknown layout '{layout_id}'"
                    ))
                })?;
                let mut section_order = lib.section_order.clone();
                for (page, sections) in &ind.sections {
                    section_order
                        .entry(page.clone())
                        .or_insert_with(|| sections.clone());
                }
                layouts.insert(
                    layout_id.clone(),
                    LayoutVariant {
                        name: lib.name.clone(),
                        description: lib.description.clone(),
                        style: lib.style.clone(),
                        emphasis: lib.emphasis.clone(),
                        section_order,
                    },
                );
                let palette = ind
                    .palettes
                    .get(layout_id)
                    .unwrap_or(&lib.palette)
                    .clone();
                color_palettes.insert(layout_id.clone(), palette);
            }
            // Strays are kept so validate() reports them.
            for (layout_id, palette) in ind.palettes {
                color_palettes.entry(layout_id).or_insert(palette);
            }

            industries.insert(
                key.clone(),
                IndustryDefinition {
                    key,
                    name: ind.name,
                    aliases: ind.aliases,
                    layouts,
                    default_layout: ind.default_layout,
                    color_palettes,
                    presets: ind.presets,
                    default_theme: ind.default_theme,
                    default_archetype: ind.default_archetype,
                    page_types: ind.page_types,
                    tiers: ind.tiers,
                    taglines: ind.taglines,
                    features: ind.features,
                },
            );
        }

        Self::from_definitions(raw.default_industry, industries)
    }

    /// Build a catalog from already-resolved definitions.
    pub fn from_definitions(
        default_industry: String,
        industries: BTreeMap<String, IndustryDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self {
            default_industry,
            industries,
            exact: HashMap::new(),
            needles: Vec::new(),
        };
        catalog.validate()?;
        catalog.build_index()?;
        Ok(catalog)
    }

    /// Check the invariants every lookup relies on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !self.industries.contains_key(&self.default_industry) {
            return Err(CatalogError::Validation(format!(
                "default industry '{}' is not defined",
                self.default_industry
            )));
        }
        for (key, ind) in &self.industries {
            if naming::slugify(key) != *key {
                return Err(CatalogError::Validation(format!(
                    "industry key '{key}' must be a lowercase slug"
                )));
            }
            if let Some(stray) = ind
                .color_palettes
                .keys()
                .find(|k| !ind.layouts.contains_key(*k))
            {
                return Err(CatalogError::Validation(format!(
                    "industry '{key}' has a palette for layout '{stray}' it does not offer"
                )));
            }
            if !ind.layouts.contains_key(&ind.default_layout) {
                return Err(CatalogError::Validation(format!(
                    "industry '{key}' default layout '{}' is not one of its layouts",
                    ind.default_layout
                )));
            }
            let tiers = [
                ("basic", &ind.tiers.basic),
                ("standard", &ind.tiers.standard),
                ("premium", &ind.tiers.premium),
                ("full", &ind.tiers.full),
            ];
            for (tier, pages) in tiers {
                if pages.len() < MIN_TIER_PAGES {
                    return Err(CatalogError::Validation(format!(
                        "industry '{key}' tier '{tier}' has {} pages, need at least {MIN_TIER_PAGES}",
                        pages.len()
                    )));
                }
            }
        }
        Ok(())
    }

    fn build_index(&mut self) -> Result<(), CatalogError> {
        for (key, ind) in &self.industries {
            self.exact.insert(key.clone(), key.clone());
            for alias in &ind.aliases {
                let slug = naming::slugify(alias);
                if slug.is_empty() {
                    continue;
                }
                if let Some(owner) = self.exact.get(&slug)
                    && owner != key
                {
                    return Err(CatalogError::Validation(format!(
                        "alias '{alias}' is claimed by both '{owner}' and '{key}'"
                    )));
                }
                self.exact.insert(slug, key.clone());
            }
        }
        let mut needles: Vec<(String, String)> = self
            .exact
            .iter()
            .map(|(needle, key)| (needle.clone(), key.clone()))
            .collect();
        needles.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        self.needles = needles;
        Ok(())
    }

    pub fn default_industry(&self) -> &str {
        &self.default_industry
    }

    /// Canonical keys in sorted order.
    pub fn industry_keys(&self) -> impl Iterator<Item = &str> {
        self.industries.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&IndustryDefinition> {
        self.industries.get(key)
    }

    /// Definition for `key`, or the default industry's for unknown keys.
    pub fn lookup(&self, key: &str) -> &IndustryDefinition {
        self.industries
            .get(key)
            .or_else(|| self.industries.get(&self.default_industry))
            .expect("default industry checked by validate()")
    }

    /// Map free text to a canonical key without falling back.
    pub fn match_industry(&self, text: &str) -> Option<&str> {
        let slug = naming::slugify(text);
        if slug.is_empty() {
            return None;
        }
        if let Some(key) = self.exact.get(&slug) {
            return Some(key);
        }
        self.needles
            .iter()
            .find(|(needle, _)| matches_words(&slug, needle))
            .map(|(_, key)| key.as_str())
    }

    /// Map free text to a canonical key; unknown text yields the default.
    pub fn normalize(&self, text: &str) -> &str {
        match self.match_industry(text) {
            Some(key) => key,
            None => {
                tracing::debug!(input = text, "no industry match, using default");
                &self.default_industry
            }
        }
    }
}

/// True when `needle` occurs in `slug` as whole words. A trailing plural
/// `s` or `es` is allowed, so "plumbers" finds "plumber" but "hairy" does
/// not find "hair".
fn matches_words(slug: &str, needle: &str) -> bool {
    slug.match_indices(needle).any(|(idx, _)| {
        let starts = idx == 0 || slug.as_bytes()[idx - 1] == b'-';
        let rest = &slug[idx + needle.len()..];
        let ends = ["", "s", "es"].iter().any(|suffix| {
            rest.strip_prefix(suffix)
                .is_some_and(|r| r.is_empty() || r.starts_with('-'))
        });
        starts && ends
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{TEST_CATALOG, test_catalog};

    #[test]
    fn builtin_catalog_loads() {
        let catalog = IndustryCatalog::builtin();
        assert_eq!(catalog.default_industry(), "general");
        assert!(catalog.industry_keys().count() >= 10);
    }

    #[test]
    fn normalize_mechanic_to_auto_shop() {
        assert_eq!(IndustryCatalog::builtin().normalize("Mechanic"), "auto-shop");
    }

    #[test]
    fn normalize_exact_alias_before_substring() {
        let catalog = IndustryCatalog::builtin();
        assert_eq!(catalog.normalize("auto"), "auto-shop");
        // "barber" beats the shorter "bar" key on substring scan
        assert_eq!(catalog.normalize("Joe's Barber Co"), "barbershop");
        assert_eq!(catalog.normalize("Wine Bar"), "bar");
    }

    #[test]
    fn normalize_substring_match() {
        let catalog = IndustryCatalog::builtin();
        assert_eq!(catalog.normalize("Tony's Pizza Palace"), "pizza");
        assert_eq!(catalog.normalize("Cristy's Cake Shop"), "bakery");
        assert_eq!(catalog.normalize("restaurants"), "restaurant");
    }

    #[test]
    fn normalize_requires_word_start() {
        let catalog = IndustryCatalog::builtin();
        // "bar" inside "rebar" is not a bar
        assert_eq!(catalog.normalize("rebar supply"), "general");
    }

    #[test]
    fn normalize_requires_word_end() {
        let catalog = IndustryCatalog::builtin();
        assert_eq!(catalog.match_industry("Tirey Law Group"), None);
        assert_eq!(catalog.match_industry("Haircut Heaven"), None);
        assert_eq!(catalog.normalize("Hairy Lemon Pub"), "bar");
        assert_eq!(catalog.normalize("Space Grotesk Studio"), "general");
        assert_eq!(catalog.normalize("Joe's Plumbers"), "plumbing");
    }

    #[test]
    fn normalize_google_place_types() {
        let catalog = IndustryCatalog::builtin();
        assert_eq!(catalog.normalize("hair_care"), "salon");
        assert_eq!(catalog.normalize("car_repair"), "auto-shop");
        assert_eq!(catalog.normalize("real_estate_agency"), "real-estate");
    }

    #[test]
    fn normalize_unknown_falls_back_to_default() {
        let catalog = IndustryCatalog::builtin();
        assert_eq!(catalog.normalize("quantum widgets"), "general");
        assert_eq!(catalog.normalize(""), "general");
        assert_eq!(catalog.normalize("!!!"), "general");
    }

    #[test]
    fn normalize_always_returns_catalog_key() {
        let catalog = IndustryCatalog::builtin();
        let inputs = [
            "", " ", "Mechanic", "BAKERY", "x", "a-b-c", "Pizza!!", "über café", "123",
            "hair-salon-and-spa", "barbershop", "law", "gym rat",
        ];
        for input in inputs {
            let key = catalog.normalize(input);
            assert!(catalog.get(key).is_some(), "{input:?} → {key:?}");
        }
    }

    #[test]
    fn lookup_unknown_returns_default_definition() {
        let catalog = IndustryCatalog::builtin();
        assert_eq!(catalog.lookup("nope").key, "general");
        assert_eq!(catalog.lookup("bakery").key, "bakery");
    }

    #[test]
    fn industry_sections_fill_layout_gaps() {
        let bakery = IndustryCatalog::builtin().lookup("bakery");
        let layout = bakery.layout("appetizing-visual").unwrap();
        assert_eq!(layout.sections_for("HomePage").unwrap()[0], "hero");
        assert_eq!(layout.sections_for("MenuPage").unwrap()[0], "daily-bakes");
    }

    #[test]
    fn layout_section_order_wins_over_industry_sections() {
        let pizza = IndustryCatalog::builtin().lookup("pizza");
        let layout = pizza.layout("appetizing-visual").unwrap();
        // appetizing-visual has no MenuPage order, so the pizza one applies
        assert_eq!(layout.sections_for("MenuPage").unwrap()[0], "pizza-builder");
    }

    #[test]
    fn industry_palette_overrides_layout_palette() {
        let catalog = IndustryCatalog::builtin();
        let dental = catalog.lookup("dental");
        assert_eq!(dental.palette("trust-builder").unwrap().name, "clinical-calm");
        let auto = catalog.lookup("auto-shop");
        assert_eq!(auto.palette("trust-builder").unwrap().name, "dependable");
    }

    #[test]
    fn every_builtin_tier_has_minimum_pages() {
        let catalog = IndustryCatalog::builtin();
        for key in catalog.industry_keys() {
            let ind = catalog.lookup(key);
            for tier in PageTier::ALL {
                assert!(ind.tiers.pages(tier).len() >= MIN_TIER_PAGES, "{key}");
            }
            assert!(ind.tiers.full.len() >= MIN_TIER_PAGES);
        }
    }

    #[test]
    fn layout_id_or_default() {
        let bakery = IndustryCatalog::builtin().lookup("bakery");
        assert_eq!(bakery.layout_id_or_default(Some("story-driven")), "story-driven");
        assert_eq!(bakery.layout_id_or_default(Some("nightlife-bold")), "appetizing-visual");
        assert_eq!(bakery.layout_id_or_default(None), "appetizing-visual");
    }

    #[test]
    fn test_catalog_is_usable() {
        let catalog = test_catalog();
        assert_eq!(catalog.industry_keys().collect::<Vec<_>>(), vec!["bakery", "other"]);
        assert_eq!(catalog.normalize("patisserie"), "bakery");
        assert_eq!(catalog.normalize("mechanic"), "other");
    }

    #[test]
    fn missing_default_industry_rejected() {
        let toml = TEST_CATALOG.replace(r#"default_industry = "other""#, r#"default_industry = "ghost""#);
        let err = IndustryCatalog::from_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn short_tier_rejected() {
        let toml = TEST_CATALOG.replace(
            r#"basic = ["HomePage", "MenuPage", "ContactPage"]"#,
            r#"basic = ["HomePage"]"#,
        );
        let err = IndustryCatalog::from_toml_str(&toml).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert!(err.to_string().contains("basic"));
    }

    #[test]
    fn stray_palette_rejected_from_toml() {
        let toml = format!(
            "{TEST_CATALOG}\n[industries.other.palettes.showcase]\n\
             primary = \"#000000\"\nsecondary = \"#111111\"\naccent = \"#222222\"\n\
             background = \"#ffffff\"\ntext = \"#000000\"\n"
        );
        let err = IndustryCatalog::from_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("palette for layout 'showcase'"), "{err}");
    }

    #[test]
    fn stray_palette_rejected_from_definitions() {
        let mut industries = test_catalog().industries.clone();
        industries
            .get_mut("other")
            .unwrap()
            .color_palettes
            .insert("showcase".into(), Palette::local());
        let err = IndustryCatalog::from_definitions("other".into(), industries).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert!(err.to_string().contains("'showcase'"));
    }

    #[test]
    fn unknown_layout_reference_rejected() {
        let toml = TEST_CATALOG.replace(r#"layouts = ["plain"]"#, r#"layouts = ["plain", "missing"]"#);
        let err = IndustryCatalog::from_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn duplicate_alias_rejected() {
        let toml = TEST_CATALOG.replace(r#"aliases = ["misc"]"#, r#"aliases = ["misc", "patisserie"]"#);
        let err = IndustryCatalog::from_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("patisserie"));
    }

    #[test]
    fn unknown_key_rejected() {
        let toml = format!("{TEST_CATALOG}\n[industries.other.extra]\nfoo = 1\n");
        assert!(IndustryCatalog::from_toml_str(&toml).is_err());
    }

    #[test]
    fn load_from_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("catalog.toml");
        fs::write(&path, TEST_CATALOG).unwrap();
        let catalog = IndustryCatalog::load(&path).unwrap();
        assert_eq!(catalog.default_industry(), "other");
    }
}
