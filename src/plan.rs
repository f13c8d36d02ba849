//! Site assembly: profile + resolved configuration → generation plan.
//!
//! The plan is the terminal artifact handed to the template renderer. It
//! carries the business identity, the selected layout, the page set with
//! section orders, a route table with unique paths, and the design-token
//! bundle.
//!
//! ## Page Set
//!
//! Built in a fixed order, deduplicated keeping first occurrence:
//!
//! 1. `HomePage`, always.
//! 2. `ServicesPage`, `AboutPage`, `ContactPage` when the profile has
//!    services, an about text, or any contact detail.
//! 3. The industry's `page_types` (menu for restaurants, team and gallery
//!    for salons).
//! 4. The resolved page list from the configuration.
//!
//! ## Sections
//!
//! Each page takes the layout's section order when the layout defines one,
//! else a generic order for well-known pages, else
//! [`FALLBACK_SECTIONS`]. The renderer can therefore trust that every page
//! has a non-empty section list.

use crate::catalog::{IndustryCatalog, IndustryDefinition, LayoutStyle, LayoutVariant, Palette};
use crate::mood::{self, MoodSliders, Typography};
use crate::naming;
use crate::resolve::{InputOverrides, InputResolver, ResolvedConfiguration};
use crate::types::{Archetype, BusinessProfile, InputLevel, ProfileError, Theme};
use crate::variant_key::{self, VariantKeyCodec};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use thiserror::Error;

pub const HOME_PAGE: &str = "HomePage";

/// Sections for pages nobody has an order for.
pub const FALLBACK_SECTIONS: [&str; 3] = ["header", "content", "cta"];

#[derive(Error, Debug, PartialEq)]
pub enum PlanError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error("No pages could be assembled for the site")]
    EmptyPageSet,
    #[error("Route {path} claimed by both {first} and {second}")]
    DuplicateRoute {
        path: String,
        first: String,
        second: String,
    },
    #[error("Industry has no layout '{0}'")]
    MissingLayout(String),
}

/// Who the site is for, as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessIdentity {
    pub name: String,
    pub slug: String,
    /// Display name of the industry (e.g. `Auto Shop`).
    pub industry_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSpec {
    /// Component name, e.g. `MenuPage`.
    pub name: String,
    /// Navigation title, e.g. `Menu`.
    pub title: String,
    pub path: String,
    pub sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: String,
    pub component: String,
}

/// Everything the renderer needs to theme the site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignTokens {
    pub preset: String,
    pub theme: Theme,
    pub archetype: Archetype,
    pub palette: Palette,
    pub typography: Typography,
    pub mood: MoodSliders,
    pub layout_style: LayoutStyle,
    pub hero_style: String,
    pub card_style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationPlan {
    pub business: BusinessIdentity,
    pub industry: String,
    pub selected_layout: String,
    pub layout: LayoutVariant,
    /// Short, path-safe `preset-layout` key.
    pub variant_key: String,
    pub colors: Palette,
    pub tokens: DesignTokens,
    pub pages: BTreeMap<String, PageSpec>,
    /// Routes in page order. Paths are unique.
    pub routes: Vec<Route>,
}

impl GenerationPlan {
    /// Page names in navigation order.
    pub fn page_names(&self) -> Vec<&str> {
        self.routes.iter().map(|r| r.component.as_str()).collect()
    }
}

/// Plan with the standard variant key codec.
pub fn plan(
    profile: &BusinessProfile,
    config: &ResolvedConfiguration,
    industry: &IndustryDefinition,
) -> Result<GenerationPlan, PlanError> {
    plan_with(variant_key::standard_codec(), profile, config, industry)
}

pub fn plan_with(
    codec: &VariantKeyCodec,
    profile: &BusinessProfile,
    config: &ResolvedConfiguration,
    industry: &IndustryDefinition,
) -> Result<GenerationPlan, PlanError> {
    profile.validate()?;

    let selected_layout = industry
        .layout_id_or_default(Some(config.resolved.layout.as_str()))
        .to_string();
    let layout = industry
        .layout(&selected_layout)
        .ok_or_else(|| PlanError::MissingLayout(selected_layout.clone()))?
        .clone();

    let page_names = assemble_page_names(profile, config, industry);
    if page_names.is_empty() {
        return Err(PlanError::EmptyPageSet);
    }

    let mut claimed: HashMap<String, String> = HashMap::new();
    let mut routes = Vec::with_capacity(page_names.len());
    let mut pages = BTreeMap::new();
    for name in page_names {
        let path = naming::route_path(&name);
        if let Some(first) = claimed.get(&path) {
            return Err(PlanError::DuplicateRoute {
                path,
                first: first.clone(),
                second: name,
            });
        }
        claimed.insert(path.clone(), name.clone());

        let spec = PageSpec {
            title: naming::parse_page_name(&name).display_title,
            path: path.clone(),
            sections: sections_for(&layout, &name),
            name: name.clone(),
        };
        routes.push(Route {
            path,
            component: name.clone(),
        });
        pages.insert(name, spec);
    }

    let colors = config
        .colors
        .clone()
        .or_else(|| industry.palette(&selected_layout).cloned())
        .unwrap_or_else(Palette::local);

    let research = profile.research_or_default();
    let archetype = config.resolved.archetype;
    let style = config
        .style_tokens
        .clone()
        .unwrap_or_else(|| mood::style_tokens(archetype));
    let tokens = DesignTokens {
        preset: config.resolved.preset.clone(),
        theme: config.resolved.theme,
        archetype,
        palette: colors.clone(),
        typography: config
            .typography
            .clone()
            .unwrap_or_else(|| mood::derive_typography(&config.resolved.preset)),
        mood: config
            .mood_sliders
            .unwrap_or_else(|| mood::derive_mood_sliders(archetype, &research)),
        layout_style: layout.style.clone(),
        hero_style: style.hero_style,
        card_style: style.card_style,
    };

    let variant_key = codec.shorten(&format!("{}-{}", config.resolved.preset, selected_layout));

    let business = BusinessIdentity {
        name: profile.name.trim().to_string(),
        slug: naming::slugify(&profile.name),
        industry_name: industry.name.clone(),
        tagline: config.tagline.clone(),
        address: profile.address.clone(),
        phone: profile.phone.clone(),
        email: profile.email.clone(),
        services: profile.services.clone(),
    };

    tracing::info!(
        business = %business.name,
        industry = %industry.key,
        layout = %selected_layout,
        variant = %variant_key,
        pages = routes.len(),
        "planned site"
    );

    Ok(GenerationPlan {
        business,
        industry: industry.key.clone(),
        selected_layout,
        layout,
        variant_key,
        colors,
        tokens,
        pages,
        routes,
    })
}

fn assemble_page_names(
    profile: &BusinessProfile,
    config: &ResolvedConfiguration,
    industry: &IndustryDefinition,
) -> Vec<String> {
    let conditional = [
        (profile.has_services(), "ServicesPage"),
        (profile.has_about(), "AboutPage"),
        (profile.has_contact_details(), "ContactPage"),
    ];
    let candidates = std::iter::once(HOME_PAGE)
        .chain(
            conditional
                .into_iter()
                .filter(|(present, _)| *present)
                .map(|(_, page)| page),
        )
        .chain(industry.page_types.iter().map(String::as_str))
        .chain(config.pages.iter().map(String::as_str));

    let mut seen = HashSet::new();
    candidates
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .filter(|p| seen.insert(p.to_string()))
        .map(str::to_string)
        .collect()
}

/// Generic section order for well-known pages.
fn generic_sections(page: &str) -> Option<&'static [&'static str]> {
    let sections: &'static [&'static str] = match page {
        "HomePage" => &["hero", "highlights", "testimonials", "cta"],
        "AboutPage" => &["header", "story", "values", "cta"],
        "ContactPage" => &["header", "contact-form", "map", "hours"],
        "ServicesPage" => &["header", "service-list", "cta"],
        "MenuPage" => &["header", "menu-categories", "cta"],
        "GalleryPage" => &["header", "gallery-grid"],
        "TeamPage" => &["header", "team-grid", "cta"],
        "BookingPage" => &["header", "booking-widget", "policies"],
        "ReviewsPage" => &["header", "review-list", "cta"],
        "FaqPage" => &["header", "faq-list", "cta"],
        "PricingPage" => &["header", "pricing-table", "cta"],
        _ => return None,
    };
    Some(sections)
}

fn sections_for(layout: &LayoutVariant, page: &str) -> Vec<String> {
    match layout.sections_for(page) {
        Some(sections) if !sections.is_empty() => sections.to_vec(),
        _ => generic_sections(page)
            .unwrap_or(&FALLBACK_SECTIONS)
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

/// Resolve-then-plan over an injected catalog and codec.
#[derive(Debug, Clone)]
pub struct SitePlanner<'a> {
    catalog: &'a IndustryCatalog,
    codec: &'a VariantKeyCodec,
    level: InputLevel,
    overrides: InputOverrides,
}

impl<'a> SitePlanner<'a> {
    pub fn new(catalog: &'a IndustryCatalog) -> Self {
        Self {
            catalog,
            codec: variant_key::standard_codec(),
            level: InputLevel::default(),
            overrides: InputOverrides::default(),
        }
    }

    pub fn with_codec(mut self, codec: &'a VariantKeyCodec) -> Self {
        self.codec = codec;
        self
    }

    pub fn with_level(mut self, level: InputLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_overrides(mut self, overrides: InputOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn level(&self) -> InputLevel {
        self.level
    }

    pub fn resolve(&self, profile: &BusinessProfile) -> Result<ResolvedConfiguration, ProfileError> {
        InputResolver::new(self.catalog).resolve_with(profile, self.level, &self.overrides)
    }

    pub fn plan_for(
        &self,
        profile: &BusinessProfile,
        config: &ResolvedConfiguration,
    ) -> Result<GenerationPlan, PlanError> {
        let industry = self.catalog.lookup(&config.industry);
        plan_with(self.codec, profile, config, industry)
    }

    /// Resolve and plan in one step. `layout_id` beats any configured
    /// layout override.
    pub fn generate_site(
        &self,
        profile: &BusinessProfile,
        layout_id: Option<&str>,
    ) -> Result<GenerationPlan, PlanError> {
        let mut overrides = self.overrides.clone();
        if let Some(id) = layout_id {
            overrides.layout = Some(id.to_string());
        }
        let config =
            InputResolver::new(self.catalog).resolve_with(profile, self.level, &overrides)?;
        self.plan_for(profile, &config)
    }
}

/// Plan a site against the built-in catalog at the moderate level.
pub fn generate_site(
    profile: &BusinessProfile,
    layout_id: Option<&str>,
) -> Result<GenerationPlan, PlanError> {
    SitePlanner::new(IndustryCatalog::builtin()).generate_site(profile, layout_id)
}
