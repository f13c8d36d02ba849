//! Shared types used across the resolution and planning stages.
//!
//! The business record comes in from the outside (discovery, manual entry)
//! as JSON and is never mutated. Everything else in this module is a small
//! closed vocabulary: price tiers, themes, page tiers, archetypes, input
//! levels, and the [`Choice`] wrapper that stands in for "let the system
//! decide".

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Structurally invalid business records. The one case where the core
/// refuses to guess.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("Business profile has no name")]
    MissingName,
    #[error("Rating {0} is outside 0.0-5.0")]
    InvalidRating(f32),
}

/// Identity record for the business a site is generated for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessProfile {
    pub name: String,
    /// Free-text industry or category, e.g. `"Mechanic"` or `"Hair Salon"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Catalog hint from a fixture or test harness; wins over `industry`.
    #[serde(alias = "fixtureId", skip_serializing_if = "Option::is_none")]
    pub fixture_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
    #[serde(alias = "description", skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research: Option<ResearchSignals>,
}

impl BusinessProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Reject records the core cannot plan for.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::MissingName);
        }
        if let Some(rating) = self.research.as_ref().and_then(|r| r.rating)
            && !(rating.is_finite() && (0.0..=5.0).contains(&rating))
        {
            return Err(ProfileError::InvalidRating(rating));
        }
        Ok(())
    }

    /// Research signals, or an empty set when discovery supplied none.
    pub fn research_or_default(&self) -> ResearchSignals {
        self.research.clone().unwrap_or_default()
    }

    pub fn has_contact_details(&self) -> bool {
        [&self.phone, &self.address, &self.email]
            .iter()
            .any(|field| field.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }

    pub fn has_about(&self) -> bool {
        self.about.as_deref().is_some_and(|a| !a.trim().is_empty())
    }

    pub fn has_services(&self) -> bool {
        self.services.iter().any(|s| !s.trim().is_empty())
    }
}

/// Third-party research signals (ratings, price tier, scouting score).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchSignals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(alias = "reviewCount", skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(
        alias = "priceLevel",
        deserialize_with = "deserialize_price_level",
        skip_serializing_if = "Option::is_none"
    )]
    pub price_level: Option<PriceLevel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// 0-100 score from the scouting subsystem; drives the page tier.
    #[serde(
        alias = "opportunityScore",
        deserialize_with = "deserialize_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub opportunity_score: Option<u8>,
}

/// Four-step price tier as reported by review sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PriceLevel {
    Budget,
    Moderate,
    Upscale,
    Luxury,
}

impl PriceLevel {
    /// Parse `"$"`..`"$$$$"` or `"1"`..`"4"`. Anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "$" | "1" => Some(Self::Budget),
            "$$" | "2" => Some(Self::Moderate),
            "$$$" | "3" => Some(Self::Upscale),
            "$$$$" | "4" => Some(Self::Luxury),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Budget => "$",
            Self::Moderate => "$$",
            Self::Upscale => "$$$",
            Self::Luxury => "$$$$",
        }
    }

    pub fn is_premium(self) -> bool {
        matches!(self, Self::Upscale | Self::Luxury)
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for PriceLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// Accepts `"$$"`, `"2"`, or `2`; unrecognized values become `None` rather
/// than failing the whole profile.
fn deserialize_price_level<'de, D>(deserializer: D) -> Result<Option<PriceLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    let raw: Option<Raw> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(Raw::Text(s)) => PriceLevel::parse(&s),
        Some(Raw::Number(n)) => PriceLevel::parse(&n.to_string()),
        None => None,
    })
}

/// Accepts integer, fractional, or numeric-string scores, rounded and clamped
/// to 0-100. Anything else becomes `None`.
fn deserialize_score<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let raw: Option<Raw> = Option::deserialize(deserializer)?;
    let value = match raw {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse::<f64>().ok(),
        Some(Raw::Other(_)) | None => None,
    };
    Ok(value
        .filter(|v| v.is_finite())
        .map(|v| v.round().clamp(0.0, 100.0) as u8))
}

/// Background mode, independent of the preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Medium,
    Dark,
}

impl Theme {
    pub const ALL: [Self; 3] = [Self::Light, Self::Medium, Self::Dark];

    pub fn key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Page package size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageTier {
    Basic,
    Standard,
    Premium,
}

impl PageTier {
    pub const ALL: [Self; 3] = [Self::Basic, Self::Standard, Self::Premium];

    pub fn key(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Premium => "premium",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Coarse style category that seeds mood sliders and palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    VintageClassic,
    ModernSleek,
    LuxuryRefined,
    WarmLocal,
    HighEnergy,
    NaturalOrganic,
    PlayfulBold,
}

impl Archetype {
    pub const ALL: [Self; 7] = [
        Self::VintageClassic,
        Self::ModernSleek,
        Self::LuxuryRefined,
        Self::WarmLocal,
        Self::HighEnergy,
        Self::NaturalOrganic,
        Self::PlayfulBold,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::VintageClassic => "vintage-classic",
            Self::ModernSleek => "modern-sleek",
            Self::LuxuryRefined => "luxury-refined",
            Self::WarmLocal => "warm-local",
            Self::HighEnergy => "high-energy",
            Self::NaturalOrganic => "natural-organic",
            Self::PlayfulBold => "playful-bold",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL.into_iter().find(|a| a.key() == raw)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How much of the configuration is derived vs. written out explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputLevel {
    Minimal,
    #[default]
    Moderate,
    Extreme,
}

impl InputLevel {
    /// Parse a level name; unknown names become `Moderate` with a warning.
    pub fn from_str_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "minimal" => Self::Minimal,
            "moderate" => Self::Moderate,
            "extreme" => Self::Extreme,
            other => {
                tracing::warn!(level = other, "unknown input level, using moderate");
                Self::Moderate
            }
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Moderate => "moderate",
            Self::Extreme => "extreme",
        }
    }
}

/// A design decision that is either left to the system or pinned.
///
/// Serializes `Auto` as the string `"auto"` so renderers that expect the
/// sentinel keep working.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Choice<T> {
    #[default]
    Auto,
    Explicit(T),
}

impl<T> Choice<T> {
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    pub fn explicit(&self) -> Option<&T> {
        match self {
            Self::Auto => None,
            Self::Explicit(v) => Some(v),
        }
    }

    /// The pinned value, or `fallback()` when left on auto.
    pub fn resolve_with(self, fallback: impl FnOnce() -> T) -> T {
        match self {
            Self::Auto => fallback(),
            Self::Explicit(v) => v,
        }
    }

    pub fn resolve(self, fallback: T) -> T {
        self.resolve_with(|| fallback)
    }
}

impl<T> From<Option<T>> for Choice<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Auto, Self::Explicit)
    }
}

impl<T: Serialize> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::Explicit(v) => v.serialize(serializer),
        }
    }
}
