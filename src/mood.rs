//! Mood sliders, palettes, typography, and style tokens.
//!
//! Every function here is a pure table lookup plus a couple of fixed
//! adjustment rules, so identical `(archetype, research)` inputs always give
//! identical tokens.
//!
//! ## Slider Axes
//!
//! All axes are `u8` in `0..=100`:
//!
//! | Axis | 0 | 100 |
//! |------|---|-----|
//! | `vibe` | serious | playful |
//! | `energy` | calm | energetic |
//! | `era` | classic | contemporary |
//! | `density` | airy | packed |
//! | `price` | budget | premium |
//!
//! Adjustments run in a fixed order: the price tier replaces `price`, then a
//! rating of 4.5 or better adds [`RATING_ENERGY_BOOST`] to `energy`.

use crate::catalog::Palette;
use crate::types::{Archetype, PriceLevel, ResearchSignals};
use serde::Serialize;

pub const SLIDER_MAX: u8 = 100;
pub const RATING_BOOST_THRESHOLD: f32 = 4.5;
pub const RATING_ENERGY_BOOST: u8 = 10;

/// Five-axis mood vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MoodSliders {
    pub vibe: u8,
    pub energy: u8,
    pub era: u8,
    pub density: u8,
    pub price: u8,
}

impl MoodSliders {
    const fn new(vibe: u8, energy: u8, era: u8, density: u8, price: u8) -> Self {
        Self {
            vibe,
            energy,
            era,
            density,
            price,
        }
    }

    /// Every axis clamped to `0..=SLIDER_MAX`.
    pub fn clamped(self) -> Self {
        Self {
            vibe: self.vibe.min(SLIDER_MAX),
            energy: self.energy.min(SLIDER_MAX),
            era: self.era.min(SLIDER_MAX),
            density: self.density.min(SLIDER_MAX),
            price: self.price.min(SLIDER_MAX),
        }
    }

    pub fn axes(&self) -> [(&'static str, u8); 5] {
        [
            ("vibe", self.vibe),
            ("energy", self.energy),
            ("era", self.era),
            ("density", self.density),
            ("price", self.price),
        ]
    }
}

/// Baseline slider vector for an archetype.
pub fn baseline(archetype: Archetype) -> MoodSliders {
    match archetype {
        Archetype::VintageClassic => MoodSliders::new(40, 35, 15, 50, 55),
        Archetype::ModernSleek => MoodSliders::new(55, 55, 90, 35, 60),
        Archetype::LuxuryRefined => MoodSliders::new(25, 30, 60, 25, 90),
        Archetype::WarmLocal => MoodSliders::new(70, 50, 45, 55, 40),
        Archetype::HighEnergy => MoodSliders::new(80, 90, 75, 65, 45),
        Archetype::NaturalOrganic => MoodSliders::new(60, 35, 55, 40, 55),
        Archetype::PlayfulBold => MoodSliders::new(95, 80, 70, 60, 35),
    }
}

/// Slider value the `price` axis takes for a price tier.
pub fn price_slider(level: PriceLevel) -> u8 {
    match level {
        PriceLevel::Budget => 20,
        PriceLevel::Moderate => 45,
        PriceLevel::Upscale => 70,
        PriceLevel::Luxury => 95,
    }
}

/// Baseline for `archetype`, then price override, then rating boost.
pub fn derive_mood_sliders(archetype: Archetype, research: &ResearchSignals) -> MoodSliders {
    let mut sliders = baseline(archetype);
    if let Some(level) = research.price_level {
        sliders.price = price_slider(level);
    }
    if research
        .rating
        .is_some_and(|r| r.is_finite() && r >= RATING_BOOST_THRESHOLD)
    {
        sliders.energy = sliders
            .energy
            .saturating_add(RATING_ENERGY_BOOST)
            .min(SLIDER_MAX);
    }
    sliders.clamped()
}

fn palette(name: &str, colors: [&str; 5]) -> Palette {
    let [primary, secondary, accent, background, text] = colors;
    Palette {
        name: name.to_string(),
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        accent: accent.to_string(),
        background: background.to_string(),
        text: text.to_string(),
    }
}

/// Industry-specific palette variants that beat the plain archetype one.
fn industry_palette(industry: &str, archetype: Archetype) -> Option<Palette> {
    let colors = match (archetype, industry) {
        (Archetype::LuxuryRefined, "restaurant" | "bar") => {
            ("candlelight", ["#3c1518", "#f2e9e4", "#c9a227", "#1a1214", "#f2e9e4"])
        }
        (Archetype::LuxuryRefined, "salon" | "spa") => {
            ("champagne", ["#6d597a", "#f4ede4", "#d4af37", "#fffdf9", "#2d2327"])
        }
        (Archetype::VintageClassic, "barbershop") => {
            ("oxblood", ["#5c1a1b", "#efe7da", "#b08d57", "#1c1a19", "#efe7da"])
        }
        (Archetype::WarmLocal, "bakery" | "cafe") => {
            ("butter-crust", ["#a0522d", "#fdf0d5", "#e9b872", "#fffaf2", "#3b2414"])
        }
        (Archetype::HighEnergy, "fitness") => {
            ("voltage", ["#d00000", "#1b1b1e", "#ffba08", "#0d0d0f", "#f8f9fa"])
        }
        _ => return None,
    };
    Some(palette(colors.0, colors.1))
}

fn archetype_palette(archetype: Archetype) -> Option<Palette> {
    let (name, colors) = match archetype {
        Archetype::VintageClassic => ("vintage", ["#5e3023", "#f3e9dc", "#c08552", "#fbf7f0", "#2e1a12"]),
        Archetype::ModernSleek => ("modern", ["#111827", "#e5e7eb", "#6366f1", "#ffffff", "#111827"]),
        Archetype::LuxuryRefined => ("luxury", ["#1c1c1c", "#f5f0e6", "#bfa36f", "#fcfaf6", "#1c1c1c"]),
        Archetype::HighEnergy => ("energy", ["#ff4d00", "#1f1f1f", "#ffd60a", "#121212", "#fafafa"]),
        Archetype::NaturalOrganic => ("organic", ["#4f772d", "#ecf39e", "#90a955", "#fbfdf5", "#132a13"]),
        Archetype::PlayfulBold => ("playful", ["#ff006e", "#ffbe0b", "#3a86ff", "#ffffff", "#1d1d1d"]),
        Archetype::WarmLocal => return None,
    };
    Some(palette(name, colors))
}

/// Palette keyed by archetype, with the industry as tie-breaker.
///
/// Warm-local businesses without an industry variant get
/// [`Palette::local`].
pub fn derive_colors(industry: &str, archetype: Archetype) -> Palette {
    industry_palette(industry, archetype)
        .or_else(|| archetype_palette(archetype))
        .unwrap_or_else(Palette::local)
}

/// Heading/body font pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Typography {
    /// Pairing name (`clean` for the default).
    pub name: String,
    pub heading: String,
    pub body: String,
}

pub const DEFAULT_TYPOGRAPHY: &str = "clean";

/// Font pairing for a preset; unknown presets get the `clean` pairing.
pub fn derive_typography(preset: &str) -> Typography {
    let (name, heading, body) = match preset {
        "luxury" => ("luxury", "Playfair Display", "Lato"),
        "elegant" => ("elegant", "Cormorant Garamond", "Montserrat"),
        "classic" => ("classic", "Libre Baskerville", "Source Sans 3"),
        "modern" => ("modern", "Space Grotesk", "Inter"),
        "minimal" => ("minimal", "Work Sans", "Work Sans"),
        "friendly" => ("friendly", "Nunito", "Open Sans"),
        "playful" => ("playful", "Fredoka", "Nunito"),
        "bold" => ("bold", "Oswald", "Roboto"),
        "energetic" => ("energetic", "Bebas Neue", "Roboto"),
        "rustic" => ("rustic", "Bitter", "Merriweather Sans"),
        "warm" => ("warm", "Merriweather", "Lato"),
        "professional" => ("professional", "IBM Plex Sans", "IBM Plex Sans"),
        _ => (DEFAULT_TYPOGRAPHY, "Inter", "Inter"),
    };
    Typography {
        name: name.to_string(),
        heading: heading.to_string(),
        body: body.to_string(),
    }
}

/// Hero and card treatment tokens for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleTokens {
    pub hero_style: String,
    pub card_style: String,
}

pub fn style_tokens(archetype: Archetype) -> StyleTokens {
    let (hero, card) = match archetype {
        Archetype::VintageClassic => ("sepia-photo", "framed"),
        Archetype::ModernSleek => ("split-screen", "flat"),
        Archetype::LuxuryRefined => ("full-bleed-slow", "borderless"),
        Archetype::WarmLocal => ("photo-with-overlay", "rounded-soft"),
        Archetype::HighEnergy => ("action-video", "angled"),
        Archetype::NaturalOrganic => ("soft-fade", "organic-shape"),
        Archetype::PlayfulBold => ("illustrated", "sticker"),
    };
    StyleTokens {
        hero_style: hero.to_string(),
        card_style: card.to_string(),
    }
}
