//! Shared test utilities for the site-blueprint test suite.
//!
//! Provides a tiny two-industry catalog for tests that should not depend on
//! the built-in one, a few representative business profiles, and lookup
//! helpers that panic with the available names on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let catalog = test_catalog();
//! let plan = SitePlanner::new(&catalog).generate_site(&bakery_profile(), None).unwrap();
//! assert_eq!(find_page(&plan, "MenuPage").path, "/menu");
//! ```

use crate::catalog::IndustryCatalog;
use crate::plan::{GenerationPlan, PageSpec};
use crate::types::{BusinessProfile, PriceLevel, ResearchSignals};

// =========================================================================
// Catalog
// =========================================================================

/// Minimal catalog: a bakery and a catch-all `other` industry sharing one
/// `plain` layout.
pub const TEST_CATALOG: &str = r##"
default_industry = "other"

[layouts.plain]
name = "Plain"
description = "Single column, text first"
emphasis = ["content"]
style = { hero_style = "text-only", card_style = "flat", border_radius = "0", shadows = "none", spacing = "normal" }
palette = { name = "plain", primary = "#222222", secondary = "#eeeeee", accent = "#0066cc", background = "#ffffff", text = "#111111" }

[layouts.plain.section_order]
HomePage = ["hero", "intro", "cta"]

[layouts.showcase]
name = "Showcase"
description = "Large imagery"
emphasis = ["photos"]
style = { hero_style = "full-bleed", card_style = "shadowed", border_radius = "8px", shadows = "soft", spacing = "generous" }
palette = { name = "showcase", primary = "#8a3324", secondary = "#f5efe6", accent = "#d9a441", background = "#fffdf8", text = "#2b1d14" }

[industries.bakery]
name = "Bakery"
aliases = ["patisserie", "bakeshop"]
layouts = ["plain", "showcase"]
default_layout = "plain"
default_theme = "light"
default_archetype = "warm-local"
presets = { default = "friendly", luxury = "elegant", budget = "playful" }
page_types = ["MenuPage"]
taglines = ["Fresh from {name}"]
features = ["online-ordering"]

[industries.bakery.sections]
MenuPage = ["menu-grid", "cta"]

[industries.bakery.tiers]
basic = ["HomePage", "MenuPage", "ContactPage"]
standard = ["HomePage", "MenuPage", "AboutPage", "ContactPage"]
premium = ["HomePage", "MenuPage", "AboutPage", "GalleryPage", "ContactPage"]
full = ["HomePage", "MenuPage", "AboutPage", "GalleryPage", "FaqPage", "ContactPage"]

[industries.other]
name = "Other"
aliases = ["misc"]
layouts = ["plain"]
default_layout = "plain"
default_theme = "medium"
default_archetype = "modern-sleek"
presets = { default = "modern", luxury = "luxury", budget = "friendly" }

[industries.other.tiers]
basic = ["HomePage", "AboutPage", "ContactPage"]
standard = ["HomePage", "AboutPage", "ContactPage"]
premium = ["HomePage", "AboutPage", "FaqPage", "ContactPage"]
full = ["HomePage", "AboutPage", "FaqPage", "ReviewsPage", "ContactPage"]
"##;

pub fn test_catalog() -> IndustryCatalog {
    IndustryCatalog::from_toml_str(TEST_CATALOG).unwrap()
}

// =========================================================================
// Profiles
// =========================================================================

/// The canonical minimal profile: a name and a fixture hint, nothing else.
pub fn bakery_profile() -> BusinessProfile {
    BusinessProfile {
        fixture_id: Some("bakery".into()),
        ..BusinessProfile::new("Cristy's Cake Shop")
    }
}

/// A barbershop with services, an about text, contact details, and research.
pub fn full_profile() -> BusinessProfile {
    BusinessProfile {
        industry: Some("Barber Shop".into()),
        address: Some("12 Main St".into()),
        phone: Some("555-0142".into()),
        services: vec!["Haircut".into(), "Hot Towel Shave".into()],
        about: Some("Family owned since 1962.".into()),
        research: Some(ResearchSignals {
            rating: Some(4.7),
            review_count: Some(212),
            price_level: Some(PriceLevel::Moderate),
            opportunity_score: Some(68),
            ..ResearchSignals::default()
        }),
        ..BusinessProfile::new("Sharp Edge Barbers")
    }
}

/// Profile with an industry string (blank means none) and research signals.
pub fn profile_with_research(
    name: &str,
    industry: &str,
    research: ResearchSignals,
) -> BusinessProfile {
    BusinessProfile {
        industry: (!industry.trim().is_empty()).then(|| industry.to_string()),
        research: Some(research),
        ..BusinessProfile::new(name)
    }
}

// =========================================================================
// Plan lookups
// =========================================================================

/// Find a page spec by component name. Panics if not found.
pub fn find_page<'a>(plan: &'a GenerationPlan, name: &str) -> &'a PageSpec {
    plan.pages.get(name).unwrap_or_else(|| {
        let names = plan.page_names();
        panic!("page '{name}' not found. Available: {names:?}")
    })
}
