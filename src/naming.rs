//! Centralized name handling: slugs, page component names, and routes.
//!
//! Free text from the outside (business names, industry strings, category
//! labels) is folded into lowercase hyphenated slugs before any lookup. Page
//! names follow the renderer's component convention, `NamePage`, and every
//! page maps to exactly one route path.
//!
//! ## Page Names
//!
//! - `MenuPage` → stem "Menu", display title "Menu", route `/menu`
//! - `GiftCardsPage` → stem "GiftCards", display title "Gift Cards"
//! - `HomePage` → route `/` (from the static route table)

/// Fold free text into a lowercase, hyphen-separated slug.
///
/// - `"Hair Salon"` → `"hair-salon"`
/// - `"Cristy's Cake Shop"` → `"cristys-cake-shop"`
/// - `"auto_repair & tires"` → `"auto-repair-tires"`
/// - `"  --  "` → `""`
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.trim().chars() {
        if c == '\'' || c == '’' {
            continue;
        }
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Lowercase word tokens of a slug or free text, used for keyword scans.
pub fn words(text: &str) -> Vec<String> {
    slugify(text)
        .split('-')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Result of parsing a page component name like `GiftCardsPage`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPageName {
    /// Name with the `Page` suffix removed (e.g. `GiftCards`).
    pub stem: String,
    /// Human-readable title: camel-case split into words.
    pub display_title: String,
}

/// Parse a page component name following the `NamePage` convention.
///
/// Names without the suffix are taken as-is.
pub fn parse_page_name(name: &str) -> ParsedPageName {
    let trimmed = name.trim();
    let stem = match trimmed.strip_suffix("Page") {
        Some(s) if !s.is_empty() => s,
        _ => trimmed,
    };
    let mut title = String::with_capacity(stem.len() + 4);
    let mut prev_lower = false;
    for c in stem.chars() {
        if c.is_ascii_uppercase() && prev_lower {
            title.push(' ');
        }
        prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        title.push(c);
    }
    ParsedPageName {
        stem: stem.to_string(),
        display_title: title,
    }
}

/// Canonical route paths for known page components.
const ROUTES: &[(&str, &str)] = &[
    ("HomePage", "/"),
    ("AboutPage", "/about"),
    ("ContactPage", "/contact"),
    ("ServicesPage", "/services"),
    ("MenuPage", "/menu"),
    ("GalleryPage", "/gallery"),
    ("TeamPage", "/team"),
    ("BookingPage", "/book"),
    ("ReviewsPage", "/reviews"),
    ("FaqPage", "/faq"),
    ("PricingPage", "/pricing"),
    ("OrderPage", "/order"),
    ("EventsPage", "/events"),
    ("ReservationsPage", "/reservations"),
    ("SchedulePage", "/schedule"),
    ("MembershipPage", "/membership"),
    ("ListingsPage", "/listings"),
    ("PracticeAreasPage", "/practice-areas"),
    ("SpecialsPage", "/specials"),
    ("CateringPage", "/catering"),
    ("ShopPage", "/shop"),
    ("LocationsPage", "/locations"),
    ("BlogPage", "/blog"),
];

/// Route path for a page component.
///
/// Known pages come from the static table; anything else becomes
/// `/{stem lowercased}` (`PortfolioPage` → `/portfolio`).
pub fn route_path(page: &str) -> String {
    ROUTES
        .iter()
        .find(|(name, _)| *name == page)
        .map(|(_, path)| path.to_string())
        .unwrap_or_else(|| format!("/{}", parse_page_name(page).stem.to_lowercase()))
}
