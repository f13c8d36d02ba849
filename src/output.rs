//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Output is **decision-centric**. Every entity (industry, page, variant)
//! shows its identity first, with the derived detail on indented context
//! lines. Values left on auto are marked `(auto)` so it is obvious which
//! decisions came from the catalog and which were pinned.
//!
//! # Output Format
//!
//! ## Resolve
//!
//! ```text
//! Cristy's Cake Shop → bakery (minimal)
//!     Preset: friendly (auto)
//!     Theme: light (auto)
//!     Page tier: standard (auto)
//!     Layout: appetizing-visual (auto)
//!     Archetype: warm-local (auto)
//!
//! Pages
//! 001 HomePage
//! 002 MenuPage
//! ```
//!
//! ## Plan
//!
//! ```text
//! Cristy's Cake Shop (Bakery)
//!     Layout: appetizing-visual (Appetizing Visual)
//!     Variant: frnd-vis
//!     Palette: butter-crust
//!
//! Pages
//! 001 Home → /
//!     hero, featured-bakes, story-teaser, cta
//! 002 Menu → /menu
//!     daily-bakes, menu-categories, cta
//! ```
//!
//! ## Variants
//!
//! ```text
//! 001 luxury / light → lux-lt
//! 002 luxury / dark → lux-dk
//!
//! 2 variants
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure and do no I/O.

use crate::catalog::IndustryCatalog;
use crate::matrix::VariantCombination;
use crate::plan::GenerationPlan;
use crate::resolve::ResolvedConfiguration;
use crate::types::Choice;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional detail.
///
/// ```text
/// 001 Auto Shop (auto-shop)
/// 001 HomePage
/// ```
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), title, d),
        None => format!("{} {}", format_index(index), title),
    }
}

/// `Label: value`, suffixed with `(auto)` when the decision was not pinned.
fn choice_line<T>(label: &str, choice: &Choice<T>, resolved: &str) -> String {
    if choice.is_auto() {
        format!("{}{}: {} (auto)", indent(1), label, resolved)
    } else {
        format!("{}{}: {}", indent(1), label, resolved)
    }
}

/// Truncate to `max` characters, appending "..." when cut.
fn truncate_desc(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

// ============================================================================
// Industries
// ============================================================================

pub fn format_industries(catalog: &IndustryCatalog) -> Vec<String> {
    let mut lines = vec!["Industries".to_string()];
    for (i, key) in catalog.industry_keys().enumerate() {
        let ind = catalog.lookup(key);
        lines.push(entity_header(i + 1, &ind.name, Some(key)));
        let layouts: Vec<String> = ind
            .layouts
            .keys()
            .map(|id| {
                if *id == ind.default_layout {
                    format!("{id}*")
                } else {
                    id.clone()
                }
            })
            .collect();
        lines.push(format!("{}Layouts: {}", indent(1), layouts.join(", ")));
        if !ind.aliases.is_empty() {
            lines.push(format!(
                "{}Aliases: {}",
                indent(1),
                truncate_desc(&ind.aliases.join(", "), 60)
            ));
        }
    }
    lines
}

pub fn print_industries(catalog: &IndustryCatalog) {
    for line in format_industries(catalog) {
        println!("{}", line);
    }
}

// ============================================================================
// Resolve
// ============================================================================

pub fn format_resolved(business: &str, config: &ResolvedConfiguration) -> Vec<String> {
    let r = &config.resolved;
    let mut lines = vec![
        format!("{} → {} ({})", business, config.industry, config.level.key()),
        choice_line("Preset", &config.preset, &r.preset),
        choice_line("Theme", &config.theme, r.theme.key()),
        choice_line("Page tier", &config.page_tier, r.page_tier.key()),
        choice_line("Layout", &config.layout, &r.layout),
        choice_line("Archetype", &config.archetype, r.archetype.key()),
    ];
    if let Some(tagline) = &config.tagline {
        lines.push(format!("{}Tagline: {}", indent(1), tagline));
    }
    if let Some(typography) = &config.typography {
        lines.push(format!(
            "{}Typography: {} ({} / {})",
            indent(1),
            typography.name,
            typography.heading,
            typography.body
        ));
    }
    if let Some(colors) = &config.colors {
        lines.push(format!("{}Palette: {}", indent(1), colors.name));
    }
    if let Some(style) = &config.style_tokens {
        lines.push(format!(
            "{}Style: hero {}, cards {}",
            indent(1),
            style.hero_style,
            style.card_style
        ));
    }
    if !config.features.is_empty() {
        lines.push(format!("{}Features: {}", indent(1), config.features.join(", ")));
    }

    lines.push(String::new());
    lines.push("Pages".to_string());
    for (i, page) in config.pages.iter().enumerate() {
        lines.push(entity_header(i + 1, page, None));
    }

    if let Some(sliders) = &config.mood_sliders {
        lines.push(String::new());
        lines.push("Mood".to_string());
        for (axis, value) in sliders.axes() {
            lines.push(format!("{}{}: {}", indent(1), axis, value));
        }
    }
    lines
}

pub fn print_resolved(business: &str, config: &ResolvedConfiguration) {
    for line in format_resolved(business, config) {
        println!("{}", line);
    }
}

// ============================================================================
// Plan
// ============================================================================

pub fn format_plan(plan: &GenerationPlan) -> Vec<String> {
    let mut lines = vec![
        format!("{} ({})", plan.business.name, plan.business.industry_name),
        format!(
            "{}Layout: {} ({})",
            indent(1),
            plan.selected_layout,
            plan.layout.name
        ),
        format!("{}Variant: {}", indent(1), plan.variant_key),
        format!("{}Palette: {}", indent(1), plan.colors.name),
    ];
    if let Some(tagline) = &plan.business.tagline {
        lines.push(format!("{}Tagline: {}", indent(1), tagline));
    }

    lines.push(String::new());
    lines.push("Pages".to_string());
    for (i, route) in plan.routes.iter().enumerate() {
        let Some(page) = plan.pages.get(&route.component) else {
            continue;
        };
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            page.title,
            route.path
        ));
        lines.push(format!("{}{}", indent(1), page.sections.join(", ")));
    }
    lines
}

pub fn print_plan(plan: &GenerationPlan) {
    for line in format_plan(plan) {
        println!("{}", line);
    }
}

// ============================================================================
// Variants
// ============================================================================

pub fn format_variants(combinations: &[VariantCombination]) -> Vec<String> {
    let mut lines: Vec<String> = combinations
        .iter()
        .map(|c| {
            format!(
                "{} {} / {} → {}",
                format_index(c.index),
                c.preset,
                c.theme,
                c.key
            )
        })
        .collect();
    lines.push(String::new());
    let n = combinations.len();
    lines.push(format!("{} variant{}", n, if n == 1 { "" } else { "s" }));
    lines
}

pub fn print_variants(combinations: &[VariantCombination]) {
    for line in format_variants(combinations) {
        println!("{}", line);
    }
}
