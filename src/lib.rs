//! # Site Blueprint
//!
//! Generation plans for small-business websites. A sparse business record
//! (name, free-text industry, optional review-site research) plus a few
//! knobs (input level, preset, theme, archetype) becomes a reproducible
//! plan: design tokens, an ordered page and section list, a route table, and
//! a path-safe variant key.
//!
//! # Architecture: Resolve, Then Plan
//!
//! ```text
//! 1. Resolve   profile + level  →  ResolvedConfiguration   (catalog + derivation)
//! 2. Plan      profile + config →  GenerationPlan          (pages, routes, tokens)
//! ```
//!
//! The two stages are separate so callers can inspect or edit the resolved
//! configuration before planning, and so the variant matrix can reuse one
//! resolution across many preset/theme combinations.
//!
//! Everything is pure over immutable inputs: no clock, no randomness, no
//! I/O outside [`config`] and [`IndustryCatalog::load`]. Identical inputs
//! give byte-identical JSON.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Industry registry (layouts, palettes, tiers, aliases) and free-text normalization |
//! | [`variant_key`] | `preset-layout` ↔ short path-safe key codec |
//! | [`resolve`] | Profile + input level → resolved configuration |
//! | [`mood`] | Mood sliders, palettes, typography, hero/card tokens |
//! | [`matrix`] | Presets × themes → ordered, uniquely keyed variants |
//! | [`plan`] | Resolved configuration → generation plan |
//! | [`types`] | Shared data model (`BusinessProfile`, `Choice`, level and tier enums) |
//! | [`naming`] | Slugs, page-name parsing, and the page → route table |
//! | [`config`] | `blueprint.toml` loading and validation |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | Tracing subscriber setup for the binary |
//!
//! # Design Decisions
//!
//! ## Compiled-In Catalog, Injected Everywhere
//!
//! The built-in industry catalog is `catalog.toml`, embedded with
//! `include_str!` and parsed once. Nothing reaches for it implicitly:
//! [`InputResolver`](resolve::InputResolver) and
//! [`SitePlanner`](plan::SitePlanner) take a `&IndustryCatalog`, so tests and
//! custom deployments swap in their own. The free functions below are thin
//! conveniences over the built-in one.
//!
//! ## `Choice<T>` Instead of `"auto"`
//!
//! At the minimal level every decision is left to the system. That is
//! modeled as [`Choice::Auto`](types::Choice) rather than a magic string,
//! with the concrete value always present in the `resolved` record. The
//! JSON form still says `"auto"` for renderers that expect it.
//!
//! ## Deterministic Taglines
//!
//! Taglines are picked from the industry pool by a SHA-256 of the business
//! slug and industry key. The same business always gets the same line, which
//! keeps plans diffable and tests stable.
//!
//! ## Variant Key Collisions
//!
//! Keys outside the abbreviation tables degrade to a four-character suffix
//! truncation or a hashed fallback. The [`matrix`] expander re-keys any
//! collision it produces, so keys within one expansion are always unique.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod matrix;
pub mod mood;
pub mod naming;
pub mod output;
pub mod plan;
pub mod resolve;
pub mod types;
pub mod variant_key;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use catalog::IndustryCatalog;
pub use matrix::{VariantCombination, expand_variants};
pub use plan::{GenerationPlan, PlanError, generate_site};
pub use resolve::ResolvedConfiguration;
pub use types::{BusinessProfile, InputLevel, ProfileError};
pub use variant_key::{expand_variant_key, shorten_variant_key};

/// Resolve a profile against the built-in catalog with no overrides.
pub fn resolve_inputs(
    profile: &BusinessProfile,
    level: InputLevel,
) -> Result<ResolvedConfiguration, ProfileError> {
    resolve::InputResolver::new(IndustryCatalog::builtin()).resolve(profile, level)
}
