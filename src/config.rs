//! Planner configuration module.
//!
//! Handles loading and validating `blueprint.toml`. Every field has a
//! default, so the user file in the config directory (the current directory
//! unless `--config-dir` says otherwise) only lists what it changes.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [defaults]
//! level = "moderate"          # minimal | moderate | extreme
//!
//! [overrides]                 # pin any derived decision
//! # preset = "luxury"
//! # theme = "dark"            # light | medium | dark
//! # layout = "story-driven"
//! # archetype = "warm-local"
//! # page_tier = "premium"     # basic | standard | premium
//!
//! [variants]
//! presets = ["modern", "friendly", "luxury"]
//! themes = ["light", "dark"]
//!
//! [catalog]
//! # path = "catalog.toml"     # relative to the config directory
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse; override just the values you want:
//!
//! ```toml
//! [overrides]
//! theme = "dark"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::resolve::InputOverrides;
use crate::types::{InputLevel, Theme};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the config directory.
pub const CONFIG_FILE: &str = "blueprint.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Planner configuration loaded from `blueprint.toml`.
///
/// All fields have defaults. User files need only specify the values they
/// want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Defaults for commands that take a level.
    pub defaults: DefaultsConfig,
    /// Decisions that beat derivation at every level.
    pub overrides: InputOverrides,
    /// Preset and theme lists for the variant matrix.
    pub variants: VariantsConfig,
    /// Alternate industry catalog.
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    pub level: InputLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VariantsConfig {
    pub presets: Vec<String>,
    pub themes: Vec<String>,
}

impl Default for VariantsConfig {
    fn default() -> Self {
        Self {
            presets: vec!["modern".into(), "friendly".into(), "luxury".into()],
            themes: vec!["light".into(), "dark".into()],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Catalog file, relative to the config directory. The built-in catalog
    /// is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl PlannerConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.variants.presets.iter().all(|p| p.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "variants.presets must name at least one preset".into(),
            ));
        }
        if self.variants.themes.is_empty() {
            return Err(ConfigError::Validation(
                "variants.themes must not be empty".into(),
            ));
        }
        if let Some(bad) = self
            .variants
            .themes
            .iter()
            .find(|t| Theme::parse(t).is_none())
        {
            return Err(ConfigError::Validation(format!(
                "variants.themes: unknown theme '{bad}' (expected light, medium, or dark)"
            )));
        }
        if self
            .overrides
            .preset
            .as_deref()
            .is_some_and(|p| p.trim().is_empty())
        {
            return Err(ConfigError::Validation(
                "overrides.preset must not be blank".into(),
            ));
        }
        if self
            .catalog
            .path
            .as_deref()
            .is_some_and(|p| p.trim().is_empty())
        {
            return Err(ConfigError::Validation(
                "catalog.path must not be blank".into(),
            ));
        }
        Ok(())
    }

    /// Absolute catalog path, when one is configured.
    pub fn catalog_path(&self, root: &Path) -> Option<PathBuf> {
        self.catalog.path.as_ref().map(|p| root.join(p))
    }
}

// =============================================================================
// Config loading
// =============================================================================

/// Parse and validate config text. Missing sections and keys take their
/// defaults.
pub fn parse_config(content: &str) -> Result<PlannerConfig, ConfigError> {
    let config: PlannerConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from `blueprint.toml` in the given directory.
///
/// A directory without the file yields the defaults. Unknown keys and
/// invalid values are errors.
pub fn load_config(root: &Path) -> Result<PlannerConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    let config = if config_path.exists() {
        parse_config(&fs::read_to_string(&config_path)?)?
    } else {
        PlannerConfig::default()
    };
    tracing::debug!(root = %root.display(), level = config.defaults.level.key(), "loaded config");
    Ok(config)
}

/// Returns a fully-commented stock `blueprint.toml` with all keys and
/// explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Site Blueprint Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# This file is read from the config directory (--config-dir, default ".").
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Defaults
# ---------------------------------------------------------------------------
[defaults]
# How much of the configuration is written out explicitly.
#   minimal  - decisions left on "auto", resolved from catalog defaults
#   moderate - derived preset, tier, archetype, and tagline pinned
#   extreme  - moderate plus full page list, mood sliders, palette, fonts
# Unknown levels passed on the command line fall back to moderate.
level = "moderate"

# ---------------------------------------------------------------------------
# Overrides
# ---------------------------------------------------------------------------
# Pinned values beat every derivation. A layout the industry does not offer
# is ignored with a warning.
[overrides]
# preset = "luxury"
# theme = "dark"              # light | medium | dark
# layout = "story-driven"
# archetype = "warm-local"    # vintage-classic | modern-sleek | luxury-refined
#                             # warm-local | high-energy | natural-organic
#                             # playful-bold
# page_tier = "premium"       # basic | standard | premium

# ---------------------------------------------------------------------------
# Variant matrix
# ---------------------------------------------------------------------------
[variants]
# Presets x themes, presets outer. Duplicates and blanks are dropped.
presets = ["modern", "friendly", "luxury"]
themes = ["light", "dark"]

# ---------------------------------------------------------------------------
# Catalog
# ---------------------------------------------------------------------------
[catalog]
# Alternate industry catalog, relative to the config directory.
# Omit to use the built-in catalog.
# path = "catalog.toml"
"##
}
