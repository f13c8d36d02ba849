use clap::{Parser, Subcommand};
use site_blueprint::catalog::IndustryCatalog;
use site_blueprint::config::{self, PlannerConfig};
use site_blueprint::plan::SitePlanner;
use site_blueprint::resolve::InputResolver;
use site_blueprint::types::{BusinessProfile, InputLevel};
use site_blueprint::{logging, matrix, output, variant_key};
use std::path::{Path, PathBuf};

/// Where the business record comes from.
#[derive(clap::Args, Clone)]
struct ProfileArgs {
    /// Business profile JSON file
    #[arg(long, required_unless_present = "name")]
    profile: Option<PathBuf>,

    /// Business name (instead of a profile file)
    #[arg(long, conflicts_with = "profile")]
    name: Option<String>,

    /// Free-text industry, used with --name
    #[arg(long, requires = "name")]
    industry: Option<String>,

    /// Input level: minimal, moderate, extreme (unknown → moderate)
    #[arg(long)]
    level: Option<String>,

    /// Print JSON instead of the summary
    #[arg(long)]
    json: bool,
}

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "site-blueprint")]
#[command(about = "Generation plans for small-business websites")]
#[command(long_about = "\
Generation plans for small-business websites

Turns a sparse business record into a reproducible generation plan: design
tokens, an ordered page and section list, a route table, and a path-safe
variant key. Rendering the plan into files is left to the template layer.

Profile JSON (only name is required):

  {
    \"name\": \"Cristy's Cake Shop\",
    \"industry\": \"Bakery\",             # free text, normalized via aliases
    \"fixtureId\": \"bakery\",            # catalog hint, wins over industry
    \"phone\": \"555-0100\",
    \"services\": [\"Custom cakes\"],
    \"about\": \"Family bakery since 1987\",
    \"research\": {
      \"rating\": 4.8,
      \"price_level\": \"$$\",
      \"opportunity_score\": 72
    }
  }

Input levels:
  minimal   Decisions stay on auto and resolve to catalog defaults
  moderate  Derived preset, page tier, archetype, and tagline are pinned
  extreme   Moderate plus full page list, mood sliders, palette, fonts

Run 'site-blueprint gen-config' to generate a documented blueprint.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Directory holding blueprint.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Map free text to a catalog industry key
    Normalize {
        /// Industry or category text, e.g. "Mechanic"
        text: String,
    },
    /// List catalog industries and their layouts
    Industries,
    /// Resolve a profile into a configuration
    Resolve(ProfileArgs),
    /// Resolve and plan a site
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Layout id (falls back to the industry default if not offered)
        #[arg(long)]
        layout: Option<String>,
    },
    /// Expand presets × themes into keyed variants
    Variants {
        /// Comma-separated presets (default: from config)
        #[arg(long, value_delimiter = ',')]
        presets: Vec<String>,

        /// Comma-separated themes (default: from config)
        #[arg(long, value_delimiter = ',')]
        themes: Vec<String>,

        /// Print JSON instead of the list
        #[arg(long)]
        json: bool,
    },
    /// Shorten a preset-layout key
    Shorten { key: String },
    /// Expand a short variant key
    Expand { key: String },
    /// Print a stock blueprint.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);
    run(cli.command, &cli.config_dir)
}

/// Config and catalog for commands that consult them.
struct Context {
    config: PlannerConfig,
    custom_catalog: Option<IndustryCatalog>,
}

impl Context {
    fn load(config_dir: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let config = config::load_config(config_dir)?;
        let custom_catalog = match config.catalog_path(config_dir) {
            Some(path) => Some(IndustryCatalog::load(&path)?),
            None => None,
        };
        Ok(Self {
            config,
            custom_catalog,
        })
    }

    fn catalog(&self) -> &IndustryCatalog {
        self.custom_catalog
            .as_ref()
            .unwrap_or_else(|| IndustryCatalog::builtin())
    }
}

fn run(command: Command, config_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        // No config load: a broken blueprint.toml must not block regenerating it.
        Command::GenConfig => print!("{}", config::stock_config_toml()),
        Command::Shorten { key } => {
            println!("{}", variant_key::shorten_variant_key(&key));
        }
        Command::Expand { key } => {
            println!("{}", variant_key::expand_variant_key(&key));
        }
        Command::Normalize { text } => {
            let ctx = Context::load(config_dir)?;
            println!("{}", ctx.catalog().normalize(&text));
        }
        Command::Industries => {
            let ctx = Context::load(config_dir)?;
            output::print_industries(ctx.catalog());
        }
        Command::Resolve(args) => {
            let ctx = Context::load(config_dir)?;
            let profile = load_profile(&args)?;
            let level = level_for(&args, &ctx.config);
            let resolved = InputResolver::new(ctx.catalog()).resolve_with(
                &profile,
                level,
                &ctx.config.overrides,
            )?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            } else {
                output::print_resolved(&profile.name, &resolved);
            }
        }
        Command::Plan { profile: args, layout } => {
            let ctx = Context::load(config_dir)?;
            let profile = load_profile(&args)?;
            let planner = SitePlanner::new(ctx.catalog())
                .with_level(level_for(&args, &ctx.config))
                .with_overrides(ctx.config.overrides.clone());
            let plan = planner.generate_site(&profile, layout.as_deref())?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                output::print_plan(&plan);
            }
        }
        Command::Variants {
            presets,
            themes,
            json,
        } => {
            let ctx = Context::load(config_dir)?;
            let presets = or_configured(presets, &ctx.config.variants.presets);
            let themes = or_configured(themes, &ctx.config.variants.themes);
            let combinations = matrix::expand_variants(&presets, &themes);
            if json {
                println!("{}", serde_json::to_string_pretty(&combinations)?);
            } else {
                output::print_variants(&combinations);
            }
        }
    }

    Ok(())
}

/// Read the profile file, or build one from `--name`/`--industry`.
fn load_profile(args: &ProfileArgs) -> Result<BusinessProfile, Box<dyn std::error::Error>> {
    match (&args.profile, &args.name) {
        (Some(path), _) => read_profile(path),
        (None, Some(name)) => Ok(BusinessProfile {
            industry: args.industry.clone(),
            ..BusinessProfile::new(name.clone())
        }),
        (None, None) => Err("either --profile or --name is required".into()),
    }
}

fn read_profile(path: &Path) -> Result<BusinessProfile, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let profile: BusinessProfile = serde_json::from_str(&content)?;
    Ok(profile)
}

fn level_for(args: &ProfileArgs, config: &PlannerConfig) -> InputLevel {
    args.level
        .as_deref()
        .map_or(config.defaults.level, InputLevel::from_str_lenient)
}

fn or_configured(cli: Vec<String>, configured: &[String]) -> Vec<String> {
    if cli.is_empty() {
        configured.to_vec()
    } else {
        cli
    }
}
