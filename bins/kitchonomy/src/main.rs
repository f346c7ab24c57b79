//! Kitchonomy - household food manager
//!
//! Classifies stock by freshness and quantity, searches and suggests
//! recipes, and summarizes the shopping list and meal plan.

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use kitchonomy_cli::output::{set_color, Status};
use kitchonomy_core::config::Config;
use kitchonomy_core::error::exit_codes;
use kitchonomy_core::{CatalogStore, SeedData};
use kitchonomy_telemetry::{metrics, TelemetryConfig, Timer};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod commands;

use commands::{meals, recipes, shopping, stock, Context, OutputFormat};

/// Household food manager
#[derive(Parser)]
#[command(name = "kitchonomy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to kitchonomy.toml lookup)
    #[arg(short, long, global = true, env = "KITCHONOMY_CONFIG")]
    config: Option<PathBuf>,

    /// JSON seed file replacing the built-in household
    #[arg(short, long, global = true, env = "KITCHONOMY_SEED")]
    seed: Option<PathBuf>,

    /// Reference date for freshness, YYYY-MM-DD (defaults to today)
    #[arg(long, global = true, value_parser = parse_date)]
    today: Option<NaiveDate>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Print collected metrics as JSON on stderr when done
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every stock item
    Stock {
        /// Only one storage location (fridge, freezer, pantry)
        #[arg(short, long)]
        location: Option<String>,
    },

    /// Items running out, emptiest first
    LowStock,

    /// Expired and expiring-soon items, most overdue first
    Alerts,

    /// Per-location counts with shopping and meal progress
    Overview,

    /// Search and suggest recipes
    Recipes {
        #[command(subcommand)]
        action: RecipesAction,
    },

    /// Shopping list
    Shopping {
        #[command(subcommand)]
        action: ShoppingAction,
    },

    /// Today's meal plan
    Meals {
        #[command(subcommand)]
        action: Option<MealsAction>,
    },

    /// Print the effective seed data as JSON
    Seed,
}

#[derive(Subcommand)]
enum RecipesAction {
    /// Filter the catalog by text and category
    Search {
        /// Text to find in recipe names and ingredients
        #[arg(default_value = "")]
        query: String,

        /// Category id, or "all"
        #[arg(short = 'C', long, default_value = "all")]
        category: String,
    },

    /// Rank recipes by how many stocked items they use
    Suggest {
        /// Number of recipes to show (defaults to display.suggestion_limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[derive(Subcommand)]
enum ShoppingAction {
    /// Show the list grouped by category, with progress
    List,

    /// Toggle the checked flag of entries, then show progress
    Toggle {
        /// Entry ids
        #[arg(required = true)]
        ids: Vec<u64>,
    },
}

#[derive(Subcommand)]
enum MealsAction {
    /// Show the plan
    Show,

    /// Put a recipe or custom dish into a slot
    Assign {
        /// breakfast, lunch, dinner or snack
        slot: String,

        /// Recipe name from the catalog, or any dish name
        name: String,
    },
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, kitchonomy_core::seed::DATE_FORMAT)
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

/// Resolve a seed path from the config file relative to that file.
fn resolve_seed_path(config: &Config, seed_path: &str) -> PathBuf {
    let path = Path::new(seed_path);
    match config.path.as_deref().and_then(Path::parent) {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

fn load_store(cli: &Cli, config: &Config) -> anyhow::Result<CatalogStore> {
    let seed_path = match (&cli.seed, &config.schema.general.seed_path) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(path)) => Some(resolve_seed_path(config, path)),
        (None, None) => None,
    };

    let seed = match seed_path {
        Some(path) => SeedData::load(&path)?,
        None => {
            tracing::debug!("using built-in seed");
            SeedData::builtin()
        }
    };

    metrics().gauge("catalog.stock", seed.stock.len() as u64);
    metrics().gauge("catalog.shopping", seed.shopping.len() as u64);
    metrics().gauge("catalog.recipes", seed.recipes.len() as u64);
    Ok(CatalogStore::from_seed(seed))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    // Errors were already refused by the loader.
    let warnings: Vec<String> = config
        .schema
        .validate()
        .warnings()
        .iter()
        .map(|w| w.to_string())
        .collect();

    let telemetry = TelemetryConfig {
        log_level: config.schema.logging.level.clone(),
        json: config.schema.logging.json,
        ..TelemetryConfig::default()
    }
    .with_verbosity(cli.verbose);
    kitchonomy_telemetry::init_with_config(telemetry)?;
    set_color(config.schema.display.color);

    for warning in &warnings {
        tracing::warn!(%warning, "configuration warning");
    }
    tracing::info!(path = ?config.path, "configuration loaded");

    let store = load_store(&cli, &config)?;
    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    tracing::debug!(%today, "reference date");

    let mut ctx = Context {
        store,
        today,
        format: cli.format,
        display: config.schema.display.clone(),
    };

    let timer = Timer::start("command.duration_ms");
    let result = match cli.command {
        Commands::Stock { location } => stock::run_stock(&ctx, location.as_deref()),
        Commands::LowStock => stock::run_low_stock(&ctx),
        Commands::Alerts => stock::run_alerts(&ctx),
        Commands::Overview => stock::run_overview(&ctx),
        Commands::Recipes { action } => match action {
            RecipesAction::Search { query, category } => recipes::run_search(&ctx, &query, &category),
            RecipesAction::Suggest { limit } => recipes::run_suggest(&ctx, limit),
        },
        Commands::Shopping { action } => match action {
            ShoppingAction::List => shopping::run_list(&ctx),
            ShoppingAction::Toggle { ids } => shopping::run_toggle(&mut ctx, &ids),
        },
        Commands::Meals { action } => match action {
            None | Some(MealsAction::Show) => meals::run_show(&ctx),
            Some(MealsAction::Assign { slot, name }) => meals::run_assign(&mut ctx, &slot, &name),
        },
        Commands::Seed => commands::run_seed(&ctx),
    };
    timer.stop();

    if cli.metrics {
        eprintln!("{}", serde_json::to_string_pretty(&metrics().export_json())?);
    }

    result
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = cli.format;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let core = e.downcast_ref::<kitchonomy_core::Error>();
            report_error(&e, core, format);
            let code = core.map(|err| err.exit_code()).unwrap_or(exit_codes::FAILURE);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

/// Print the failure on stderr, as a structured report under `--format json`.
fn report_error(e: &anyhow::Error, core: Option<&kitchonomy_core::Error>, format: OutputFormat) {
    if let (OutputFormat::Json, Some(err)) = (format, core) {
        if let Ok(json) = serde_json::to_string_pretty(&err.to_report()) {
            eprintln!("{}", json);
            return;
        }
    }
    Status::error(&format!("{:#}", e));
}
