//! Command implementations

pub mod meals;
pub mod recipes;
pub mod shopping;
pub mod stock;

use anyhow::Result;
use chrono::NaiveDate;
use clap::ValueEnum;
use kitchonomy_core::config::DisplayConfig;
use kitchonomy_core::CatalogStore;
use kitchonomy_telemetry::metrics;
use serde::Serialize;

/// Output format for every command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Everything a command needs
pub struct Context {
    pub store: CatalogStore,
    pub today: NaiveDate,
    pub format: OutputFormat,
    pub display: DisplayConfig,
}

impl Context {
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Count a command invocation
pub fn record(command: &str) {
    metrics().increment(&format!("commands.{}", command));
}

/// Dump the effective seed
pub fn run_seed(ctx: &Context) -> Result<()> {
    record("seed");
    print_json(&ctx.store.to_seed())
}
