//! Stock commands - classification, low stock, expiry alerts, overview

use super::{print_json, record, Context};
use anyhow::Result;
use chrono::NaiveDate;
use kitchonomy_cli::output::{
    expiry_badge, format_count, format_days_left, format_percentage, meter, quantity_badge, Status,
};
use kitchonomy_core::aggregate::{
    expiry_alerts, location_overview, low_stock_summary, shopping_progress, urgent_pending,
    LocationSummary, ShoppingProgress,
};
use kitchonomy_core::classify::days_until;
use kitchonomy_core::{classify, ExpiryTier, Location, QuantityTier, QuantityUnit, ShoppingItem};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

/// JSON row for one classified item
#[derive(Debug, Serialize)]
struct StockRow<'a> {
    id: u64,
    name: &'a str,
    category: &'a str,
    location: Location,
    quantity: f64,
    quantity_unit: QuantityUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    expiry_date: Option<NaiveDate>,
    quantity_tier: QuantityTier,
    expiry_tier: ExpiryTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    days_left: Option<i64>,
}

/// JSON output for the overview
#[derive(Debug, Serialize)]
struct JsonOverview<'a> {
    today: NaiveDate,
    locations: Vec<LocationSummary>,
    expiry_alerts: usize,
    shopping: ShoppingProgress,
    urgent: Vec<&'a ShoppingItem>,
    meals_planned: usize,
}

/// Classify every item, optionally for one location
pub fn run_stock(ctx: &Context, location: Option<&str>) -> Result<()> {
    record("stock");
    let location: Option<Location> = location.map(str::parse).transpose()?;

    let mut rows = Vec::new();
    for item in ctx.store.stock() {
        if location.is_some_and(|l| l != item.location) {
            continue;
        }
        let tiers = classify(item, ctx.today)?;
        rows.push(StockRow {
            id: item.id,
            name: &item.name,
            category: &item.category,
            location: item.location,
            quantity: item.quantity,
            quantity_unit: item.quantity_unit,
            expiry_date: item.expiry_date,
            quantity_tier: tiers.quantity_tier,
            expiry_tier: tiers.expiry_tier,
            days_left: item.expiry_date.map(|expiry| days_until(expiry, ctx.today)),
        });
    }

    if ctx.is_json() {
        return print_json(&rows);
    }

    let title = match location {
        Some(l) => format!("Stock in {} ({})", l, ctx.today),
        None => format!("Stock ({})", ctx.today),
    };
    Status::header(&title);

    if rows.is_empty() {
        Status::info("No stock items");
        return Ok(());
    }

    for row in &rows {
        let days = row
            .days_left
            .map(|d| format!(" ({})", format_days_left(d)))
            .unwrap_or_default();
        println!(
            "  {:>3}  {:<16} {:<8} {:>6}  {:<12} {}{}",
            format!("#{}", row.id).if_supports_color(Stream::Stdout, |t| t.dimmed()),
            row.name,
            row.location.as_str(),
            format!("{}{}", row.quantity, row.quantity_unit.suffix()),
            quantity_badge(row.quantity_tier),
            expiry_badge(row.expiry_tier),
            days
        );
    }
    println!();
    println!("  {}", format_count(rows.len(), "item", "items"));
    Ok(())
}

/// Items whose quantity tier is critical or low
pub fn run_low_stock(ctx: &Context) -> Result<()> {
    record("low_stock");
    let entries = low_stock_summary(ctx.store.stock())?;

    if ctx.is_json() {
        return print_json(&entries);
    }

    Status::header("Low stock");
    if entries.is_empty() {
        Status::success("Nothing is running out");
        return Ok(());
    }

    for entry in &entries {
        println!(
            "  {:<12} {:<16} {:<8} {}",
            quantity_badge(entry.quantity_tier),
            entry.item.name,
            entry.location.as_str(),
            entry.item.display_quantity()
        );
    }
    println!();
    println!("  {}", format_count(entries.len(), "item to restock", "items to restock"));
    Ok(())
}

/// Expired and expiring-soon items
pub fn run_alerts(ctx: &Context) -> Result<()> {
    record("alerts");
    let alerts = expiry_alerts(ctx.store.stock(), ctx.today)?;

    if ctx.is_json() {
        return print_json(&alerts);
    }

    Status::header(&format!("Expiry alerts ({})", ctx.today));
    if alerts.is_empty() {
        Status::success("Everything is fresh");
        return Ok(());
    }

    for alert in &alerts {
        println!(
            "  {:<14} {:<16} {:<8} {}",
            expiry_badge(alert.expiry_tier),
            alert.item.name,
            alert.location.as_str(),
            format_days_left(alert.days_left)
        );
    }
    Ok(())
}

/// Per-location counts plus shopping and meal progress
pub fn run_overview(ctx: &Context) -> Result<()> {
    record("overview");
    let locations = location_overview(ctx.store.stock())?;
    let alerts = expiry_alerts(ctx.store.stock(), ctx.today)?.len();
    let progress = shopping_progress(ctx.store.shopping());
    let urgent = urgent_pending(ctx.store.shopping());
    let meals_planned = ctx.store.meals().planned_count();

    if ctx.is_json() {
        return print_json(&JsonOverview {
            today: ctx.today,
            locations,
            expiry_alerts: alerts,
            shopping: progress,
            urgent,
            meals_planned,
        });
    }

    Status::header(&format!("Overview ({})", ctx.today));
    for summary in &locations {
        println!(
            "  {:<8} {:>3} items   {:>2} critical   {:>2} low",
            summary.location.as_str(),
            summary.item_count,
            summary.critical_count,
            summary.low_count
        );
    }
    println!();
    println!("  Expiry alerts  {}", alerts);
    println!(
        "  Shopping       {} {} ({}/{})",
        meter(progress.percentage, 20),
        format_percentage(progress.percentage),
        progress.checked_count,
        progress.total_count
    );
    if !urgent.is_empty() {
        let names: Vec<&str> = urgent.iter().map(|item| item.name.as_str()).collect();
        println!(
            "  Urgent         {}",
            names.join(", ").if_supports_color(Stream::Stdout, |t| t.red())
        );
    }
    println!("  Meals planned  {}", meals_planned);
    Ok(())
}
