//! Shopping list commands

use super::{print_json, record, Context};
use anyhow::Result;
use kitchonomy_cli::output::{format_percentage, meter, Status};
use kitchonomy_core::aggregate::{group_by_category, shopping_progress, CategoryGroup, ShoppingProgress};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

/// JSON output for the list
#[derive(Debug, Serialize)]
struct JsonListOutput<'a> {
    progress: ShoppingProgress,
    groups: Vec<CategoryGroup<'a>>,
}

/// JSON output after toggling
#[derive(Debug, Serialize)]
struct JsonToggleOutput {
    toggled: Vec<u64>,
    unknown: Vec<u64>,
    progress: ShoppingProgress,
}

fn print_progress(progress: &ShoppingProgress) {
    println!(
        "  {} {} ({}/{})",
        meter(progress.percentage, 20),
        format_percentage(progress.percentage),
        progress.checked_count,
        progress.total_count
    );
}

/// Show the list grouped by category
pub fn run_list(ctx: &Context) -> Result<()> {
    record("shopping.list");
    let list = ctx.store.shopping();
    let progress = shopping_progress(list);
    let groups = group_by_category(list);

    if ctx.is_json() {
        return print_json(&JsonListOutput { progress, groups });
    }

    Status::header("Shopping list");
    if groups.is_empty() {
        Status::info("The list is empty");
        return Ok(());
    }

    for group in &groups {
        println!();
        println!("  {}", group.category.if_supports_color(Stream::Stdout, |t| t.bold()));
        for item in &group.items {
            let mark = if item.checked { "[x]" } else { "[ ]" };
            let urgent = if item.urgent && !item.checked {
                format!(" {}", "urgent".if_supports_color(Stream::Stdout, |t| t.red()))
            } else {
                String::new()
            };
            println!("    {} {:>2}  {}{}", mark, item.id, item.name, urgent);
        }
    }
    println!();
    print_progress(&progress);
    if progress.is_complete() {
        Status::success("Everything is in the basket");
    }
    Ok(())
}

/// Toggle entries by id, then show progress
pub fn run_toggle(ctx: &mut Context, ids: &[u64]) -> Result<()> {
    record("shopping.toggle");
    let mut toggled = Vec::new();
    let mut unknown = Vec::new();
    for &id in ids {
        if ctx.store.toggle_checked(id) {
            toggled.push(id);
        } else {
            unknown.push(id);
        }
    }
    let progress = shopping_progress(ctx.store.shopping());

    if ctx.is_json() {
        return print_json(&JsonToggleOutput {
            toggled,
            unknown,
            progress,
        });
    }

    for id in &toggled {
        if let Some(item) = ctx.store.shopping_item(*id) {
            let state = if item.checked { "checked" } else { "unchecked" };
            Status::success(&format!("{} {}", item.name, state));
        }
    }
    for id in &unknown {
        Status::warning(&format!("No shopping item #{}", id));
    }
    print_progress(&progress);
    Ok(())
}
