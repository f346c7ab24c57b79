//! Recipe commands - search and ingredient-overlap suggestions

use super::{print_json, record, Context};
use anyhow::Result;
use kitchonomy_cli::output::{format_count, Status};
use kitchonomy_core::Recipe;
use kitchonomy_search::{rank_by_overlap, search_recipes, CategoryFacet, ScoredRecipe};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

/// JSON output for a search
#[derive(Debug, Serialize)]
struct JsonSearchOutput<'a> {
    query: &'a str,
    category: String,
    total: usize,
    recipes: Vec<&'a Recipe>,
}

fn print_recipe(recipe: &Recipe) {
    println!(
        "  {:<18} {:<9} {:<6} {:>3} min  {} {:.1}",
        recipe.name,
        recipe.category,
        recipe.difficulty.as_str(),
        recipe.cook_time_minutes,
        "★".if_supports_color(Stream::Stdout, |t| t.yellow()),
        recipe.rating
    );
}

/// Filter the catalog by text and category
pub fn run_search(ctx: &Context, query: &str, category: &str) -> Result<()> {
    record("recipes.search");
    let facet: CategoryFacet = category.parse().map_err(kitchonomy_core::Error::from)?;
    let found: Vec<&Recipe> = search_recipes(ctx.store.recipes(), query, &facet).collect();

    if ctx.is_json() {
        return print_json(&JsonSearchOutput {
            query,
            category: facet.to_string(),
            total: found.len(),
            recipes: found,
        });
    }

    let title = match query.trim() {
        "" => format!("Recipes in {}", facet),
        text => format!("Recipes matching \"{}\" in {}", text, facet),
    };
    Status::header(&title);

    if found.is_empty() {
        Status::info("No recipes found");
        return Ok(());
    }
    for recipe in &found {
        print_recipe(recipe);
    }
    println!();
    println!("  {}", format_count(found.len(), "recipe", "recipes"));
    Ok(())
}

/// Rank recipes by ingredient overlap with the stock
pub fn run_suggest(ctx: &Context, limit: Option<usize>) -> Result<()> {
    record("recipes.suggest");
    let limit = limit.unwrap_or(ctx.display.suggestion_limit);
    let ranked: Vec<ScoredRecipe<'_>> = rank_by_overlap(ctx.store.stock(), ctx.store.recipes())
        .into_iter()
        .take(limit)
        .collect();

    if ctx.is_json() {
        return print_json(&ranked);
    }

    Status::header("Suggested recipes");
    if ranked.is_empty() {
        Status::info("No recipes in the catalog");
        return Ok(());
    }
    for scored in &ranked {
        print_recipe(scored.recipe);
        let uses = if scored.matched_stock.is_empty() {
            "uses nothing in stock".to_string()
        } else {
            format!("uses {}", scored.matched_stock.join(", "))
        };
        println!(
            "  {:<18} {}",
            "",
            uses.if_supports_color(Stream::Stdout, |t| t.dimmed())
        );
    }
    Ok(())
}
