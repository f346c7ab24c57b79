//! Meal plan commands

use super::{print_json, record, Context};
use anyhow::Result;
use kitchonomy_cli::output::{format_count, Status};
use kitchonomy_core::{MealPlan, TimeOfDay};
use owo_colors::{OwoColorize, Stream};

fn print_plan(plan: &MealPlan) {
    Status::header("Meal plan");
    for slot in plan.slots() {
        let dish = if slot.is_planned() {
            slot.assigned_recipe_name.clone()
        } else {
            "-".if_supports_color(Stream::Stdout, |t| t.dimmed()).to_string()
        };
        let ready = if slot.ready {
            format!(" {}", "ready".if_supports_color(Stream::Stdout, |t| t.green()))
        } else {
            String::new()
        };
        println!(
            "  {}  {:<10} {}{}",
            slot.time_of_day.usual_time(),
            slot.time_of_day.as_str(),
            dish,
            ready
        );
    }
    println!();
    println!("  {} planned", format_count(plan.planned_count(), "meal", "meals"));
}

/// Show the plan
pub fn run_show(ctx: &Context) -> Result<()> {
    record("meals.show");
    if ctx.is_json() {
        return print_json(ctx.store.meals());
    }
    print_plan(ctx.store.meals());
    Ok(())
}

/// Assign a catalog recipe, or a custom dish when no recipe has that name
pub fn run_assign(ctx: &mut Context, slot: &str, name: &str) -> Result<()> {
    record("meals.assign");
    let time: TimeOfDay = slot.parse()?;

    match ctx.store.recipe_named(name.trim()).cloned() {
        Some(recipe) => ctx.store.meals_mut().assign_recipe(time, &recipe),
        None => ctx.store.meals_mut().assign_custom(time, name)?,
    }

    if ctx.is_json() {
        return print_json(ctx.store.meals());
    }
    Status::success(&format!("{} set to {}", time, name.trim()));
    print_plan(ctx.store.meals());
    Ok(())
}
