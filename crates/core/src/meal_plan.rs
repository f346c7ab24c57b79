//! A day's meal plan: one slot per time of day.

use crate::error::{Error, Result};
use crate::model::{MealSlot, Recipe, TimeOfDay};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Planned meals for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<MealSlot>", into = "Vec<MealSlot>")]
pub struct MealPlan {
    slots: BTreeMap<TimeOfDay, MealSlot>,
}

impl Default for MealPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl MealPlan {
    /// A plan with every slot empty.
    pub fn new() -> Self {
        let slots = TimeOfDay::ALL
            .into_iter()
            .map(|time| (time, MealSlot::empty(time)))
            .collect();
        Self { slots }
    }

    /// The slot for `time`.
    pub fn slot(&self, time: TimeOfDay) -> &MealSlot {
        // Every variant is inserted by the constructors.
        &self.slots[&time]
    }

    /// All slots, breakfast first.
    pub fn slots(&self) -> impl Iterator<Item = &MealSlot> {
        self.slots.values()
    }

    /// Number of slots with a dish assigned.
    pub fn planned_count(&self) -> usize {
        self.slots().filter(|slot| slot.is_planned()).count()
    }

    /// Put a catalog recipe into a slot.
    pub fn assign_recipe(&mut self, time: TimeOfDay, recipe: &Recipe) {
        self.replace(time, recipe.name.clone());
    }

    /// Put a free-text dish into a slot. Blank names are refused.
    pub fn assign_custom(&mut self, time: TimeOfDay, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::invalid_input(format!("Blank dish name for {}", time))
                .with_suggestion("Pick a recipe or type a dish name"));
        }
        self.replace(time, name.to_string());
        Ok(())
    }

    /// Mark a slot as ready (or not) to cook.
    pub fn set_ready(&mut self, time: TimeOfDay, ready: bool) {
        if let Some(slot) = self.slots.get_mut(&time) {
            slot.ready = ready;
        }
    }

    /// Empty a slot.
    pub fn clear(&mut self, time: TimeOfDay) {
        self.slots.insert(time, MealSlot::empty(time));
    }

    fn replace(&mut self, time: TimeOfDay, name: String) {
        tracing::debug!(slot = %time, dish = %name, "meal slot reassigned");
        self.slots.insert(
            time,
            MealSlot {
                time_of_day: time,
                assigned_recipe_name: name,
                ready: false,
            },
        );
    }
}

impl From<Vec<MealSlot>> for MealPlan {
    /// Later slots for the same time of day win; missing ones stay empty.
    fn from(slots: Vec<MealSlot>) -> Self {
        let mut plan = MealPlan::new();
        for slot in slots {
            plan.slots.insert(slot.time_of_day, slot);
        }
        plan
    }
}

impl From<MealPlan> for Vec<MealSlot> {
    fn from(plan: MealPlan) -> Self {
        plan.slots.into_values().collect()
    }
}
