//! In-memory catalog store.
//!
//! The store is the single owner of the collections. Queries borrow
//! snapshots (`&[T]`); the only mutations are the explicit operations below.
//! Operations on an unknown id do nothing and return `false`.

use crate::error::Result;
use crate::meal_plan::MealPlan;
use crate::model::{Recipe, ShoppingId, ShoppingItem, StockId, StockItem};
use crate::seed::SeedData;
use crate::validation::{validate_shopping_item, validate_stock_item, Validator};
use crate::ResultExt;
use chrono::NaiveDate;

/// Stock, shopping list, recipe catalog and meal plan.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    stock: Vec<StockItem>,
    shopping: Vec<ShoppingItem>,
    recipes: Vec<Recipe>,
    meals: MealPlan,
}

impl CatalogStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from validated seed data.
    pub fn from_seed(seed: SeedData) -> Self {
        tracing::debug!(
            stock = seed.stock.len(),
            shopping = seed.shopping.len(),
            recipes = seed.recipes.len(),
            "catalog store seeded"
        );
        Self {
            stock: seed.stock,
            shopping: seed.shopping,
            recipes: seed.recipes,
            meals: seed.meals,
        }
    }

    /// Stock snapshot, in insertion order.
    pub fn stock(&self) -> &[StockItem] {
        &self.stock
    }

    /// Shopping list snapshot, in list order.
    pub fn shopping(&self) -> &[ShoppingItem] {
        &self.shopping
    }

    /// Recipe catalog, in catalog order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Today's meal plan.
    pub fn meals(&self) -> &MealPlan {
        &self.meals
    }

    /// Mutable access to the meal plan.
    pub fn meals_mut(&mut self) -> &mut MealPlan {
        &mut self.meals
    }

    /// Copy the current contents out as seed data.
    pub fn to_seed(&self) -> SeedData {
        SeedData {
            stock: self.stock.clone(),
            shopping: self.shopping.clone(),
            recipes: self.recipes.clone(),
            meals: self.meals.clone(),
        }
    }

    /// Look up a stock item.
    pub fn stock_item(&self, id: StockId) -> Option<&StockItem> {
        self.stock.iter().find(|item| item.id == id)
    }

    /// Look up a shopping-list entry.
    pub fn shopping_item(&self, id: ShoppingId) -> Option<&ShoppingItem> {
        self.shopping.iter().find(|item| item.id == id)
    }

    /// Look up a recipe by exact name.
    pub fn recipe_named(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.name == name)
    }

    /// Append a stock item after validating it.
    pub fn add_stock(&mut self, item: StockItem) -> Result<()> {
        validate_stock_item(&item)
            .to_result()
            .context(format!("While adding stock item '{}'", item.name))?;
        tracing::debug!(id = item.id, name = %item.name, location = %item.location, "stock added");
        self.stock.push(item);
        Ok(())
    }

    /// Set the remaining quantity of a stock item.
    ///
    /// Returns `Ok(false)` for an unknown id. A negative or non-finite
    /// quantity is refused and leaves the item untouched.
    pub fn set_stock_quantity(&mut self, id: StockId, quantity: f64) -> Result<bool> {
        Validator::new()
            .non_negative("quantity", quantity)
            .validate()
            .to_result()
            .context(format!("While editing stock item #{}", id))?;

        match self.stock.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                tracing::debug!(id, from = item.quantity, to = quantity, "stock quantity edited");
                item.quantity = quantity;
                Ok(true)
            }
            None => {
                tracing::debug!(id, "quantity edit for unknown stock id ignored");
                Ok(false)
            }
        }
    }

    /// Set or clear the expiry date of a stock item.
    pub fn set_stock_expiry(&mut self, id: StockId, expiry: Option<NaiveDate>) -> bool {
        match self.stock.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.expiry_date = expiry;
                true
            }
            None => false,
        }
    }

    /// Remove a stock item. Zero-quantity items stay until this is called.
    pub fn remove_stock(&mut self, id: StockId) -> bool {
        let before = self.stock.len();
        self.stock.retain(|item| item.id != id);
        before != self.stock.len()
    }

    /// Smallest id greater than every id on the shopping list.
    pub fn next_shopping_id(&self) -> ShoppingId {
        self.shopping.iter().map(|item| item.id).max().map_or(1, |max| max + 1)
    }

    /// Append an entry to the shopping list.
    ///
    /// An entry whose id is already on the list is not added (`Ok(false)`),
    /// so ids stay unique.
    pub fn add_shopping_item(&mut self, item: ShoppingItem) -> Result<bool> {
        validate_shopping_item(&item)
            .to_result()
            .context(format!("While adding shopping item '{}'", item.name))?;

        if self.shopping_item(item.id).is_some() {
            tracing::debug!(id = item.id, "shopping id already on the list");
            return Ok(false);
        }
        tracing::debug!(id = item.id, name = %item.name, urgent = item.urgent, "shopping item added");
        self.shopping.push(item);
        Ok(true)
    }

    /// Flip the checked flag of an entry.
    pub fn toggle_checked(&mut self, id: ShoppingId) -> bool {
        match self.shopping.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.checked = !item.checked;
                tracing::debug!(id, checked = item.checked, "shopping item toggled");
                true
            }
            None => {
                tracing::debug!(id, "toggle for unknown shopping id ignored");
                false
            }
        }
    }

    /// Remove an entry from the shopping list.
    pub fn remove_shopping_item(&mut self, id: ShoppingId) -> bool {
        let before = self.shopping.len();
        self.shopping.retain(|item| item.id != id);
        before != self.shopping.len()
    }
}
