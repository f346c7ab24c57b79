//! Domain records: stock, shopping list, recipes and meal slots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a stock item.
pub type StockId = u64;
/// Identifier of a shopping-list entry.
pub type ShoppingId = u64;
/// Identifier of a catalog recipe.
pub type RecipeId = u64;

/// Where a stock item is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Refrigerated storage
    Fridge,
    /// Frozen storage
    Freezer,
    /// Room-temperature shelf
    Pantry,
}

impl Location {
    /// All locations in display order.
    pub const ALL: [Location; 3] = [Location::Fridge, Location::Freezer, Location::Pantry];

    /// Wire name of the location.
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Fridge => "fridge",
            Location::Freezer => "freezer",
            Location::Pantry => "pantry",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Location::ALL
            .into_iter()
            .find(|location| location.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                crate::Error::invalid_input(format!("Unknown location: '{}'", s))
                    .with_suggestion("Use one of: fridge, freezer, pantry")
            })
    }
}

/// Scale a stock quantity is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityUnit {
    /// Remaining fraction, 0-100
    Percentage,
    /// Number of pieces, packs, bottles
    Count,
    /// Mass (kg)
    Weight,
    /// Volume (litres)
    Volume,
}

impl QuantityUnit {
    /// Short suffix used when printing a quantity.
    pub fn suffix(&self) -> &'static str {
        match self {
            QuantityUnit::Percentage => "%",
            QuantityUnit::Count => "pcs",
            QuantityUnit::Weight => "kg",
            QuantityUnit::Volume => "L",
        }
    }
}

/// An inventory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    /// Unique within the stock list
    pub id: StockId,
    /// Display name, also matched against recipe ingredients
    pub name: String,
    /// Free-text food category
    pub category: String,
    /// Where the item is kept
    pub location: Location,
    /// Remaining amount in `quantity_unit`. Never negative.
    pub quantity: f64,
    /// Scale of `quantity`
    pub quantity_unit: QuantityUnit,
    /// Last day the item is good
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    /// Day the item was bought
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
}

impl StockItem {
    /// Create an item without dates.
    pub fn new(
        id: StockId,
        name: impl Into<String>,
        category: impl Into<String>,
        location: Location,
        quantity: f64,
        quantity_unit: QuantityUnit,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            location,
            quantity,
            quantity_unit,
            expiry_date: None,
            purchase_date: None,
        }
    }

    /// Set the expiry date
    pub fn with_expiry(mut self, date: NaiveDate) -> Self {
        self.expiry_date = Some(date);
        self
    }

    /// Set the purchase date
    pub fn with_purchase(mut self, date: NaiveDate) -> Self {
        self.purchase_date = Some(date);
        self
    }

    /// Quantity with its unit suffix, e.g. `20%` or `3kg`.
    pub fn display_quantity(&self) -> String {
        format!("{}{}", self.quantity, self.quantity_unit.suffix())
    }
}

/// A shopping-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Unique within the list
    pub id: ShoppingId,
    /// What to buy
    pub name: String,
    /// Grouping key for the list view
    pub category: String,
    /// Needed soon
    #[serde(default)]
    pub urgent: bool,
    /// Already bought
    #[serde(default)]
    pub checked: bool,
}

impl ShoppingItem {
    /// Create an unchecked, non-urgent entry.
    pub fn new(id: ShoppingId, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            urgent: false,
            checked: false,
        }
    }

    /// Flag the entry as urgent
    pub fn urgent(mut self) -> Self {
        self.urgent = true;
        self
    }
}

/// How demanding a recipe is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Little prep or technique
    Easy,
    /// Some prep or technique
    Medium,
    /// Involved
    Hard,
}

impl Difficulty {
    /// Wire name of the difficulty.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// A read-only catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique within the catalog
    pub id: RecipeId,
    /// Display name, matched by search queries
    pub name: String,
    /// Category id, also used as the search facet.
    pub category: String,
    /// How demanding the recipe is
    pub difficulty: Difficulty,
    /// Total time in minutes
    pub cook_time_minutes: u32,
    /// Portions the recipe makes
    pub servings: u32,
    /// 0.0 to 5.0
    pub rating: f64,
    /// Free-text ingredient names, in recipe order.
    pub ingredients: Vec<String>,
}

/// Meal of the day a slot belongs to. Ordering follows the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Between meals
    Snack,
}

impl TimeOfDay {
    /// All slots of a day, in order.
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Breakfast,
        TimeOfDay::Lunch,
        TimeOfDay::Dinner,
        TimeOfDay::Snack,
    ];

    /// Wire name of the slot.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Breakfast => "breakfast",
            TimeOfDay::Lunch => "lunch",
            TimeOfDay::Dinner => "dinner",
            TimeOfDay::Snack => "snack",
        }
    }

    /// Usual serving time, shown next to the slot.
    pub fn usual_time(&self) -> &'static str {
        match self {
            TimeOfDay::Breakfast => "07:00",
            TimeOfDay::Lunch => "12:00",
            TimeOfDay::Snack => "15:00",
            TimeOfDay::Dinner => "18:00",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        TimeOfDay::ALL
            .into_iter()
            .find(|time| time.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                crate::Error::invalid_input(format!("Unknown meal slot: '{}'", s))
                    .with_suggestion("Use one of: breakfast, lunch, dinner, snack")
            })
    }
}

/// One planned meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSlot {
    /// Which meal this is
    pub time_of_day: TimeOfDay,
    /// Recipe name or a custom dish; empty when nothing is planned.
    pub assigned_recipe_name: String,
    /// Cooked and ready to serve
    #[serde(default)]
    pub ready: bool,
}

impl MealSlot {
    /// An unplanned slot.
    pub fn empty(time_of_day: TimeOfDay) -> Self {
        Self {
            time_of_day,
            assigned_recipe_name: String::new(),
            ready: false,
        }
    }

    /// True when a dish has been assigned.
    pub fn is_planned(&self) -> bool {
        !self.assigned_recipe_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_round_trips_through_str() {
        for location in Location::ALL {
            assert_eq!(location.as_str().parse::<Location>().unwrap(), location);
        }
        assert!("garage".parse::<Location>().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_stock_item_wire_format() {
        let item = StockItem::new(1, "牛乳", "乳製品", Location::Fridge, 20.0, QuantityUnit::Percentage)
            .with_expiry(NaiveDate::from_ymd_opt(2024, 12, 18).unwrap());
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["location"], "fridge");
        assert_eq!(json["quantity_unit"], "percentage");
        assert_eq!(json["expiry_date"], "2024-12-18");
        assert!(json.get("purchase_date").is_none());
    }

    #[test]
    fn test_display_quantity() {
        let rice = StockItem::new(10, "米", "穀物", Location::Pantry, 3.0, QuantityUnit::Weight);
        assert_eq!(rice.display_quantity(), "3kg");
    }

    #[test]
    fn test_time_of_day_order() {
        let mut times = vec![TimeOfDay::Snack, TimeOfDay::Breakfast, TimeOfDay::Dinner];
        times.sort();
        assert_eq!(times, vec![TimeOfDay::Breakfast, TimeOfDay::Dinner, TimeOfDay::Snack]);
        assert_eq!("Lunch".parse::<TimeOfDay>().unwrap(), TimeOfDay::Lunch);
    }

    #[test]
    fn test_shopping_item_defaults() {
        let item: ShoppingItem =
            serde_json::from_str(r#"{"id": 3, "name": "鶏胸肉", "category": "肉類"}"#).unwrap();
        assert!(!item.urgent);
        assert!(!item.checked);
    }
}
