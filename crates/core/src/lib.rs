//! Core of the Kitchonomy household food manager
//!
//! This crate holds the parts of the system that make decisions:
//!
//! - **Model**: stock items, shopping entries, recipes and meal slots
//! - **Classifier**: quantity and expiry risk tiers for a stock item
//! - **Catalog store**: the in-memory collections and their explicit edits
//! - **Aggregates**: shopping progress, category groups, low-stock and expiry summaries
//! - **Seed data**: validated initial contents, from JSON or built in
//! - **Configuration**: TOML settings for the command-line front end
//!
//! Recipe search and suggestion live in `kitchonomy-search`.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use kitchonomy_core::{classify, CatalogStore, ExpiryTier, QuantityTier, SeedData};
//!
//! let store = CatalogStore::from_seed(SeedData::builtin());
//! let today = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
//!
//! let milk = &store.stock()[0];
//! let tiers = classify(milk, today).unwrap();
//! assert_eq!(tiers.quantity_tier, QuantityTier::Critical);
//! assert_eq!(tiers.expiry_tier, ExpiryTier::ExpiringSoon);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod error;
pub mod meal_plan;
pub mod model;
pub mod seed;
pub mod store;
pub mod validation;

pub use classify::{classify, Classification, ExpiryTier, QuantityTier};
pub use error::{Error, ErrorCode, Result, ResultExt};
pub use meal_plan::MealPlan;
pub use model::{
    Difficulty, Location, MealSlot, QuantityUnit, Recipe, RecipeId, ShoppingId, ShoppingItem,
    StockId, StockItem, TimeOfDay,
};
pub use seed::SeedData;
pub use store::CatalogStore;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::aggregate::{
        expiry_alerts, group_by_category, location_overview, low_stock_summary,
        shopping_progress, urgent_pending, CategoryGroup, ExpiryAlert, LocationSummary,
        LowStockEntry, ShoppingProgress,
    };
    pub use crate::classify::{classify, Classification, ExpiryTier, QuantityTier};
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::meal_plan::MealPlan;
    pub use crate::model::*;
    pub use crate::seed::{SeedData, SeedRecords};
    pub use crate::store::CatalogStore;
    pub use crate::validation::{ValidationResult, Validator};
}
