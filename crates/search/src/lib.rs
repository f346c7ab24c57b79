//! Recipe search and suggestions for Kitchonomy.
//!
//! This crate provides:
//! - Case-insensitive text matching over names and ingredients
//! - Category facets parsed from user input
//! - Lazy, order-preserving recipe search
//! - Stable ranking by ingredient overlap with the current stock
//!
//! ```rust
//! use kitchonomy_core::SeedData;
//! use kitchonomy_search::{search_recipes, CategoryFacet};
//!
//! let seed = SeedData::builtin();
//! let japanese: CategoryFacet = "japanese".parse().unwrap();
//! assert!(search_recipes(&seed.recipes, "", &japanese).all(|r| r.category == "japanese"));
//! ```

#![warn(missing_docs)]

mod error;
mod matcher;
mod overlap;
pub mod text;

pub use error::{Result, SearchError, SearchErrorCode};
pub use matcher::{search_recipes, CategoryFacet, RecipeQuery, SearchResults, ALL_CATEGORIES};
pub use overlap::{rank_by_overlap, suggest_by_ingredient_overlap, ScoredRecipe};
