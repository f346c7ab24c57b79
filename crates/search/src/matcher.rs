//! Query and category-facet filtering over a recipe catalog.

use crate::error::{Result, SearchError};
use crate::text::{contains_normalized, normalize};
use kitchonomy_core::Recipe;
use std::fmt;
use std::str::FromStr;

/// Facet id that selects every category.
pub const ALL_CATEGORIES: &str = "all";

/// A single-value category filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFacet {
    /// Every category
    #[default]
    All,
    /// Only recipes whose category id equals this one
    Category(String),
}

impl CategoryFacet {
    /// Facet for one category id.
    pub fn category(id: impl Into<String>) -> Self {
        CategoryFacet::Category(id.into())
    }

    /// True when a recipe in `category` passes the facet.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFacet::All => true,
            CategoryFacet::Category(id) => id == category,
        }
    }
}

impl FromStr for CategoryFacet {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        let id = s.trim();
        if id.is_empty() {
            return Err(SearchError::InvalidFacet(s.to_string()));
        }
        if id == ALL_CATEGORIES {
            Ok(CategoryFacet::All)
        } else {
            Ok(CategoryFacet::Category(id.to_string()))
        }
    }
}

impl fmt::Display for CategoryFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFacet::All => f.write_str(ALL_CATEGORIES),
            CategoryFacet::Category(id) => f.write_str(id),
        }
    }
}

/// A prepared search: normalized query text plus a facet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeQuery {
    text: String,
    facet: CategoryFacet,
}

impl RecipeQuery {
    /// Prepare a query. Surrounding whitespace and case are ignored.
    pub fn new(text: &str, facet: CategoryFacet) -> Self {
        Self {
            text: normalize(text),
            facet,
        }
    }

    /// The normalized query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The category facet.
    pub fn facet(&self) -> &CategoryFacet {
        &self.facet
    }

    /// True when this query places no restriction on the catalog.
    pub fn is_unrestricted(&self) -> bool {
        self.text.is_empty() && self.facet == CategoryFacet::All
    }

    /// Query text occurs in the name or in any ingredient.
    pub fn matches_text(&self, recipe: &Recipe) -> bool {
        contains_normalized(&recipe.name, &self.text)
            || recipe
                .ingredients
                .iter()
                .any(|ingredient| contains_normalized(ingredient, &self.text))
    }

    /// Both the text and the facet accept the recipe.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.facet.matches(&recipe.category) && self.matches_text(recipe)
    }

    /// Lazily filter `catalog`, keeping catalog order.
    pub fn search<'a>(&self, catalog: &'a [Recipe]) -> SearchResults<'a> {
        SearchResults {
            recipes: catalog.iter(),
            query: self.clone(),
        }
    }
}

/// Iterator over the recipes accepted by a [`RecipeQuery`], in catalog order.
#[derive(Debug, Clone)]
pub struct SearchResults<'a> {
    recipes: std::slice::Iter<'a, Recipe>,
    query: RecipeQuery,
}

impl<'a> Iterator for SearchResults<'a> {
    type Item = &'a Recipe;

    fn next(&mut self) -> Option<Self::Item> {
        let query = &self.query;
        self.recipes.by_ref().find(|recipe| query.matches(recipe))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.recipes.size_hint().1)
    }
}

/// Recipes matching `query` and `facet`, in catalog order.
///
/// An empty query with [`CategoryFacet::All`] yields the whole catalog.
pub fn search_recipes<'a>(catalog: &'a [Recipe], query: &str, facet: &CategoryFacet) -> SearchResults<'a> {
    let query = RecipeQuery::new(query, facet.clone());
    tracing::debug!(query = %query.text(), facet = %query.facet(), catalog = catalog.len(), "recipe search");
    query.search(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitchonomy_core::Difficulty;

    fn recipe(id: u64, name: &str, category: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            category: category.to_string(),
            difficulty: Difficulty::Easy,
            cook_time_minutes: 15,
            servings: 2,
            rating: 4.5,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn catalog() -> Vec<Recipe> {
        vec![
            recipe(1, "鶏の照り焼き", "japanese", &["鶏もも肉", "醤油", "みりん", "砂糖"]),
            recipe(2, "Tomato Pasta", "western", &["Pasta", "トマト缶", "にんにく", "Olive Oil"]),
            recipe(3, "野菜炒め", "chinese", &["キャベツ", "人参", "ピーマン", "豚肉"]),
            recipe(4, "サーモンテリヤキ", "japanese", &["サーモン", "醤油", "みりん", "砂糖"]),
        ]
    }

    fn ids<'a>(results: impl Iterator<Item = &'a Recipe>) -> Vec<u64> {
        results.map(|r| r.id).collect()
    }

    #[test]
    fn test_empty_query_all_is_identity() {
        let catalog = catalog();
        assert_eq!(ids(search_recipes(&catalog, "", &CategoryFacet::All)), vec![1, 2, 3, 4]);
        assert!(RecipeQuery::new("  ", CategoryFacet::All).is_unrestricted());
    }

    #[test]
    fn test_query_matches_name_case_insensitively() {
        let catalog = catalog();
        assert_eq!(ids(search_recipes(&catalog, "  tomato ", &CategoryFacet::All)), vec![2]);
    }

    #[test]
    fn test_query_matches_ingredients() {
        let catalog = catalog();
        assert_eq!(ids(search_recipes(&catalog, "醤油", &CategoryFacet::All)), vec![1, 4]);
        assert_eq!(ids(search_recipes(&catalog, "OLIVE", &CategoryFacet::All)), vec![2]);
    }

    #[test]
    fn test_category_facet_filters_in_order() {
        let catalog = catalog();
        let japanese = CategoryFacet::category("japanese");
        assert_eq!(ids(search_recipes(&catalog, "", &japanese)), vec![1, 4]);
        assert_eq!(ids(search_recipes(&catalog, "サーモン", &japanese)), vec![4]);
        assert!(ids(search_recipes(&catalog, "pasta", &japanese)).is_empty());
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let catalog = catalog();
        assert_eq!(search_recipes(&catalog, "カレー", &CategoryFacet::All).count(), 0);
    }

    #[test]
    fn test_results_are_lazy() {
        let catalog = catalog();
        let mut results = search_recipes(&catalog, "みりん", &CategoryFacet::All);
        assert_eq!(results.next().map(|r| r.id), Some(1));
        assert_eq!(results.next().map(|r| r.id), Some(4));
        assert_eq!(results.next(), None);
    }

    #[test]
    fn test_facet_parsing() {
        assert_eq!("all".parse::<CategoryFacet>().unwrap(), CategoryFacet::All);
        assert_eq!(
            " healthy ".parse::<CategoryFacet>().unwrap(),
            CategoryFacet::category("healthy")
        );
        assert_eq!(
            "".parse::<CategoryFacet>().unwrap_err(),
            SearchError::InvalidFacet(String::new())
        );
        assert_eq!(CategoryFacet::category("quick").to_string(), "quick");
    }
}
