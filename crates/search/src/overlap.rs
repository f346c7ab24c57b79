//! Ranking recipes by how many stocked items they use.

use crate::text::{contains_normalized, normalize};
use kitchonomy_core::{Recipe, StockItem};
use serde::Serialize;

/// A recipe paired with its ingredient overlap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecipe<'a> {
    /// The scored recipe
    pub recipe: &'a Recipe,
    /// Number of distinct stock names found in the ingredients
    pub overlap: usize,
    /// The stock names that matched, normalized, in stock order
    pub matched_stock: Vec<String>,
}

/// Distinct, non-empty normalized stock names in stock order.
fn stock_names(stock: &[StockItem]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(stock.len());
    for item in stock {
        let name = normalize(&item.name);
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

fn score<'a>(recipe: &'a Recipe, names: &[String]) -> ScoredRecipe<'a> {
    let matched_stock: Vec<String> = names
        .iter()
        .filter(|name| {
            recipe
                .ingredients
                .iter()
                .any(|ingredient| contains_normalized(ingredient, name))
        })
        .cloned()
        .collect();

    ScoredRecipe {
        recipe,
        overlap: matched_stock.len(),
        matched_stock,
    }
}

/// Score every recipe against `stock`, highest overlap first.
///
/// Recipes with equal overlap keep their catalog order, and recipes with no
/// overlap are kept at the end.
pub fn rank_by_overlap<'a>(stock: &[StockItem], catalog: &'a [Recipe]) -> Vec<ScoredRecipe<'a>> {
    let names = stock_names(stock);
    let mut scored: Vec<ScoredRecipe<'a>> = catalog.iter().map(|recipe| score(recipe, &names)).collect();
    scored.sort_by(|a, b| b.overlap.cmp(&a.overlap));

    tracing::debug!(
        stock_names = names.len(),
        recipes = scored.len(),
        best = scored.first().map(|s| s.overlap).unwrap_or(0),
        "ranked recipes by ingredient overlap"
    );
    scored
}

/// Recipes ordered by ingredient overlap with `stock`, descending.
pub fn suggest_by_ingredient_overlap<'a>(stock: &[StockItem], catalog: &'a [Recipe]) -> Vec<&'a Recipe> {
    rank_by_overlap(stock, catalog)
        .into_iter()
        .map(|scored| scored.recipe)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitchonomy_core::{Difficulty, Location, QuantityUnit};

    fn recipe(id: u64, ingredients: &[&str]) -> Recipe {
        Recipe {
            id,
            name: format!("recipe {id}"),
            category: "japanese".to_string(),
            difficulty: Difficulty::Easy,
            cook_time_minutes: 20,
            servings: 2,
            rating: 4.0,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn stock(names: &[&str]) -> Vec<StockItem> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                StockItem::new(i as u64 + 1, *name, "食材", Location::Fridge, 60.0, QuantityUnit::Percentage)
            })
            .collect()
    }

    fn ids(recipes: &[&Recipe]) -> Vec<u64> {
        recipes.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_equal_overlap_keeps_catalog_order() {
        let catalog = vec![
            recipe(1, &["卵", "砂糖"]),
            recipe(2, &["牛乳", "卵"]),
            recipe(3, &["パン", "牛乳"]),
        ];
        let suggested = suggest_by_ingredient_overlap(&stock(&["牛乳", "玉ねぎ"]), &catalog);
        assert_eq!(ids(&suggested), vec![2, 3, 1]);
    }

    #[test]
    fn test_higher_overlap_first() {
        let catalog = vec![
            recipe(1, &["牛乳"]),
            recipe(2, &["玉ねぎ", "牛乳", "バター"]),
            recipe(3, &["にんにく"]),
        ];
        let ranked = rank_by_overlap(&stock(&["牛乳", "玉ねぎ", "バター"]), &catalog);
        let got: Vec<(u64, usize)> = ranked.iter().map(|s| (s.recipe.id, s.overlap)).collect();
        assert_eq!(got, vec![(2, 3), (1, 1), (3, 0)]);
        assert_eq!(ranked[0].matched_stock, vec!["牛乳", "玉ねぎ", "バター"]);
    }

    #[test]
    fn test_stock_name_matches_ingredient_substring() {
        let catalog = vec![recipe(1, &["トマト缶", "Olive Oil"])];
        let ranked = rank_by_overlap(&stock(&["トマト", "olive"]), &catalog);
        assert_eq!(ranked[0].overlap, 2);
    }

    #[test]
    fn test_duplicate_and_blank_stock_names_count_once() {
        let catalog = vec![recipe(1, &["牛乳", "卵"])];
        let ranked = rank_by_overlap(&stock(&["牛乳", " 牛乳 ", "", "  "]), &catalog);
        assert_eq!(ranked[0].overlap, 1);
    }

    #[test]
    fn test_empty_inputs() {
        let catalog = vec![recipe(1, &["卵"]), recipe(2, &["牛乳"])];
        assert_eq!(ids(&suggest_by_ingredient_overlap(&[], &catalog)), vec![1, 2]);
        assert!(suggest_by_ingredient_overlap(&stock(&["牛乳"]), &[]).is_empty());
    }
}
