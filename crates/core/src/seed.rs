//! Initial store contents.
//!
//! Seed files are parsed into raw records first (dates still as text) and
//! then converted into validated [`SeedData`]. A bad record is refused with
//! an error naming it; nothing is coerced.

use crate::error::{Error, ErrorCode, Result};
use crate::meal_plan::MealPlan;
use crate::model::{
    Difficulty, Location, MealSlot, QuantityUnit, Recipe, ShoppingItem, StockId, StockItem,
    TimeOfDay,
};
use crate::validation::{validate_recipe, validate_shopping_item, validate_stock_item};
use crate::ResultExt;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Date format used in seed files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A stock record as written in a seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct StockRecord {
    /// See [`StockItem::id`]
    pub id: StockId,
    /// See [`StockItem::name`]
    pub name: String,
    /// See [`StockItem::category`]
    pub category: String,
    /// See [`StockItem::location`]
    pub location: Location,
    /// See [`StockItem::quantity`]
    pub quantity: f64,
    /// See [`StockItem::quantity_unit`]
    pub quantity_unit: QuantityUnit,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub expiry_date: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub purchase_date: Option<String>,
}

fn parse_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    value
        .map(|raw| {
            NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
                .map_err(|e| Error::invalid_date(field, raw).with_source(e))
        })
        .transpose()
}

impl TryFrom<StockRecord> for StockItem {
    type Error = Error;

    fn try_from(record: StockRecord) -> Result<Self> {
        let context = format!("Stock record #{} ('{}')", record.id, record.name);
        let expiry_date = parse_date("expiry_date", record.expiry_date.as_deref()).context(&context)?;
        let purchase_date =
            parse_date("purchase_date", record.purchase_date.as_deref()).context(&context)?;

        let item = StockItem {
            id: record.id,
            name: record.name,
            category: record.category,
            location: record.location,
            quantity: record.quantity,
            quantity_unit: record.quantity_unit,
            expiry_date,
            purchase_date,
        };
        let result = validate_stock_item(&item);
        for warning in result.warnings() {
            tracing::warn!(id = item.id, %warning, "suspicious stock record");
        }
        result.to_result().context(context)?;
        Ok(item)
    }
}

/// Seed file contents before validation. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedRecords {
    /// Inventory records
    #[serde(default)]
    pub stock: Vec<StockRecord>,
    /// Shopping list, in list order
    #[serde(default)]
    pub shopping: Vec<ShoppingItem>,
    /// Recipe catalog, in catalog order
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// Planned meals, at most one per time of day
    #[serde(default)]
    pub meals: Vec<MealSlot>,
}

impl SeedRecords {
    /// Parse a JSON seed document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Validated initial contents of a [`CatalogStore`](crate::CatalogStore).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeedData {
    /// Inventory
    pub stock: Vec<StockItem>,
    /// Shopping list
    pub shopping: Vec<ShoppingItem>,
    /// Recipe catalog
    pub recipes: Vec<Recipe>,
    /// Today's meal plan
    pub meals: MealPlan,
}

fn ensure_unique_ids(kind: &str, ids: impl Iterator<Item = u64>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::duplicate_id(kind, id));
        }
    }
    Ok(())
}

impl TryFrom<SeedRecords> for SeedData {
    type Error = Error;

    fn try_from(records: SeedRecords) -> Result<Self> {
        ensure_unique_ids("stock", records.stock.iter().map(|r| r.id))?;
        ensure_unique_ids("shopping", records.shopping.iter().map(|r| r.id))?;
        ensure_unique_ids("recipe", records.recipes.iter().map(|r| r.id))?;

        let stock = records
            .stock
            .into_iter()
            .map(StockItem::try_from)
            .collect::<Result<Vec<_>>>()?;

        for item in &records.shopping {
            validate_shopping_item(item)
                .to_result()
                .context(format!("Shopping record #{} ('{}')", item.id, item.name))?;
        }
        for recipe in &records.recipes {
            validate_recipe(recipe)
                .to_result()
                .context(format!("Recipe #{} ('{}')", recipe.id, recipe.name))?;
        }

        Ok(SeedData {
            stock,
            shopping: records.shopping,
            recipes: records.recipes,
            meals: MealPlan::from(records.meals),
        })
    }
}

impl SeedData {
    /// Parse and validate a JSON seed document.
    pub fn from_json(json: &str) -> Result<Self> {
        SeedRecords::from_json(json)?.try_into()
    }

    /// Read, parse and validate a JSON seed file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::file_not_found(path)
            } else {
                Error::from(e)
            }
        })?;
        let seed = Self::from_json(&content)
            .map_err(|e| match e.code {
                ErrorCode::SeedParseError => e.with_suggestion("Check the seed file against the documented layout"),
                _ => e,
            })
            .context(format!("Loading seed file {}", path.display()))?;
        tracing::info!(path = %path.display(), stock = seed.stock.len(), recipes = seed.recipes.len(), "seed loaded");
        Ok(seed)
    }

    /// The household used when no seed file is given.
    pub fn builtin() -> Self {
        Self {
            stock: builtin_stock(),
            shopping: builtin_shopping(),
            recipes: builtin_recipes(),
            meals: builtin_meals(),
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Literal dates below are all valid.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn builtin_stock() -> Vec<StockItem> {
    use Location::{Freezer, Fridge, Pantry};
    use QuantityUnit::{Count, Percentage, Weight};

    let rows: [(&str, &str, Location, f64, QuantityUnit, NaiveDate); 13] = [
        ("牛乳", "乳製品", Fridge, 20.0, Percentage, date(2024, 12, 18)),
        ("卵", "卵・乳製品", Fridge, 8.0, Count, date(2024, 12, 20)),
        ("トマト", "野菜", Fridge, 5.0, Count, date(2024, 12, 16)),
        ("レタス", "野菜", Fridge, 2.0, Count, date(2024, 12, 17)),
        ("チーズ", "乳製品", Fridge, 80.0, Percentage, date(2024, 12, 25)),
        ("冷凍ブロッコリー", "野菜", Freezer, 10.0, Percentage, date(2025, 6, 15)),
        ("冷凍エビ", "魚介類", Freezer, 60.0, Percentage, date(2025, 3, 20)),
        ("アイスクリーム", "デザート", Freezer, 40.0, Percentage, date(2025, 8, 10)),
        ("冷凍餃子", "冷凍食品", Freezer, 12.0, Count, date(2025, 1, 30)),
        ("米", "穀物", Pantry, 3.0, Weight, date(2025, 3, 15)),
        ("玉ねぎ", "野菜", Pantry, 15.0, Percentage, date(2024, 12, 30)),
        ("パスタ", "穀物", Pantry, 2.0, Count, date(2025, 6, 20)),
        ("調味料セット", "調味料", Pantry, 90.0, Percentage, date(2025, 12, 31)),
    ];

    rows.into_iter()
        .zip(1..)
        .map(|((name, category, location, quantity, unit, expiry), id)| {
            StockItem::new(id, name, category, location, quantity, unit).with_expiry(expiry)
        })
        .collect()
}

fn builtin_shopping() -> Vec<ShoppingItem> {
    let rows = [
        ("牛乳", "乳製品", true),
        ("玉ねぎ", "野菜", true),
        ("鶏胸肉", "肉類", false),
        ("パン", "穀物", false),
        ("バナナ", "果物", false),
        ("ヨーグルト", "乳製品", false),
        ("トマト", "野菜", false),
        ("お米", "穀物", false),
    ];

    rows.into_iter()
        .zip(1..)
        .map(|((name, category, urgent), id)| ShoppingItem {
            id,
            name: name.to_string(),
            category: category.to_string(),
            urgent,
            checked: false,
        })
        .collect()
}

fn builtin_recipes() -> Vec<Recipe> {
    use Difficulty::{Easy, Medium};

    let rows: [(&str, &str, Difficulty, u32, u32, f64, [&str; 4]); 9] = [
        ("鶏の照り焼き", "japanese", Easy, 25, 2, 4.8, ["鶏もも肉", "醤油", "みりん", "砂糖"]),
        ("トマトパスタ", "western", Easy, 15, 2, 4.6, ["パスタ", "トマト缶", "にんにく", "オリーブオイル"]),
        ("野菜炒め", "chinese", Easy, 10, 2, 4.4, ["キャベツ", "人参", "ピーマン", "豚肉"]),
        ("サーモンのムニエル", "western", Medium, 20, 2, 4.7, ["サーモン", "バター", "レモン", "小麦粉"]),
        ("和風オムレツ", "japanese", Easy, 15, 2, 4.8, ["卵", "醤油", "みりん", "ネギ"]),
        ("チキンサラダ", "western", Easy, 20, 2, 4.6, ["鶏胸肉", "レタス", "トマト", "ドレッシング"]),
        ("サーモンテリヤキ", "japanese", Medium, 25, 2, 4.9, ["サーモン", "醤油", "みりん", "砂糖"]),
        ("パスタアラビアータ", "western", Easy, 18, 2, 4.5, ["パスタ", "トマト缶", "にんにく", "唐辛子"]),
        ("フルーツヨーグルト", "healthy", Easy, 5, 1, 4.4, ["ヨーグルト", "バナナ", "ベリー", "ハチミツ"]),
    ];

    rows.into_iter()
        .zip(1..)
        .map(
            |((name, category, difficulty, minutes, servings, rating, ingredients), id)| Recipe {
                id,
                name: name.to_string(),
                category: category.to_string(),
                difficulty,
                cook_time_minutes: minutes,
                servings,
                rating,
                ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            },
        )
        .collect()
}

fn builtin_meals() -> MealPlan {
    MealPlan::from(vec![
        MealSlot {
            time_of_day: TimeOfDay::Breakfast,
            assigned_recipe_name: "和風オムレツ".to_string(),
            ready: true,
        },
        MealSlot {
            time_of_day: TimeOfDay::Lunch,
            assigned_recipe_name: "チキンサラダ".to_string(),
            ready: false,
        },
        MealSlot {
            time_of_day: TimeOfDay::Dinner,
            assigned_recipe_name: "サーモンテリヤキ".to_string(),
            ready: false,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_seed_is_valid() {
        let seed = SeedData::builtin();
        assert_eq!(seed.stock.len(), 13);
        assert_eq!(seed.shopping.len(), 8);
        assert_eq!(seed.recipes.len(), 9);
        assert_eq!(seed.meals.planned_count(), 3);

        for item in &seed.stock {
            assert!(validate_stock_item(item).is_valid(), "{}", item.name);
        }
        for recipe in &seed.recipes {
            assert!(validate_recipe(recipe).is_valid(), "{}", recipe.name);
        }
    }

    #[test]
    fn test_from_json_parses_dates() {
        let seed = SeedData::from_json(
            r#"{
                "stock": [{
                    "id": 1, "name": "牛乳", "category": "乳製品", "location": "fridge",
                    "quantity": 20, "quantity_unit": "percentage",
                    "expiry_date": "2024-12-18", "purchase_date": "2024-12-10"
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(seed.stock[0].expiry_date, NaiveDate::from_ymd_opt(2024, 12, 18));
        assert_eq!(seed.stock[0].purchase_date, NaiveDate::from_ymd_opt(2024, 12, 10));
        assert!(seed.shopping.is_empty());
        assert_eq!(seed.meals.planned_count(), 0);
    }

    #[test]
    fn test_unparsable_expiry_is_invalid_input() {
        let err = SeedData::from_json(
            r#"{"stock": [{
                "id": 7, "name": "卵", "category": "卵・乳製品", "location": "fridge",
                "quantity": 8, "quantity_unit": "count", "expiry_date": "12/20/2024"
            }]}"#,
        )
        .unwrap_err();

        assert!(err.is_invalid_input());
        assert!(err.context.as_deref().unwrap_or_default().contains("#7"));
    }

    #[test]
    fn test_negative_quantity_is_invalid_input() {
        let err = SeedData::from_json(
            r#"{"stock": [{
                "id": 1, "name": "米", "category": "穀物", "location": "pantry",
                "quantity": -3, "quantity_unit": "weight"
            }]}"#,
        )
        .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_duplicate_ids_refused() {
        let err = SeedData::from_json(
            r#"{"shopping": [
                {"id": 1, "name": "牛乳", "category": "乳製品"},
                {"id": 1, "name": "パン", "category": "穀物"}
            ]}"#,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateId);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = SeedData::from_json("{ not json").unwrap_err();
        assert_eq!(err.code, ErrorCode::SeedParseError);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SeedData::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.code, ErrorCode::FileNotFound);
    }

    #[test]
    fn test_seed_data_serializes_back_to_records() {
        let json = serde_json::to_string(&SeedData::builtin()).unwrap();
        let round = SeedData::from_json(&json).unwrap();
        assert_eq!(round, SeedData::builtin());
    }
}
