//! Display-ready summaries derived from a store snapshot.
//!
//! Nothing here mutates its input. Orderings are stable: entries that
//! compare equal keep the order they had in the snapshot.

use crate::classify::{classify, days_until, quantity_tier, ExpiryTier, QuantityTier};
use crate::error::Result;
use crate::model::{Location, ShoppingItem, StockItem};
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

/// How far the shopping list has been ticked off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShoppingProgress {
    /// Entries marked as bought
    pub checked_count: usize,
    /// Every entry on the list
    pub total_count: usize,
    /// 0-100; 0 for an empty list.
    pub percentage: f64,
}

impl ShoppingProgress {
    /// True when every item is checked (and there is at least one).
    pub fn is_complete(&self) -> bool {
        self.total_count > 0 && self.checked_count == self.total_count
    }
}

/// Progress of a shopping list.
pub fn shopping_progress(list: &[ShoppingItem]) -> ShoppingProgress {
    let total_count = list.len();
    let checked_count = list.iter().filter(|item| item.checked).count();
    let percentage = if total_count == 0 {
        0.0
    } else {
        checked_count as f64 / total_count as f64 * 100.0
    };

    ShoppingProgress {
        checked_count,
        total_count,
        percentage,
    }
}

/// Items of one category, in list order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup<'a> {
    /// Category shared by the items
    pub category: &'a str,
    /// Items in list order
    pub items: Vec<&'a ShoppingItem>,
}

/// Group a shopping list by category.
///
/// Groups appear in order of each category's first item; empty categories
/// never appear.
pub fn group_by_category(list: &[ShoppingItem]) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
    for item in list {
        match groups.iter_mut().find(|group| group.category == item.category) {
            Some(group) => group.items.push(item),
            None => groups.push(CategoryGroup {
                category: &item.category,
                items: vec![item],
            }),
        }
    }
    groups
}

/// Unchecked entries flagged urgent, in list order.
pub fn urgent_pending(list: &[ShoppingItem]) -> Vec<&ShoppingItem> {
    list.iter().filter(|item| item.urgent && !item.checked).collect()
}

/// A stock item that is running out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowStockEntry<'a> {
    /// The stock item
    pub item: &'a StockItem,
    /// Critical or low
    pub quantity_tier: QuantityTier,
    /// Where the item is kept
    pub location: Location,
}

/// Items whose quantity tier is critical or low, emptiest first.
///
/// Fails on the first item with a malformed quantity.
pub fn low_stock_summary(stock: &[StockItem]) -> Result<Vec<LowStockEntry<'_>>> {
    let mut entries = Vec::new();
    for item in stock {
        let tier = quantity_tier(item)?;
        if tier.needs_restock() {
            entries.push(LowStockEntry {
                item,
                quantity_tier: tier,
                location: item.location,
            });
        }
    }
    // Quantities are finite here. 0.0 and -0.0 compare equal, so the stable
    // sort keeps catalog order between them.
    entries.sort_by(|a, b| {
        a.item
            .quantity
            .partial_cmp(&b.item.quantity)
            .unwrap_or(Ordering::Equal)
    });
    Ok(entries)
}

/// A stock item that has expired or is about to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpiryAlert<'a> {
    /// The stock item
    pub item: &'a StockItem,
    /// Expired or expiring soon
    pub expiry_tier: ExpiryTier,
    /// Negative once the date has passed.
    pub days_left: i64,
    /// Where the item is kept
    pub location: Location,
}

/// Expired and expiring-soon items, most overdue first.
pub fn expiry_alerts(stock: &[StockItem], today: NaiveDate) -> Result<Vec<ExpiryAlert<'_>>> {
    let mut alerts = Vec::new();
    for item in stock {
        let classification = classify(item, today)?;
        if let (true, Some(expiry)) = (classification.expiry_tier.needs_attention(), item.expiry_date) {
            alerts.push(ExpiryAlert {
                item,
                expiry_tier: classification.expiry_tier,
                days_left: days_until(expiry, today),
                location: item.location,
            });
        }
    }
    alerts.sort_by_key(|alert| alert.days_left);
    Ok(alerts)
}

/// Item counts for one storage location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocationSummary {
    /// The location
    pub location: Location,
    /// Items kept there
    pub item_count: usize,
    /// Of those, how many are critical
    pub critical_count: usize,
    /// Of those, how many are low
    pub low_count: usize,
}

/// Per-location counts, fridge, freezer then pantry. Locations without
/// items are still listed.
pub fn location_overview(stock: &[StockItem]) -> Result<Vec<LocationSummary>> {
    let mut overview: Vec<LocationSummary> = Location::ALL
        .into_iter()
        .map(|location| LocationSummary {
            location,
            item_count: 0,
            critical_count: 0,
            low_count: 0,
        })
        .collect();

    for item in stock {
        let tier = quantity_tier(item)?;
        if let Some(summary) = overview.iter_mut().find(|s| s.location == item.location) {
            summary.item_count += 1;
            match tier {
                QuantityTier::Critical => summary.critical_count += 1,
                QuantityTier::Low => summary.low_count += 1,
                QuantityTier::Ok => {}
            }
        }
    }
    Ok(overview)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuantityUnit;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn list(checked: &[u64]) -> Vec<ShoppingItem> {
        let rows = [
            (1, "牛乳", "乳製品", true),
            (2, "玉ねぎ", "野菜", true),
            (3, "鶏胸肉", "肉類", false),
            (4, "パン", "穀物", false),
            (5, "バナナ", "果物", false),
            (6, "ヨーグルト", "乳製品", false),
            (7, "トマト", "野菜", false),
            (8, "お米", "穀物", false),
        ];
        rows.iter()
            .map(|&(id, name, category, urgent)| ShoppingItem {
                id,
                name: name.to_string(),
                category: category.to_string(),
                urgent,
                checked: checked.contains(&id),
            })
            .collect()
    }

    fn stock(id: u64, name: &str, location: Location, quantity: f64) -> StockItem {
        StockItem::new(id, name, "野菜", location, quantity, QuantityUnit::Percentage)
    }

    #[test]
    fn test_shopping_progress_three_of_eight() {
        let progress = shopping_progress(&list(&[1, 4, 7]));
        assert_eq!(progress.checked_count, 3);
        assert_eq!(progress.total_count, 8);
        assert_eq!(progress.percentage, 37.5);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_shopping_progress_empty_list() {
        let progress = shopping_progress(&[]);
        assert_eq!(progress, ShoppingProgress { checked_count: 0, total_count: 0, percentage: 0.0 });
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_group_by_category_keeps_first_seen_order() {
        let items = list(&[]);
        let groups = group_by_category(&items);

        let categories: Vec<&str> = groups.iter().map(|g| g.category).collect();
        assert_eq!(categories, vec!["乳製品", "野菜", "肉類", "穀物", "果物"]);

        let dairy: Vec<&str> = groups[0].items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(dairy, vec!["牛乳", "ヨーグルト"]);
        assert!(groups.iter().all(|g| !g.items.is_empty()));
    }

    #[test]
    fn test_group_by_category_empty_list() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn test_urgent_pending_skips_checked() {
        let items = list(&[1]);
        let urgent: Vec<u64> = urgent_pending(&items).iter().map(|i| i.id).collect();
        assert_eq!(urgent, vec![2]);
    }

    #[test]
    fn test_low_stock_summary_orders_by_quantity_stably() {
        let items = vec![
            stock(1, "牛乳", Location::Fridge, 20.0),
            stock(2, "チーズ", Location::Fridge, 80.0),
            stock(3, "冷凍ブロッコリー", Location::Freezer, 10.0),
            stock(4, "アイスクリーム", Location::Freezer, 40.0),
            stock(5, "玉ねぎ", Location::Pantry, 20.0),
        ];
        let summary = low_stock_summary(&items).unwrap();
        let ids: Vec<u64> = summary.iter().map(|e| e.item.id).collect();
        assert_eq!(ids, vec![3, 1, 5, 4]);
        assert_eq!(summary[0].quantity_tier, QuantityTier::Critical);
        assert_eq!(summary[0].location, Location::Freezer);
        assert_eq!(summary[3].quantity_tier, QuantityTier::Low);
    }

    #[test]
    fn test_low_stock_summary_signed_zero_keeps_catalog_order() {
        let items = vec![
            stock(1, "牛乳", Location::Fridge, 0.0),
            stock(2, "卵", Location::Fridge, -0.0),
            stock(3, "バター", Location::Fridge, 10.0),
        ];
        let summary = low_stock_summary(&items).unwrap();
        let ids: Vec<u64> = summary.iter().map(|e| e.item.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(summary.iter().all(|e| e.quantity_tier == QuantityTier::Critical));
    }

    #[test]
    fn test_low_stock_summary_rejects_bad_record() {
        let items = vec![stock(1, "牛乳", Location::Fridge, -5.0)];
        assert!(low_stock_summary(&items).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_expiry_alerts_most_overdue_first() {
        let today = date(2024, 12, 15);
        let items = vec![
            stock(1, "トマト", Location::Fridge, 50.0).with_expiry(date(2024, 12, 16)),
            stock(2, "レタス", Location::Fridge, 50.0).with_expiry(date(2024, 12, 14)),
            stock(3, "チーズ", Location::Fridge, 80.0).with_expiry(date(2024, 12, 25)),
            stock(4, "米", Location::Pantry, 80.0),
            stock(5, "牛乳", Location::Fridge, 20.0).with_expiry(date(2024, 12, 16)),
        ];
        let alerts = expiry_alerts(&items, today).unwrap();
        let got: Vec<(u64, i64)> = alerts.iter().map(|a| (a.item.id, a.days_left)).collect();
        assert_eq!(got, vec![(2, -1), (1, 1), (5, 1)]);
        assert_eq!(alerts[0].expiry_tier, ExpiryTier::Expired);
    }

    #[test]
    fn test_location_overview_lists_every_location() {
        let items = vec![
            stock(1, "牛乳", Location::Fridge, 20.0),
            stock(2, "チーズ", Location::Fridge, 80.0),
            stock(3, "アイスクリーム", Location::Freezer, 40.0),
        ];
        let overview = location_overview(&items).unwrap();
        assert_eq!(overview.len(), 3);
        assert_eq!(overview[0].item_count, 2);
        assert_eq!(overview[0].critical_count, 1);
        assert_eq!(overview[1].low_count, 1);
        assert_eq!(overview[2].location, Location::Pantry);
        assert_eq!(overview[2].item_count, 0);
    }
}
