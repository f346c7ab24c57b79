//! Freshness and quantity risk tiers for stock items.
//!
//! Classification is a pure function of the item and a reference date that
//! the caller supplies; nothing here reads the clock.

use crate::error::{Error, Result};
use crate::model::StockItem;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Quantity at or below which an item is critical.
pub const CRITICAL_QUANTITY: f64 = 20.0;
/// Quantity at or below which an item is low.
pub const LOW_QUANTITY: f64 = 50.0;
/// Days before expiry (inclusive) that count as expiring soon.
pub const EXPIRING_SOON_DAYS: i64 = 3;

/// Remaining-stock risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuantityTier {
    /// At or below [`CRITICAL_QUANTITY`]
    Critical,
    /// At or below [`LOW_QUANTITY`]
    Low,
    /// Above [`LOW_QUANTITY`]
    Ok,
}

impl QuantityTier {
    /// Tier for a raw quantity. The thresholds are the same for every unit.
    pub fn for_quantity(quantity: f64) -> Self {
        if quantity <= CRITICAL_QUANTITY {
            QuantityTier::Critical
        } else if quantity <= LOW_QUANTITY {
            QuantityTier::Low
        } else {
            QuantityTier::Ok
        }
    }

    /// True for tiers that belong on a restock list.
    pub fn needs_restock(&self) -> bool {
        matches!(self, QuantityTier::Critical | QuantityTier::Low)
    }

    /// Serialized name of the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityTier::Critical => "critical",
            QuantityTier::Low => "low",
            QuantityTier::Ok => "ok",
        }
    }
}

/// Remaining-shelf-life risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpiryTier {
    /// Expiry date is before today
    Expired,
    /// Expires within [`EXPIRING_SOON_DAYS`]
    ExpiringSoon,
    /// Expires later than that
    Fresh,
    /// No expiry date recorded
    None,
}

impl ExpiryTier {
    /// Tier for a whole-day distance to the expiry date.
    pub fn for_days_left(days: i64) -> Self {
        if days < 0 {
            ExpiryTier::Expired
        } else if days <= EXPIRING_SOON_DAYS {
            ExpiryTier::ExpiringSoon
        } else {
            ExpiryTier::Fresh
        }
    }

    /// True for expired or expiring-soon items.
    pub fn needs_attention(&self) -> bool {
        matches!(self, ExpiryTier::Expired | ExpiryTier::ExpiringSoon)
    }

    /// Serialized name of the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryTier::Expired => "expired",
            ExpiryTier::ExpiringSoon => "expiringSoon",
            ExpiryTier::Fresh => "fresh",
            ExpiryTier::None => "none",
        }
    }
}

/// Both tiers of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    /// Remaining-stock tier
    pub quantity_tier: QuantityTier,
    /// Shelf-life tier
    pub expiry_tier: ExpiryTier,
}

/// Whole days from `today` until `expiry`, negative once it has passed.
///
/// Both values are calendar dates, so the difference is already integral and
/// equals the ceiling of the elapsed fraction of days.
pub fn days_until(expiry: NaiveDate, today: NaiveDate) -> i64 {
    expiry.signed_duration_since(today).num_days()
}

/// Quantity tier of a stock item, refusing malformed quantities.
pub fn quantity_tier(item: &StockItem) -> Result<QuantityTier> {
    if !item.quantity.is_finite() || item.quantity < 0.0 {
        tracing::warn!(id = item.id, name = %item.name, quantity = item.quantity, "refusing to classify stock item");
        return Err(Error::invalid_quantity(&item.name, item.quantity)
            .with_context(format!("While classifying stock item #{}", item.id)));
    }
    Ok(QuantityTier::for_quantity(item.quantity))
}

/// Classify a stock item against `today`.
///
/// Refuses items with a negative or non-finite quantity instead of falling
/// back to a tier.
pub fn classify(item: &StockItem, today: NaiveDate) -> Result<Classification> {
    let quantity_tier = quantity_tier(item)?;
    let expiry_tier = match item.expiry_date {
        Some(expiry) => ExpiryTier::for_days_left(days_until(expiry, today)),
        None => ExpiryTier::None,
    };

    Ok(Classification {
        quantity_tier,
        expiry_tier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Location, QuantityUnit};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(quantity: f64) -> StockItem {
        StockItem::new(1, "牛乳", "乳製品", Location::Fridge, quantity, QuantityUnit::Percentage)
    }

    #[test]
    fn test_quantity_boundaries() {
        let today = date(2024, 12, 15);
        let tier = |q: f64| classify(&item(q), today).unwrap().quantity_tier;

        assert_eq!(tier(0.0), QuantityTier::Critical);
        assert_eq!(tier(20.0), QuantityTier::Critical);
        assert_eq!(tier(21.0), QuantityTier::Low);
        assert_eq!(tier(50.0), QuantityTier::Low);
        assert_eq!(tier(51.0), QuantityTier::Ok);
        assert_eq!(tier(20.5), QuantityTier::Low);
    }

    #[test]
    fn test_expiry_boundaries() {
        let today = date(2024, 12, 15);
        let tier = |expiry: NaiveDate| {
            classify(&item(80.0).with_expiry(expiry), today).unwrap().expiry_tier
        };

        assert_eq!(tier(date(2024, 12, 14)), ExpiryTier::Expired);
        assert_eq!(tier(date(2024, 12, 15)), ExpiryTier::ExpiringSoon);
        assert_eq!(tier(date(2024, 12, 18)), ExpiryTier::ExpiringSoon);
        assert_eq!(tier(date(2024, 12, 19)), ExpiryTier::Fresh);
    }

    #[test]
    fn test_no_expiry_date() {
        let c = classify(&item(80.0), date(2024, 12, 15)).unwrap();
        assert_eq!(c.expiry_tier, ExpiryTier::None);
    }

    #[test]
    fn test_days_until_crosses_year() {
        assert_eq!(days_until(date(2025, 1, 2), date(2024, 12, 30)), 3);
        assert_eq!(days_until(date(2024, 12, 30), date(2025, 1, 2)), -3);
    }

    #[test]
    fn test_invalid_quantity_is_refused() {
        let today = date(2024, 12, 15);
        assert!(classify(&item(-1.0), today).unwrap_err().is_invalid_input());
        assert!(classify(&item(f64::NAN), today).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_tier_wire_names() {
        assert_eq!(
            serde_json::to_string(&ExpiryTier::ExpiringSoon).unwrap(),
            "\"expiringSoon\""
        );
        assert_eq!(ExpiryTier::ExpiringSoon.as_str(), "expiringSoon");
        assert_eq!(serde_json::to_string(&QuantityTier::Ok).unwrap(), "\"ok\"");
    }
}
