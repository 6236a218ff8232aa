use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TabularRow;

/// Synthesized price of one product in one store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub sku: String,
    pub store_id: String,
    /// Current shelf price, two decimals.
    #[serde(rename = "price")]
    pub current_price: f64,
    /// Price before the discount, or `0.0` when the record is not discounted.
    #[serde(rename = "old_price")]
    pub previous_price: f64,
    /// Discount percentage, one decimal, or `0.0`.
    pub discount: f64,
    pub in_stock: bool,
    /// Shared by every record of a run.
    #[serde(rename = "timestamp")]
    pub generated_at: DateTime<Utc>,
}

impl PriceRecord {
    pub fn is_discounted(&self) -> bool {
        self.discount != 0.0
    }
}

impl TabularRow for PriceRecord {
    const HEADERS: &'static [&'static str] = &[
        "sku",
        "store_id",
        "price",
        "old_price",
        "discount",
        "in_stock",
        "timestamp",
    ];
}
