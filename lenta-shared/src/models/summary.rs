use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{price::PriceRecord, product::Product, store::Store};

pub const PARSER_VERSION: &str = "1.0";
pub const DATA_SOURCE: &str = "Lenta.com API + generated coffee data";

/// Counts written to `parsing_stats.json` at the end of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub parsing_info: ParsingInfo,
    pub statistics: Statistics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsingInfo {
    pub timestamp: DateTime<Utc>,
    pub parser_version: String,
    pub data_source: String,
    pub total_stores: usize,
    pub total_products: usize,
    pub total_price_records: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub stores_count: usize,
    pub cities_count: usize,
    pub sku_count: usize,
    pub price_records_count: usize,
    pub brands_count: usize,
}

impl RunSummary {
    pub fn collect(
        stores: &[Store],
        products: &[Product],
        prices: &[PriceRecord],
        timestamp: DateTime<Utc>,
    ) -> Self {
        let cities: HashSet<&str> = stores.iter().map(|s| s.city.as_str()).collect();
        let brands: HashSet<&str> = products.iter().map(|p| p.brand.as_str()).collect();

        Self {
            parsing_info: ParsingInfo {
                timestamp,
                parser_version: PARSER_VERSION.to_string(),
                data_source: DATA_SOURCE.to_string(),
                total_stores: stores.len(),
                total_products: products.len(),
                total_price_records: prices.len(),
            },
            statistics: Statistics {
                stores_count: stores.len(),
                cities_count: cities.len(),
                sku_count: products.len(),
                price_records_count: prices.len(),
                brands_count: brands.len(),
            },
        }
    }
}
