use serde::{Deserialize, Serialize};

use super::TabularRow;

/// Catalog entry. The base price lives in a separate lookup keyed by SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub brand: String,
    pub description: String,
    pub category: String,
    pub url: String,
    pub image: String,
}

impl TabularRow for Product {
    const HEADERS: &'static [&'static str] =
        &["sku", "name", "brand", "description", "category", "url", "image"];
}
