pub mod product;
pub mod pricing;

pub use product::{base_prices, coffee_catalog, BasePrices, COFFEE_CATEGORY, COFFEE_CATEGORY_SLUG};
pub use pricing::{PriceSynthesizer, PricingError, PricingPolicy};
