use std::collections::HashMap;

use chrono::{DateTime, Utc};
use lenta_shared::{PriceRecord, Product, Store};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Knobs of the per-store price synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPolicy {
    /// Only the first `store_limit` stores (in source order) get prices.
    pub store_limit: usize,

    /// Used when a SKU has no entry in the base price lookup.
    pub default_base_price: f64,

    /// Store-to-store jitter applied to the base price.
    pub jitter_min: f64,
    pub jitter_max: f64,

    /// Share of records that carry a previous (pre-discount) price.
    pub discount_probability: f64,

    /// Previous price = current price x markup.
    pub markup_min: f64,
    pub markup_max: f64,

    pub in_stock_probability: f64,

    /// Fixed RNG seed; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            store_limit: 50,
            default_base_price: 199.90,
            jitter_min: 0.9,
            jitter_max: 1.1,
            discount_probability: 0.3,
            markup_min: 1.1,
            markup_max: 1.3,
            in_stock_probability: 0.75,
            seed: None,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PricingError {
    #[error("Invalid range for {name}: {min} > {max}")]
    InvalidRange { name: &'static str, min: f64, max: f64 },

    #[error("Probability {name} out of [0, 1]: {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("Markup must be above 1.0, got {0}")]
    InvalidMarkup(f64),

    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("Jitter must stay above 0.0, got minimum {0}")]
    NonPositiveJitter(f64),

    #[error("Default base price must not be negative, got {0}")]
    NegativeBasePrice(f64),
}

impl PricingPolicy {
    pub fn validate(&self) -> Result<(), PricingError> {
        for (name, value) in [
            ("default_base_price", self.default_base_price),
            ("jitter_min", self.jitter_min),
            ("jitter_max", self.jitter_max),
            ("markup_min", self.markup_min),
            ("markup_max", self.markup_max),
            ("discount_probability", self.discount_probability),
            ("in_stock_probability", self.in_stock_probability),
        ] {
            if !value.is_finite() {
                return Err(PricingError::NonFinite { name, value });
            }
        }

        for (name, min, max) in [
            ("jitter", self.jitter_min, self.jitter_max),
            ("markup", self.markup_min, self.markup_max),
        ] {
            if min > max {
                return Err(PricingError::InvalidRange { name, min, max });
            }
        }

        for (name, value) in [
            ("discount_probability", self.discount_probability),
            ("in_stock_probability", self.in_stock_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PricingError::InvalidProbability { name, value });
            }
        }

        if self.markup_min <= 1.0 {
            return Err(PricingError::InvalidMarkup(self.markup_min));
        }

        if self.jitter_min <= 0.0 {
            return Err(PricingError::NonPositiveJitter(self.jitter_min));
        }

        if self.default_base_price < 0.0 {
            return Err(PricingError::NegativeBasePrice(self.default_base_price));
        }

        Ok(())
    }
}

/// Builds one price record per (product, store) pair.
pub struct PriceSynthesizer {
    policy: PricingPolicy,
}

impl PriceSynthesizer {
    pub fn new(policy: PricingPolicy) -> Result<Self, PricingError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// RNG for one run: seeded when the policy carries a seed.
    pub fn rng(&self) -> StdRng {
        match self.policy.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Prices every product in each of the first `store_limit` stores.
    ///
    /// Records come out product-major, stores in source order. Every record
    /// carries `generated_at`.
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        products: &[Product],
        base_prices: &HashMap<String, f64>,
        stores: &[Store],
        rng: &mut R,
        generated_at: DateTime<Utc>,
    ) -> Vec<PriceRecord> {
        let stores = &stores[..stores.len().min(self.policy.store_limit)];
        let mut records = Vec::with_capacity(products.len() * stores.len());

        for product in products {
            let base_price = match base_prices.get(&product.sku) {
                Some(price) => *price,
                None => {
                    debug!(sku = %product.sku, "No base price, using default");
                    self.policy.default_base_price
                }
            };

            for store in stores {
                records.push(self.price_one(product, store, base_price, rng, generated_at));
            }
        }

        info!(
            products = products.len(),
            stores = stores.len(),
            records = records.len(),
            "Synthesized price records"
        );

        records
    }

    fn price_one<R: Rng + ?Sized>(
        &self,
        product: &Product,
        store: &Store,
        base_price: f64,
        rng: &mut R,
        generated_at: DateTime<Utc>,
    ) -> PriceRecord {
        let policy = &self.policy;

        let jitter = rng.gen_range(policy.jitter_min..=policy.jitter_max);
        let current_price = round_to(base_price * jitter, 2);

        let (previous_price, discount) = if rng.gen_bool(policy.discount_probability) {
            let markup = rng.gen_range(policy.markup_min..=policy.markup_max);
            let previous = round_to(current_price * markup, 2);
            // Cent rounding can swallow the markup on near-zero prices.
            if previous > current_price {
                (previous, discount_percent(previous, current_price))
            } else {
                (0.0, 0.0)
            }
        } else {
            (0.0, 0.0)
        };

        PriceRecord {
            sku: product.sku.clone(),
            store_id: store.store_id.clone(),
            current_price,
            previous_price,
            discount,
            in_stock: rng.gen_bool(policy.in_stock_probability),
            generated_at,
        }
    }
}

/// Discount of `current` relative to `previous`, in percent, one decimal.
pub fn discount_percent(previous: f64, current: f64) -> f64 {
    if previous <= 0.0 {
        return 0.0;
    }
    round_to((previous - current) / previous * 100.0, 1)
}

/// Rounds half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{base_prices, coffee_catalog};
    use std::collections::{HashMap, HashSet};

    const EPS: f64 = 1e-9;

    fn stores(n: usize) -> Vec<Store> {
        (0..n)
            .map(|i| Store {
                store_id: format!("store-{}", i),
                city: format!("city-{}", i % 7),
                ..Default::default()
            })
            .collect()
    }

    fn seeded_policy(seed: u64) -> PricingPolicy {
        PricingPolicy {
            seed: Some(seed),
            ..Default::default()
        }
    }

    fn run(policy: PricingPolicy, stores: &[Store]) -> Vec<PriceRecord> {
        let synthesizer = PriceSynthesizer::new(policy).unwrap();
        let mut rng = synthesizer.rng();
        synthesizer.synthesize(&coffee_catalog(), &base_prices(), stores, &mut rng, Utc::now())
    }

    #[test]
    fn test_one_record_per_product_and_store() {
        let stores = stores(80);
        let records = run(seeded_policy(1), &stores);

        // 10 products x first 50 stores
        assert_eq!(records.len(), 500);

        let pairs: HashSet<(&str, &str)> = records
            .iter()
            .map(|r| (r.sku.as_str(), r.store_id.as_str()))
            .collect();
        assert_eq!(pairs.len(), 500);

        let allowed: HashSet<&str> = stores[..50].iter().map(|s| s.store_id.as_str()).collect();
        for product in coffee_catalog() {
            for store_id in &allowed {
                assert!(pairs.contains(&(product.sku.as_str(), *store_id)));
            }
        }
        assert!(records.iter().all(|r| allowed.contains(r.store_id.as_str())));
    }

    #[test]
    fn test_records_follow_catalog_then_store_order() {
        let stores = stores(3);
        let records = run(seeded_policy(2), &stores);

        assert_eq!(records[0].sku, "LT_JACOBS_001");
        assert_eq!(records[0].store_id, "store-0");
        assert_eq!(records[2].store_id, "store-2");
        assert_eq!(records[3].sku, "LT_NESCAFE_001");
    }

    #[test]
    fn test_fewer_stores_than_limit() {
        let records = run(seeded_policy(3), &stores(3));
        assert_eq!(records.len(), 3 * coffee_catalog().len());
    }

    #[test]
    fn test_no_stores_no_records() {
        assert!(run(seeded_policy(4), &[]).is_empty());
    }

    #[test]
    fn test_current_price_within_jitter_bounds() {
        let records = run(seeded_policy(5), &stores(50));
        let prices = base_prices();

        for record in &records {
            let base = prices[&record.sku];
            // Rounding to cents can move the value by at most half a cent.
            assert!(record.current_price >= base * 0.9 - 0.005 - EPS);
            assert!(record.current_price <= base * 1.1 + 0.005 + EPS);
            assert!((round_to(record.current_price, 2) - record.current_price).abs() < EPS);
        }

        let jacobs: Vec<_> = records.iter().filter(|r| r.sku == "LT_JACOBS_001").collect();
        assert_eq!(jacobs.len(), 50);
        for record in jacobs {
            assert!(record.current_price >= 269.91 - EPS, "{}", record.current_price);
            assert!(record.current_price <= 329.89 + EPS, "{}", record.current_price);
        }
    }

    #[test]
    fn test_discount_invariants() {
        let records = run(seeded_policy(6), &stores(50));

        let discounted = records.iter().filter(|r| r.is_discounted()).count();
        // 30% of 500 records; wide band to stay seed-agnostic.
        assert!(discounted > 75 && discounted < 250, "discounted = {}", discounted);

        for record in &records {
            if record.is_discounted() {
                assert!(record.previous_price > record.current_price);
                let expected = round_to(
                    (record.previous_price - record.current_price) / record.previous_price * 100.0,
                    1,
                );
                assert_eq!(record.discount, expected);
            } else {
                assert_eq!(record.previous_price, 0.0);
            }
        }
    }

    #[test]
    fn test_in_stock_share() {
        let records = run(seeded_policy(7), &stores(50));
        let in_stock = records.iter().filter(|r| r.in_stock).count();
        assert!(in_stock > 300 && in_stock < 450, "in_stock = {}", in_stock);
    }

    #[test]
    fn test_single_timestamp_per_run() {
        let synthesizer = PriceSynthesizer::new(seeded_policy(8)).unwrap();
        let generated_at = Utc::now();
        let mut rng = synthesizer.rng();
        let records = synthesizer.synthesize(
            &coffee_catalog(),
            &base_prices(),
            &stores(5),
            &mut rng,
            generated_at,
        );

        assert!(records.iter().all(|r| r.generated_at == generated_at));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let stores = stores(20);
        let synthesizer = PriceSynthesizer::new(seeded_policy(42)).unwrap();
        let generated_at = Utc::now();

        let first = synthesizer.synthesize(
            &coffee_catalog(),
            &base_prices(),
            &stores,
            &mut synthesizer.rng(),
            generated_at,
        );
        let second = synthesizer.synthesize(
            &coffee_catalog(),
            &base_prices(),
            &stores,
            &mut synthesizer.rng(),
            generated_at,
        );

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_base_price_uses_default() {
        let synthesizer = PriceSynthesizer::new(seeded_policy(9)).unwrap();
        let records = synthesizer.synthesize(
            &coffee_catalog()[..1],
            &HashMap::new(),
            &stores(10),
            &mut synthesizer.rng(),
            Utc::now(),
        );

        assert_eq!(records.len(), 10);
        for record in records {
            assert!(record.current_price >= 199.90 * 0.9 - 0.005 - EPS);
            assert!(record.current_price <= 199.90 * 1.1 + 0.005 + EPS);
        }
    }

    #[test]
    fn test_custom_store_limit() {
        let policy = PricingPolicy {
            store_limit: 2,
            ..seeded_policy(10)
        };
        assert_eq!(run(policy, &stores(5)).len(), 20);
    }

    #[test]
    fn test_policy_validation() {
        let inverted = PricingPolicy {
            jitter_min: 1.2,
            jitter_max: 0.8,
            ..Default::default()
        };
        assert!(matches!(
            PriceSynthesizer::new(inverted),
            Err(PricingError::InvalidRange { name: "jitter", .. })
        ));

        let bad_probability = PricingPolicy {
            in_stock_probability: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            bad_probability.validate(),
            Err(PricingError::InvalidProbability { name: "in_stock_probability", .. })
        ));

        let flat_markup = PricingPolicy {
            markup_min: 1.0,
            ..Default::default()
        };
        assert_eq!(flat_markup.validate(), Err(PricingError::InvalidMarkup(1.0)));

        assert!(PricingPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_policy_rejects_unbounded_and_negative_values() {
        let infinite = PricingPolicy {
            jitter_max: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            PriceSynthesizer::new(infinite),
            Err(PricingError::NonFinite { name: "jitter_max", .. })
        ));

        let nan_markup = PricingPolicy {
            markup_max: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan_markup.validate(),
            Err(PricingError::NonFinite { name: "markup_max", .. })
        ));

        let negative_jitter = PricingPolicy {
            jitter_min: -2.0,
            jitter_max: -1.0,
            ..Default::default()
        };
        assert_eq!(negative_jitter.validate(), Err(PricingError::NonPositiveJitter(-2.0)));

        let zero_jitter = PricingPolicy {
            jitter_min: 0.0,
            ..Default::default()
        };
        assert_eq!(zero_jitter.validate(), Err(PricingError::NonPositiveJitter(0.0)));

        let negative_base = PricingPolicy {
            default_base_price: -1.0,
            ..Default::default()
        };
        assert_eq!(negative_base.validate(), Err(PricingError::NegativeBasePrice(-1.0)));
    }

    #[test]
    fn test_near_zero_prices_never_carry_a_flat_discount() {
        let policy = PricingPolicy {
            default_base_price: 0.01,
            discount_probability: 1.0,
            ..seeded_policy(12)
        };
        let synthesizer = PriceSynthesizer::new(policy).unwrap();
        let records = synthesizer.synthesize(
            &coffee_catalog(),
            &HashMap::new(),
            &stores(50),
            &mut synthesizer.rng(),
            Utc::now(),
        );

        assert_eq!(records.len(), 500);
        for record in &records {
            if record.discount == 0.0 {
                assert_eq!(record.previous_price, 0.0);
            } else {
                assert!(record.previous_price > record.current_price);
            }
        }
    }

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(round_to(329.894, 2), 329.89);
        assert_eq!(round_to(12.345_6, 1), 12.3);
        assert_eq!(discount_percent(120.0, 100.0), 16.7);
        assert_eq!(discount_percent(0.0, 100.0), 0.0);
    }

    #[test]
    fn test_policy_deserializes_partially() {
        let policy: PricingPolicy = serde_json::from_str(r#"{"store_limit": 5, "seed": 7}"#).unwrap();
        assert_eq!(policy.store_limit, 5);
        assert_eq!(policy.seed, Some(7));
        assert_eq!(policy.default_base_price, 199.90);
    }
}
