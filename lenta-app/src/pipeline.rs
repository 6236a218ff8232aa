use std::path::PathBuf;

use chrono::Utc;
use lenta_catalog::{base_prices, coffee_catalog, PriceSynthesizer};
use lenta_core::StoreSource;
use lenta_infra::app_config::Config;
use lenta_infra::{write_json, write_table, ExportError};
use lenta_shared::RunSummary;
use tracing::{error, info};

use crate::error::AppError;

pub const GEO_FILE: &str = "geo.csv";
pub const SKU_FILE: &str = "sku.csv";
pub const PRICES_FILE: &str = "prices.csv";
pub const STATS_FILE: &str = "parsing_stats.json";
pub const SETTINGS_FILE: &str = "settings.json";

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub summary: RunSummary,
    /// Files written, in save order.
    pub saved: Vec<PathBuf>,
    /// Files whose save failed, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl RunReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    fn record(&mut self, path: PathBuf, result: Result<(), ExportError>) {
        match result {
            Ok(()) => self.saved.push(path),
            Err(e) => {
                error!(path = %path.display(), error = %e, "Save failed");
                self.failed.push((path, e.to_string()));
            }
        }
    }
}

/// Runs the fixed sequence: fetch stores, load catalog, synthesize prices,
/// save outputs, log totals.
///
/// A fetch failure aborts before anything is written. Each save is
/// independent; a failed save is recorded and the run moves on.
pub async fn run(config: &Config, source: &dyn StoreSource) -> Result<RunReport, AppError> {
    let synthesizer = PriceSynthesizer::new(config.pricing.clone())?;

    info!(source = %source.describe(), "Fetching stores");
    let stores = source.fetch_stores().await.map_err(|e| {
        error!(error = %e, "Could not fetch stores, aborting run");
        e
    })?;
    info!(count = stores.len(), "Stores received");

    let products = coffee_catalog();
    let prices = base_prices();
    info!(count = products.len(), category = %config.categories.coffee, "Catalog loaded");

    let generated_at = Utc::now();
    let mut rng = synthesizer.rng();
    let records = synthesizer.synthesize(&products, &prices, &stores, &mut rng, generated_at);

    let summary = RunSummary::collect(&stores, &products, &records, Utc::now());
    let mut report = RunReport {
        summary,
        saved: Vec::new(),
        failed: Vec::new(),
    };

    let data_dir = &config.output.data_dir;

    let path = data_dir.join(GEO_FILE);
    let result = write_table(&path, &stores).map(drop);
    report.record(path, result);

    let path = data_dir.join(SKU_FILE);
    let result = write_table(&path, &products).map(drop);
    report.record(path, result);

    let path = data_dir.join(PRICES_FILE);
    let result = write_table(&path, &records).map(drop);
    report.record(path, result);

    let path = data_dir.join(STATS_FILE);
    let result = write_json(&path, &report.summary);
    report.record(path, result);

    let path = config.output.config_dir.join(SETTINGS_FILE);
    let result = write_json(&path, &config.parser_settings());
    report.record(path, result);

    log_totals(&report);
    Ok(report)
}

fn log_totals(report: &RunReport) {
    let stats = &report.summary.statistics;
    info!(
        stores = stats.stores_count,
        cities = stats.cities_count,
        products = stats.sku_count,
        price_records = stats.price_records_count,
        brands = stats.brands_count,
        "Run totals"
    );

    for path in &report.saved {
        info!(path = %path.display(), "Created");
    }
    if !report.is_complete() {
        error!(failed = report.failed.len(), "Some outputs were not written");
    }
}
