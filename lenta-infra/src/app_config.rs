use std::env;
use std::path::{Path, PathBuf};

use lenta_catalog::{PricingPolicy, COFFEE_CATEGORY_SLUG};
use lenta_shared::models::settings::{ApiEndpoints, Categories, FetchPolicy};
use lenta_shared::ParserSettings;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub parser: ParserConfig,
    pub categories: CategoriesConfig,
    pub pricing: PricingPolicy,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub endpoints: EndpointsConfig,
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://lenta.com".into(),
            endpoints: EndpointsConfig::default(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36"
                .into(),
            accept: "application/json, text/plain, */*".into(),
            accept_language: "ru-RU,ru;q=0.9,en-US;q=0.8,en;q=0.7".into(),
        }
    }
}

impl ApiConfig {
    pub fn stores_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoints.stores)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EndpointsConfig {
    pub stores: String,
    pub cities: String,
    pub catalog: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            stores: "/api/v1/stores".into(),
            cities: "/api/v1/cities".into(),
            catalog: "/catalog/".into(),
        }
    }
}

/// Fetch policy. Only `timeout_secs` affects the request; the other two are
/// recorded in `settings.json`.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ParserConfig {
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub delay_between_requests: u64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            max_retries: 3,
            delay_between_requests: 1,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CategoriesConfig {
    pub coffee: String,
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        Self {
            coffee: COFFEE_CATEGORY_SLUG.into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    pub data_dir: PathBuf,
    pub config_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".into(),
            config_dir: "config".into(),
            logs_dir: "logs".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Built-in defaults, overlaid by `default`, `{RUN_MODE}` and `local`
    /// files from `dir` (all optional), then `LENTA__*` variables.
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let file = |name: &str| config::File::from(dir.join(name)).required(false);

        let s = config::Config::builder()
            .add_source(file("default"))
            .add_source(file(&run_mode))
            // Not checked in.
            .add_source(file("local"))
            // Eg.. `LENTA__PRICING__SEED=42`
            .add_source(
                config::Environment::with_prefix("LENTA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }

    /// Snapshot written to `settings.json`.
    pub fn parser_settings(&self) -> ParserSettings {
        ParserSettings {
            api_endpoints: ApiEndpoints {
                stores: self.api.endpoints.stores.clone(),
                cities: self.api.endpoints.cities.clone(),
                catalog: self.api.endpoints.catalog.clone(),
            },
            categories: Categories {
                coffee: self.categories.coffee.clone(),
            },
            parser_settings: FetchPolicy {
                timeout: self.parser.timeout_secs,
                max_retries: self.parser.max_retries,
                delay_between_requests: self.parser.delay_between_requests,
            },
        }
    }
}
