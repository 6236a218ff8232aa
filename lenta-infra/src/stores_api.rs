use std::time::Duration;

use async_trait::async_trait;
use lenta_core::{CoreError, CoreResult, StoreSource};
use lenta_shared::Store;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT,
};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};

use crate::app_config::{ApiConfig, ParserConfig};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid {name} header in config: {source}")]
    InvalidHeader {
        name: HeaderName,
        #[source]
        source: InvalidHeaderValue,
    },

    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Store list served by the lenta.com stores endpoint.
#[derive(Clone)]
pub struct HttpStoreSource {
    client: Client,
    url: String,
}

impl HttpStoreSource {
    pub fn new(api: &ApiConfig, parser: &ParserConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        for (name, value) in [
            (USER_AGENT, &api.user_agent),
            (ACCEPT, &api.accept),
            (ACCEPT_LANGUAGE, &api.accept_language),
        ] {
            let value = HeaderValue::from_str(value).map_err(|source| ClientError::InvalidHeader {
                name: name.clone(),
                source,
            })?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(parser.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: api.stores_url(),
        })
    }
}

#[async_trait]
impl StoreSource for HttpStoreSource {
    async fn fetch_stores(&self) -> CoreResult<Vec<Store>> {
        let http_error = |e: reqwest::Error| CoreError::Http {
            url: self.url.clone(),
            message: e.to_string(),
        };

        let res = self.client.get(&self.url).send().await.map_err(http_error)?;

        let status = res.status();
        if status != StatusCode::OK {
            error!(url = %self.url, status = status.as_u16(), "Stores endpoint refused");
            return Err(CoreError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = res.text().await.map_err(http_error)?;
        let stores = parse_stores(&body).map_err(|e| CoreError::Decode {
            url: self.url.clone(),
            message: e.to_string(),
        })?;

        info!(url = %self.url, count = stores.len(), "Fetched stores");
        Ok(stores)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Wire shape of one store. Every field is optional upstream.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiStore {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    name: Value,
    #[serde(default)]
    address: Value,
    #[serde(default)]
    city: Value,
    #[serde(default)]
    latitude: Value,
    #[serde(default)]
    longitude: Value,
    #[serde(default)]
    phone: Value,
    #[serde(default)]
    working_hours: Value,
}

impl From<ApiStore> for Store {
    fn from(s: ApiStore) -> Self {
        Store {
            store_id: text(s.id),
            name: text(s.name),
            address: text(s.address),
            city: text(s.city),
            latitude: text(s.latitude),
            longitude: text(s.longitude),
            phone: text(s.phone),
            working_hours: text(s.working_hours),
        }
    }
}

pub fn parse_stores(body: &str) -> Result<Vec<Store>, serde_json::Error> {
    let stores: Vec<ApiStore> = serde_json::from_str(body)?;
    Ok(stores.into_iter().map(Store::from).collect())
}

fn text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}
