use serde::{Deserialize, Serialize};

/// Static parser settings snapshot written to `settings.json`.
///
/// `max_retries` and `delay_between_requests` are informational only; the
/// store fetch is attempted once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserSettings {
    pub api_endpoints: ApiEndpoints,
    pub categories: Categories,
    pub parser_settings: FetchPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEndpoints {
    pub stores: String,
    pub cities: String,
    pub catalog: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categories {
    pub coffee: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchPolicy {
    pub timeout: u64,
    pub max_retries: u32,
    pub delay_between_requests: u64,
}
