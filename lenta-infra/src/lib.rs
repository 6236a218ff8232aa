pub mod app_config;
pub mod export;
pub mod stores_api;

pub use export::{write_json, write_table, ExportError};
pub use stores_api::{ClientError, HttpStoreSource};
