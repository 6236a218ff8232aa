use async_trait::async_trait;
use lenta_shared::Store;

use crate::CoreResult;

/// Where the run gets its stores from.
#[async_trait]
pub trait StoreSource: Send + Sync {
    /// Fetch every store, in the order the upstream lists them.
    ///
    /// Called once per run; an error aborts the run.
    async fn fetch_stores(&self) -> CoreResult<Vec<Store>>;

    /// Human-readable location of the source, for logs.
    fn describe(&self) -> String;
}

/// Fixed list of stores, for offline runs and tests.
pub struct StaticStores(pub Vec<Store>);

#[async_trait]
impl StoreSource for StaticStores {
    async fn fetch_stores(&self) -> CoreResult<Vec<Store>> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        format!("static list of {} stores", self.0.len())
    }
}
