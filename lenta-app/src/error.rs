use lenta_catalog::PricingError;
use lenta_core::CoreError;

/// Failures that end a run before any output is written.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to fetch stores: {0}")]
    Fetch(#[from] CoreError),

    #[error("Invalid pricing policy: {0}")]
    Pricing(#[from] PricingError),
}
