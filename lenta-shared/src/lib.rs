pub mod models;

pub use models::price::PriceRecord;
pub use models::product::Product;
pub use models::settings::ParserSettings;
pub use models::store::Store;
pub use models::summary::RunSummary;
