pub mod error;
pub mod logging;
pub mod pipeline;

pub use error::AppError;
pub use pipeline::{run, RunReport};
