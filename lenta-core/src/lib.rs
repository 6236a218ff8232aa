pub mod source;

pub use source::StoreSource;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Request to {url} failed: {message}")]
    Http { url: String, message: String },
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("Malformed response from {url}: {message}")]
    Decode { url: String, message: String },
}

pub type CoreResult<T> = Result<T, CoreError>;
