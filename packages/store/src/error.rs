use thiserror::Error;

/// Errors raised by the persistent key-value layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored value for `{key}` is not valid UTF-8")]
    Encoding { key: String },
}
