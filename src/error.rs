use log::debug;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Logs the backend error and wraps it.
pub fn storage_error<E: fmt::Debug>(err: E) -> Error {
    debug!("{:?}", err);
    Error::Storage(format!("{:?}", err))
}
