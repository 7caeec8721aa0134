use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TrackError>;
