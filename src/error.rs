use thiserror::Error;

/// Failures while assembling [`crate::config::DbSettings`] from the
/// environment. Always raised before any connection attempt.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required setting: {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("payload too large: {size} bytes exceeds limit of {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("invalid filename: {0}")]
    InvalidFilename(String),

    #[error("corrupt record: {0}")]
    Corrupt(String),
}
