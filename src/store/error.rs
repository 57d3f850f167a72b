//! Error types for the `SQLite` store.

use crate::config::ConfigError;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while opening or using the store connection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The configuration could not be turned into a connection string.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The database could not be opened.
    #[error("failed to open fleet database '{location}': {source}")]
    Connection {
        /// Connection string that was attempted.
        location: String,
        /// Underlying Diesel error.
        #[source]
        source: diesel::ConnectionError,
    },

    /// A schema or query statement failed.
    #[error("store statement failed: {0}")]
    Query(#[from] diesel::result::Error),

    /// A previous holder of the connection panicked.
    #[error("store connection lock poisoned: {0}")]
    Poisoned(String),
}
