//! Configuration for opening a fleet store.
//!
//! The host application builds a [`StoreConfig`] directly or loads it from a
//! JSON document it owns. Nothing here reads environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// `SQLite` location string for a private in-memory database.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// Default on-disk database file name.
pub const DEFAULT_DATABASE_FILE: &str = "fleet_management.db";

/// How service-kit stock is kept between process runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryMode {
    /// Stock lives in memory and resets to the default quantities on every
    /// start.
    #[default]
    Volatile,
    /// Stock is stored in the `inventory` table of the fleet database.
    Persistent,
}

/// Settings used by [`crate::system::FleetSystem::open`] and
/// [`crate::store::SqliteStore::open`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the `SQLite` file, or `:memory:`.
    pub database_path: PathBuf,
    /// Inventory persistence mode.
    pub inventory: InventoryMode,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_FILE),
            inventory: InventoryMode::Volatile,
        }
    }
}

impl StoreConfig {
    /// Creates a configuration pointing at the given database file.
    #[must_use]
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            ..Self::default()
        }
    }

    /// Creates a configuration backed by a private in-memory database.
    ///
    /// Useful for tests; all data is lost when the store is closed.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY_DATABASE)
    }

    /// Sets the inventory persistence mode.
    #[must_use]
    pub const fn with_inventory(mut self, inventory: InventoryMode) -> Self {
        self.inventory = inventory;
        self
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid JSON or
    /// contains unknown enum values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    /// Returns the database path.
    #[must_use]
    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// Returns the connection string handed to `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonUtf8Path`] when the path cannot be
    /// represented as UTF-8.
    pub fn database_url(&self) -> Result<String, ConfigError> {
        self.database_path
            .to_str()
            .map(str::to_owned)
            .ok_or_else(|| ConfigError::NonUtf8Path(self.database_path.clone()))
    }
}

/// Errors raised while loading or interpreting configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be decoded.
    #[error("invalid store configuration: {0}")]
    Parse(#[source] serde_json::Error),

    /// The database path is not valid UTF-8.
    #[error("database path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
}
