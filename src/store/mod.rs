//! `SQLite` store that owns the single fleet database connection.
//!
//! The store is opened once at startup, shared by reference (or `Arc`) with
//! the repository adapters, and released with [`SqliteStore::close`] or by
//! dropping it. Every statement runs synchronously on the calling thread;
//! the mutex only exists so adapters satisfy the `Send + Sync` port bounds.

mod error;
mod schema;

pub use error::{StoreError, StoreResult};

use crate::config::StoreConfig;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Text};
use diesel::sqlite::SqliteConnection;
use std::fmt;
use std::sync::Mutex;

/// Owner of the fleet database connection.
pub struct SqliteStore {
    connection: Mutex<SqliteConnection>,
    location: String,
}

impl SqliteStore {
    /// Opens the database named by `config` and ensures the fleet tables
    /// exist. Foreign key enforcement is switched off on the connection, so
    /// orphaned vehicle references are stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] for unusable paths,
    /// [`StoreError::Connection`] when `SQLite` cannot open the database, and
    /// [`StoreError::Query`] when the connection pragmas or schema creation
    /// fail.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        let location = config.database_url()?;
        let mut connection =
            SqliteConnection::establish(&location).map_err(|source| StoreError::Connection {
                location: location.clone(),
                source,
            })?;
        connection.batch_execute(schema::CONNECTION_PRAGMAS)?;

        let store = Self {
            connection: Mutex::new(connection),
            location,
        };
        store.create_schema()?;
        tracing::info!(database = %store.location, "opened fleet store");
        Ok(store)
    }

    /// Returns the connection string the store was opened with.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Creates the `vehicles`, `maintenance` and `call_schedules` tables if
    /// they do not exist, and adds `call_schedules.job_type` to tables
    /// written without it. Safe to run on every start.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Query`] when a DDL statement fails.
    pub fn create_schema(&self) -> StoreResult<()> {
        self.with_connection(|connection| {
            connection.batch_execute(schema::FLEET_TABLES)?;
            if !has_column(connection, "call_schedules", "job_type")? {
                connection.batch_execute(schema::ADD_CALL_JOB_TYPE)?;
                tracing::info!(
                    database = %self.location,
                    "added job_type column to call_schedules"
                );
            }
            Ok::<_, StoreError>(())
        })?;
        tracing::debug!(database = %self.location, "fleet schema ensured");
        Ok(())
    }

    /// Creates the `inventory` table if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Query`] when the DDL statement fails.
    pub fn create_inventory_schema(&self) -> StoreResult<()> {
        self.with_connection(|connection| {
            connection.batch_execute(schema::INVENTORY_TABLE)?;
            Ok::<_, StoreError>(())
        })?;
        tracing::debug!(database = %self.location, "inventory schema ensured");
        Ok(())
    }

    /// Runs `f` with exclusive access to the connection. Each statement
    /// issued inside auto-commits.
    ///
    /// # Errors
    ///
    /// Propagates the closure's error, or a converted
    /// [`StoreError::Poisoned`] when the lock is poisoned.
    pub fn with_connection<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, E>,
        E: From<StoreError>,
    {
        let mut connection = self
            .connection
            .lock()
            .map_err(|err| E::from(StoreError::Poisoned(err.to_string())))?;
        f(&mut connection)
    }

    /// Runs `f` inside a single transaction. The transaction commits when
    /// `f` returns `Ok` and rolls back when it returns `Err`.
    ///
    /// # Errors
    ///
    /// Propagates the closure's error, Diesel transaction failures, or a
    /// poisoned lock.
    pub fn transaction<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, E>,
        E: From<StoreError> + From<diesel::result::Error>,
    {
        self.with_connection(|connection| connection.transaction(f))
    }

    /// Closes the store, releasing the connection.
    pub fn close(self) {
        tracing::info!(database = %self.location, "closing fleet store");
        drop(self);
    }
}

#[derive(QueryableByName)]
struct ColumnCount {
    #[diesel(sql_type = BigInt)]
    total: i64,
}

fn has_column(connection: &mut SqliteConnection, table: &str, column: &str) -> QueryResult<bool> {
    let found = diesel::sql_query(schema::COUNT_COLUMN)
        .bind::<Text, _>(table)
        .bind::<Text, _>(column)
        .get_result::<ColumnCount>(connection)?;
    Ok(found.total > 0)
}

impl fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteStore")
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}
