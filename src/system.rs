//! Process-wide wiring of the store, repositories and services.
//!
//! A [`FleetSystem`] is opened once at startup, lent out by reference to the
//! presentation layer, and closed on shutdown.

use crate::config::{InventoryMode, StoreConfig};
use crate::fleet::{adapters::sqlite::SqliteFleetRepository, services::DispatchService};
use crate::inventory::{
    adapters::{memory::InMemoryInventoryRepository, sqlite::SqliteInventoryRepository},
    ports::{InventoryRepository, InventoryRepositoryError},
    services::InventoryService,
};
use crate::store::{SqliteStore, StoreError};
use std::sync::Arc;
use thiserror::Error;

/// Inventory service over the configured stock backend.
pub type DynInventoryService = InventoryService<dyn InventoryRepository>;

/// Dispatch service over the `SQLite` fleet and the configured stock backend.
pub type FleetDispatchService = DispatchService<SqliteFleetRepository, dyn InventoryRepository>;

/// Errors raised while opening or closing a [`FleetSystem`].
#[derive(Debug, Error)]
pub enum FleetSystemError {
    /// The store could not be opened.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The persistent inventory could not be prepared.
    #[error(transparent)]
    Inventory(#[from] InventoryRepositoryError),
    /// Another owner still held the store when the system was closed.
    #[error("fleet database '{location}' is still in use")]
    StoreInUse {
        /// Connection string of the store that stayed open.
        location: String,
    },
}

/// Open fleet database plus the services built on it.
pub struct FleetSystem {
    store: Arc<SqliteStore>,
    fleet: Arc<SqliteFleetRepository>,
    inventory: DynInventoryService,
    dispatch: FleetDispatchService,
    inventory_mode: InventoryMode,
}

impl FleetSystem {
    /// Opens the store described by `config` and wires the services.
    ///
    /// # Errors
    ///
    /// Returns [`FleetSystemError::Store`] when the database cannot be opened
    /// or its schema created, and [`FleetSystemError::Inventory`] when the
    /// persistent inventory table cannot be prepared.
    pub fn open(config: &StoreConfig) -> Result<Self, FleetSystemError> {
        let store = Arc::new(SqliteStore::open(config)?);
        let fleet = Arc::new(SqliteFleetRepository::new(Arc::clone(&store)));
        let stock: Arc<dyn InventoryRepository> = match config.inventory {
            InventoryMode::Volatile => Arc::new(InMemoryInventoryRepository::new()),
            InventoryMode::Persistent => {
                Arc::new(SqliteInventoryRepository::open(Arc::clone(&store))?)
            }
        };
        tracing::info!(
            database = %store.location(),
            inventory = ?config.inventory,
            "fleet system ready"
        );

        Ok(Self {
            inventory: InventoryService::new(Arc::clone(&stock)),
            dispatch: DispatchService::new(Arc::clone(&fleet), stock),
            store,
            fleet,
            inventory_mode: config.inventory,
        })
    }

    /// Returns the vehicle, maintenance and call schedule repository.
    #[must_use]
    pub fn fleet(&self) -> &SqliteFleetRepository {
        &self.fleet
    }

    /// Returns the kit stock service.
    #[must_use]
    pub const fn inventory(&self) -> &DynInventoryService {
        &self.inventory
    }

    /// Returns the call dispatch service.
    #[must_use]
    pub const fn dispatch(&self) -> &FleetDispatchService {
        &self.dispatch
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    /// Returns how kit stock is kept.
    #[must_use]
    pub const fn inventory_mode(&self) -> InventoryMode {
        self.inventory_mode
    }

    /// Releases the services and closes the database connection.
    ///
    /// The repositories and services are only lent out by reference and
    /// cannot be cloned, so the system holds the only handles to the store.
    ///
    /// # Errors
    ///
    /// Returns [`FleetSystemError::StoreInUse`] if another handle to the
    /// store survived the services; the connection then closes when that
    /// handle is dropped.
    pub fn close(self) -> Result<(), FleetSystemError> {
        let Self {
            store,
            fleet,
            inventory,
            dispatch,
            ..
        } = self;
        drop(dispatch);
        drop(inventory);
        drop(fleet);
        match Arc::try_unwrap(store) {
            Ok(owned) => {
                owned.close();
                Ok(())
            }
            Err(shared) => {
                tracing::warn!(database = %shared.location(), "fleet store still shared at close");
                Err(FleetSystemError::StoreInUse {
                    location: shared.location().to_owned(),
                })
            }
        }
    }
}
