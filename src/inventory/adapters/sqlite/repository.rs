//! `SQLite` repository implementation for kit stock.

use super::{models::InventoryRow, schema::inventory};
use crate::inventory::{
    domain::{DEFAULT_KIT_QUANTITY, Inventory, KitType},
    ports::{InventoryRepository, InventoryRepositoryError, InventoryRepositoryResult},
};
use crate::store::{SqliteStore, StoreError};
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use std::sync::Arc;

/// `SQLite`-backed stock that survives restarts.
#[derive(Debug)]
pub struct SqliteInventoryRepository {
    store: Arc<SqliteStore>,
}

impl From<StoreError> for InventoryRepositoryError {
    fn from(err: StoreError) -> Self {
        Self::persistence(err)
    }
}

impl From<DieselError> for InventoryRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

impl SqliteInventoryRepository {
    /// Ensures the `inventory` table exists and holds a row for every kit.
    ///
    /// Kits that already have a row keep their stored quantity; missing kits
    /// are seeded with [`DEFAULT_KIT_QUANTITY`].
    ///
    /// # Errors
    ///
    /// Returns [`InventoryRepositoryError::Persistence`] when the table
    /// cannot be created or seeded.
    pub fn open(store: Arc<SqliteStore>) -> InventoryRepositoryResult<Self> {
        store.create_inventory_schema()?;

        let seeded = store.transaction(|connection| -> InventoryRepositoryResult<usize> {
            let mut seeded = 0;
            for kit in KitType::ALL {
                let row = InventoryRow {
                    item: kit.as_str().to_owned(),
                    quantity: i64::from(DEFAULT_KIT_QUANTITY),
                };
                seeded += diesel::insert_or_ignore_into(inventory::table)
                    .values(&row)
                    .execute(connection)?;
            }
            Ok(seeded)
        })?;
        tracing::debug!(seeded, "inventory table ready");

        Ok(Self { store })
    }
}

impl InventoryRepository for SqliteInventoryRepository {
    fn load(&self) -> InventoryRepositoryResult<Inventory> {
        let rows = self
            .store
            .with_connection(|connection| -> InventoryRepositoryResult<Vec<InventoryRow>> {
                Ok(inventory::table
                    .select(InventoryRow::as_select())
                    .load::<InventoryRow>(connection)?)
            })?;

        let quantities = rows
            .into_iter()
            .map(|row| {
                let kit = KitType::try_from(row.item.as_str())
                    .map_err(InventoryRepositoryError::persistence)?;
                let quantity =
                    u32::try_from(row.quantity).map_err(InventoryRepositoryError::persistence)?;
                Ok((kit, quantity))
            })
            .collect::<InventoryRepositoryResult<Vec<_>>>()?;
        Ok(Inventory::from_quantities(quantities))
    }

    fn save_quantity(&self, kit: KitType, quantity: u32) -> InventoryRepositoryResult<()> {
        let row = InventoryRow {
            item: kit.as_str().to_owned(),
            quantity: i64::from(quantity),
        };
        self.store
            .with_connection(|connection| -> InventoryRepositoryResult<usize> {
                Ok(diesel::replace_into(inventory::table)
                    .values(&row)
                    .execute(connection)?)
            })?;
        tracing::debug!(%kit, quantity, "kit quantity saved");
        Ok(())
    }
}
