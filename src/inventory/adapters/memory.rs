//! Volatile inventory repository.

use std::sync::{Arc, RwLock};

use crate::inventory::{
    domain::{Inventory, KitType},
    ports::{InventoryRepository, InventoryRepositoryError, InventoryRepositoryResult},
};

/// Stock held in process memory.
///
/// Starts at the default quantities and is lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventoryRepository {
    state: Arc<RwLock<Inventory>>,
}

impl InMemoryInventoryRepository {
    /// Creates a repository holding the default stock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given stock.
    #[must_use]
    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            state: Arc::new(RwLock::new(inventory)),
        }
    }
}

impl InventoryRepository for InMemoryInventoryRepository {
    fn load(&self) -> InventoryRepositoryResult<Inventory> {
        let state = self.state.read().map_err(|err| {
            InventoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.clone())
    }

    fn save_quantity(&self, kit: KitType, quantity: u32) -> InventoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            InventoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.set_quantity(kit, quantity);
        Ok(())
    }
}
