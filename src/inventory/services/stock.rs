//! Service layer for taking and restocking service kits.

use crate::inventory::{
    domain::{Inventory, InventoryError, KitType},
    ports::{InventoryRepository, InventoryRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for stock operations.
#[derive(Debug, Error)]
pub enum InventoryServiceError {
    /// The stock rule rejected the operation.
    #[error(transparent)]
    Domain(#[from] InventoryError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] InventoryRepositoryError),
}

/// Result type for inventory service operations.
pub type InventoryServiceResult<T> = Result<T, InventoryServiceError>;

/// Stock orchestration over an [`InventoryRepository`].
///
/// Works with concrete repositories and with `dyn InventoryRepository` so the
/// backing store can be chosen from configuration.
pub struct InventoryService<R>
where
    R: InventoryRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> Clone for InventoryService<R>
where
    R: InventoryRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> InventoryService<R>
where
    R: InventoryRepository + ?Sized,
{
    /// Creates a new inventory service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Takes one unit of `kit` and returns the units left.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryServiceError::Domain`] with
    /// [`InventoryError::OutOfStock`] when the kit has run out (nothing is
    /// written), or [`InventoryServiceError::Repository`] when storage fails.
    pub fn use_item(&self, kit: KitType) -> InventoryServiceResult<u32> {
        let mut inventory = self.repository.load()?;
        let remaining = inventory.use_item(kit)?;
        self.repository.save_quantity(kit, remaining)?;
        tracing::debug!(%kit, remaining, "kit taken from stock");
        Ok(remaining)
    }

    /// Adds `quantity` units of `kit` and returns the new total.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryServiceError::Domain`] on overflow or
    /// [`InventoryServiceError::Repository`] when storage fails.
    pub fn restock_item(&self, kit: KitType, quantity: u32) -> InventoryServiceResult<u32> {
        let mut inventory = self.repository.load()?;
        let total = inventory.restock_item(kit, quantity)?;
        self.repository.save_quantity(kit, total)?;
        tracing::debug!(%kit, added = quantity, total, "kit restocked");
        Ok(total)
    }

    /// Returns the units held of `kit`.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryServiceError::Repository`] when storage fails.
    pub fn quantity(&self, kit: KitType) -> InventoryServiceResult<u32> {
        Ok(self.repository.load()?.quantity(kit))
    }

    /// Returns the stock of every kit.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryServiceError::Repository`] when storage fails.
    pub fn snapshot(&self) -> InventoryServiceResult<Inventory> {
        Ok(self.repository.load()?)
    }
}
