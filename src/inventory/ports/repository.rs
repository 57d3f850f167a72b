//! Repository port for service-kit stock.

use crate::inventory::domain::{Inventory, KitType};
use std::sync::Arc;
use thiserror::Error;

/// Result type for inventory repository operations.
pub type InventoryRepositoryResult<T> = Result<T, InventoryRepositoryError>;

/// Stock persistence contract.
pub trait InventoryRepository: Send + Sync {
    /// Returns the current stock of every kit.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryRepositoryError::Persistence`] when stock cannot
    /// be read.
    fn load(&self) -> InventoryRepositoryResult<Inventory>;

    /// Records the quantity held for one kit.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryRepositoryError::Persistence`] when the write
    /// fails.
    fn save_quantity(&self, kit: KitType, quantity: u32) -> InventoryRepositoryResult<()>;
}

/// Errors returned by inventory repository implementations.
#[derive(Debug, Clone, Error)]
pub enum InventoryRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl InventoryRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
