//! Port contracts for inventory persistence.

pub mod repository;

pub use repository::{InventoryRepository, InventoryRepositoryError, InventoryRepositoryResult};
