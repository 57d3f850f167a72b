//! Application services for kit stock.

mod stock;

pub use stock::{InventoryService, InventoryServiceError, InventoryServiceResult};
