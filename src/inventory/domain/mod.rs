//! Domain model for service-kit stock.

mod error;
mod kit;
mod stock;

pub use error::InventoryError;
pub use kit::KitType;
pub use stock::{DEFAULT_KIT_QUANTITY, Inventory, parse_quantity};
