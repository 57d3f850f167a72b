//! Error types for inventory operations.

use super::KitType;
use thiserror::Error;

/// Errors returned by stock operations and input parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InventoryError {
    /// No units of the kit are left.
    #[error("{0} is out of stock")]
    OutOfStock(KitType),

    /// Restocking would exceed the representable quantity.
    #[error("restocking {kit} by {added} would overflow the stored quantity")]
    QuantityOverflow {
        /// Kit being restocked.
        kit: KitType,
        /// Units that were to be added.
        added: u32,
    },

    /// A quantity typed by the user is not a non-negative integer.
    #[error("invalid quantity '{0}', expected a non-negative integer")]
    InvalidQuantity(String),

    /// The item name is not one of the five kit types.
    #[error("unknown inventory item: {0}")]
    UnknownKit(String),
}
