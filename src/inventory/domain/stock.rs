//! Kit quantities and the use/restock operations.

use super::{InventoryError, KitType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Units of each kit held when stock is first created.
pub const DEFAULT_KIT_QUANTITY: u32 = 5;

/// Stock level per kit type.
///
/// Every kit is always present in the map; quantities are unsigned so they
/// can never drop below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: BTreeMap<KitType, u32>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    /// Creates stock with [`DEFAULT_KIT_QUANTITY`] units of every kit.
    #[must_use]
    pub fn new() -> Self {
        Self::filled(DEFAULT_KIT_QUANTITY)
    }

    /// Creates stock with zero units of every kit.
    #[must_use]
    pub fn empty() -> Self {
        Self::filled(0)
    }

    fn filled(quantity: u32) -> Self {
        Self {
            items: KitType::ALL.into_iter().map(|kit| (kit, quantity)).collect(),
        }
    }

    /// Builds stock from stored quantities. Kits not listed hold zero units.
    #[must_use]
    pub fn from_quantities(quantities: impl IntoIterator<Item = (KitType, u32)>) -> Self {
        let mut inventory = Self::empty();
        inventory.items.extend(quantities);
        inventory
    }

    /// Returns the units left of `kit`.
    #[must_use]
    pub fn quantity(&self, kit: KitType) -> u32 {
        self.items.get(&kit).copied().unwrap_or_default()
    }

    /// Overwrites the units held of `kit`.
    pub fn set_quantity(&mut self, kit: KitType, quantity: u32) {
        self.items.insert(kit, quantity);
    }

    /// Takes one unit of `kit` and returns the units left.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::OutOfStock`] when no units remain; the stock
    /// is left unchanged.
    pub fn use_item(&mut self, kit: KitType) -> Result<u32, InventoryError> {
        let quantity = self.items.entry(kit).or_default();
        if *quantity == 0 {
            return Err(InventoryError::OutOfStock(kit));
        }
        *quantity -= 1;
        Ok(*quantity)
    }

    /// Adds `quantity` units of `kit` and returns the new total.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::QuantityOverflow`] when the total would not
    /// fit in a `u32`; the stock is left unchanged.
    pub fn restock_item(&mut self, kit: KitType, quantity: u32) -> Result<u32, InventoryError> {
        let current = self.items.entry(kit).or_default();
        let total = current
            .checked_add(quantity)
            .ok_or(InventoryError::QuantityOverflow {
                kit,
                added: quantity,
            })?;
        *current = total;
        Ok(total)
    }

    /// Iterates over kits and their quantities in kit order.
    pub fn iter(&self) -> impl Iterator<Item = (KitType, u32)> + '_ {
        self.items.iter().map(|(kit, quantity)| (*kit, *quantity))
    }
}

/// Parses a restock quantity typed into a form.
///
/// # Errors
///
/// Returns [`InventoryError::InvalidQuantity`] when the trimmed input is not
/// a non-negative integer.
pub fn parse_quantity(input: &str) -> Result<u32, InventoryError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| InventoryError::InvalidQuantity(input.to_owned()))
}
