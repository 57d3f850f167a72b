//! Diesel row models for inventory persistence.

use super::schema::inventory;
use diesel::prelude::*;

/// Query and insert row for kit stock.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = inventory)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct InventoryRow {
    /// Kit display name.
    pub item: String,
    /// Units held.
    pub quantity: i64,
}
