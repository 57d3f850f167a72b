//! Adapter implementations for inventory persistence.

pub mod memory;
pub mod sqlite;
