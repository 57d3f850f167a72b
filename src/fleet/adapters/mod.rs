//! Adapter implementations for fleet persistence.

pub mod memory;
pub mod sqlite;
