//! `SQLite` adapters for inventory persistence.

mod models;
mod repository;
mod schema;

pub use repository::SqliteInventoryRepository;
