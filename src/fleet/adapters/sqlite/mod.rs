//! `SQLite` adapters for fleet persistence.

mod models;
mod repository;
mod schema;

pub use repository::SqliteFleetRepository;
