//! Port contracts for fleet persistence.

pub mod repository;

pub use repository::{FleetRepository, FleetRepositoryError, FleetRepositoryResult};
