//! Fleetdesk: records for a small service-dispatch business.
//!
//! This crate provides the persistence and domain layer behind the dispatch
//! desk forms: vehicles, their maintenance records, scheduled customer calls,
//! and the stock of service kits taken on each job. Everything is stored in a
//! local `SQLite` file.
//!
//! # Architecture
//!
//! Fleetdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Plain records and state transitions with no storage code
//! - **Ports**: Repository traits the services and forms depend on
//! - **Adapters**: `SQLite` (Diesel) and in-memory implementations of ports
//!
//! # Modules
//!
//! - [`fleet`]: Vehicles, maintenance records, call schedules and dispatch
//! - [`inventory`]: Service-kit stock
//! - [`store`]: Ownership of the database connection and schema
//! - [`config`]: Store location and inventory persistence mode
//! - [`system`]: Open/close lifecycle tying the above together

pub mod config;
pub mod fleet;
pub mod inventory;
pub mod store;
pub mod system;
