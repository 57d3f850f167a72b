//! Vehicles, maintenance records and call schedules.
//!
//! The repository port is the persistence contract used by the forms of the
//! dispatch desk: one operation per lifecycle step of each record, plus the
//! assignment of a vehicle to a call, which updates the call and the
//! vehicle's status together. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
