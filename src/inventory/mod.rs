//! Service-kit stock for the dispatch desk.
//!
//! Five kit types are tracked, each starting at five units. Stock is kept in
//! memory by default and resets on every start; the `SQLite` adapter keeps it
//! in the fleet database instead when configured.
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
