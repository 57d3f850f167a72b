//! Shared world state for call dispatch BDD scenarios.

use fleetdesk::{
    config::StoreConfig,
    fleet::services::{DispatchError, DispatchOutcome},
    system::FleetSystem,
};
use rstest::fixture;

/// Scenario world for call dispatch behaviour tests.
pub struct DispatchWorld {
    pub system: FleetSystem,
    pub last_dispatch: Option<Result<DispatchOutcome, DispatchError>>,
}

impl DispatchWorld {
    /// Creates a world over a fresh in-memory database with default stock.
    #[must_use]
    pub fn new() -> Self {
        let system =
            FleetSystem::open(&StoreConfig::in_memory()).expect("open in-memory fleet system");
        Self {
            system,
            last_dispatch: None,
        }
    }
}

impl Default for DispatchWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DispatchWorld {
    DispatchWorld::default()
}
