//! Shared helpers for `SQLite` integration tests.

use fleetdesk::{
    config::{InventoryMode, StoreConfig},
    fleet::domain::{CallId, CallSchedule, JobType, Vehicle, VehicleId},
};
use rstest::fixture;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary directory holding one database file.
pub struct DatabaseDir {
    /// Keeps the directory alive for the test.
    pub dir: TempDir,
    /// Path of the database file inside [`Self::dir`].
    pub path: PathBuf,
}

impl DatabaseDir {
    /// Returns a configuration for the file with the given inventory mode.
    #[must_use]
    pub fn config(&self, inventory: InventoryMode) -> StoreConfig {
        StoreConfig::new(&self.path).with_inventory(inventory)
    }
}

/// Provides an empty directory for a database file.
#[fixture]
pub fn database_dir() -> DatabaseDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("fleet_management.db");
    DatabaseDir { dir, path }
}

/// Builds an available vehicle with the given key.
#[must_use]
pub fn vehicle(id: &str) -> Vehicle {
    Vehicle::new(VehicleId::new(id), "Ford", "Transit", 2019)
}

/// Builds a heating call with the given key.
#[must_use]
pub fn heating_call(id: &str) -> CallSchedule {
    CallSchedule::new(CallId::new(id), "Grace Hopper", "2024-05-01", "09:30")
        .with_job_type(JobType::Heating)
}
