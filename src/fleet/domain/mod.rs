//! Domain model for the fleet records.
//!
//! Vehicles, maintenance jobs and call schedules are plain values with a few
//! state transitions. Nothing here touches storage.

mod call;
mod error;
mod ids;
mod maintenance;
mod vehicle;

pub use call::{CallSchedule, JobType};
pub use error::FleetDomainError;
pub use ids::{CallId, MaintenanceId, VehicleId};
pub use maintenance::{Maintenance, MaintenanceRecord, PersistedMaintenanceData};
pub use vehicle::{Vehicle, VehicleStatus, parse_year};
