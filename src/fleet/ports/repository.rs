//! Repository port for vehicles, maintenance records and call schedules.

use crate::fleet::domain::{
    CallId, CallSchedule, Maintenance, MaintenanceId, MaintenanceRecord, Vehicle, VehicleId,
    VehicleStatus,
};
use std::sync::Arc;
use thiserror::Error;

/// Result type for fleet repository operations.
pub type FleetRepositoryResult<T> = Result<T, FleetRepositoryError>;

/// Fleet persistence contract.
///
/// Every write commits on success. Removing, updating or completing a row
/// that does not exist is a silent no-op; callers that need confirmation
/// look the row up first.
pub trait FleetRepository: Send + Sync {
    /// Stores a new vehicle.
    ///
    /// # Errors
    ///
    /// Returns [`FleetRepositoryError::DuplicateVehicle`] when the key is
    /// taken; nothing is written.
    fn add_vehicle(&self, vehicle: &Vehicle) -> FleetRepositoryResult<()>;

    /// Deletes a vehicle. Maintenance rows that reference it are kept.
    fn remove_vehicle(&self, id: &VehicleId) -> FleetRepositoryResult<()>;

    /// Overwrites a vehicle's status. Any transition is accepted.
    fn update_vehicle_status(
        &self,
        id: &VehicleId,
        status: VehicleStatus,
    ) -> FleetRepositoryResult<()>;

    /// Finds a vehicle by key.
    fn get_vehicle(&self, id: &VehicleId) -> FleetRepositoryResult<Option<Vehicle>>;

    /// Returns every vehicle ordered by key.
    fn list_vehicles(&self) -> FleetRepositoryResult<Vec<Vehicle>>;

    /// Returns the vehicles with the given status ordered by key.
    fn list_vehicles_by_status(
        &self,
        status: VehicleStatus,
    ) -> FleetRepositoryResult<Vec<Vehicle>>;

    /// Stores a new call schedule.
    ///
    /// # Errors
    ///
    /// Returns [`FleetRepositoryError::DuplicateCall`] when the key is taken;
    /// nothing is written.
    fn add_call_schedule(&self, call: &CallSchedule) -> FleetRepositoryResult<()>;

    /// Deletes a call schedule.
    fn remove_call_schedule(&self, id: &CallId) -> FleetRepositoryResult<()>;

    /// Finds a call schedule by key.
    fn get_call_schedule(&self, id: &CallId) -> FleetRepositoryResult<Option<CallSchedule>>;

    /// Returns every call schedule ordered by key.
    fn list_call_schedules(&self) -> FleetRepositoryResult<Vec<CallSchedule>>;

    /// Binds a vehicle to a call and marks the vehicle
    /// [`VehicleStatus::AssignedToCall`] as one atomic change.
    ///
    /// A previously assigned vehicle is not released.
    ///
    /// Unlike the other updates, which silently skip a missing id, this
    /// reports a missing call or vehicle as an error.
    ///
    /// # Errors
    ///
    /// Returns [`FleetRepositoryError::CallNotFound`] or
    /// [`FleetRepositoryError::VehicleNotFound`] when either row is missing;
    /// neither row is changed in that case.
    fn assign_vehicle_to_call(
        &self,
        call_id: &CallId,
        vehicle_id: &VehicleId,
    ) -> FleetRepositoryResult<()>;

    /// Stores an open maintenance job for a vehicle and returns the stored
    /// record with its generated identifier.
    ///
    /// The vehicle key is not checked against the vehicle table.
    fn add_maintenance_record(
        &self,
        vehicle_id: &VehicleId,
        maintenance: &Maintenance,
    ) -> FleetRepositoryResult<MaintenanceRecord>;

    /// Deletes a maintenance record.
    fn remove_maintenance_record(&self, id: MaintenanceId) -> FleetRepositoryResult<()>;

    /// Marks a maintenance record as completed. Repeating the call has no
    /// further effect.
    fn complete_maintenance_record(&self, id: MaintenanceId) -> FleetRepositoryResult<()>;

    /// Returns the maintenance records of one vehicle ordered by identifier.
    fn get_maintenance_records(
        &self,
        vehicle_id: &VehicleId,
    ) -> FleetRepositoryResult<Vec<MaintenanceRecord>>;

    /// Returns every maintenance record ordered by identifier.
    fn list_maintenance_records(&self) -> FleetRepositoryResult<Vec<MaintenanceRecord>>;
}

/// Errors returned by fleet repository implementations.
#[derive(Debug, Clone, Error)]
pub enum FleetRepositoryError {
    /// A vehicle with the same key already exists.
    #[error("duplicate vehicle identifier: {0}")]
    DuplicateVehicle(VehicleId),

    /// A call schedule with the same key already exists.
    #[error("duplicate call identifier: {0}")]
    DuplicateCall(CallId),

    /// The call targeted by an assignment does not exist.
    #[error("call schedule not found: {0}")]
    CallNotFound(CallId),

    /// The vehicle targeted by an assignment does not exist.
    #[error("vehicle not found: {0}")]
    VehicleNotFound(VehicleId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl FleetRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns `true` for uniqueness violations on vehicle or call keys.
    #[must_use]
    pub const fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateVehicle(_) | Self::DuplicateCall(_))
    }
}
