//! Service layer for sending a vehicle to a customer call.
//!
//! Dispatching takes one service kit from stock and assigns an available
//! vehicle to the call. All checks run before anything is written, so a
//! refused dispatch leaves vehicles, calls and stock untouched.

use crate::fleet::{
    domain::{CallId, Vehicle, VehicleId, VehicleStatus},
    ports::{FleetRepository, FleetRepositoryError},
};
use crate::inventory::{
    domain::{InventoryError, KitType},
    ports::{InventoryRepository, InventoryRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for dispatching a vehicle to a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRequest {
    call_id: CallId,
    vehicle_id: VehicleId,
    kit: Option<KitType>,
}

impl DispatchRequest {
    /// Creates a request that takes the kit matching the call's job type.
    #[must_use]
    pub const fn new(call_id: CallId, vehicle_id: VehicleId) -> Self {
        Self {
            call_id,
            vehicle_id,
            kit: None,
        }
    }

    /// Selects the kit explicitly, overriding the job type's kit.
    #[must_use]
    pub const fn with_kit(mut self, kit: KitType) -> Self {
        self.kit = Some(kit);
        self
    }

    /// Returns the target call.
    #[must_use]
    pub const fn call_id(&self) -> &CallId {
        &self.call_id
    }

    /// Returns the vehicle to send.
    #[must_use]
    pub const fn vehicle_id(&self) -> &VehicleId {
        &self.vehicle_id
    }

    /// Returns the explicitly selected kit, if any.
    #[must_use]
    pub const fn kit(&self) -> Option<KitType> {
        self.kit
    }
}

/// Result of a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Call the vehicle was assigned to.
    pub call_id: CallId,
    /// Vehicle now marked as assigned.
    pub vehicle_id: VehicleId,
    /// Kit taken from stock.
    pub kit: KitType,
    /// Units of the kit left after the dispatch.
    pub remaining: u32,
}

/// Errors returned while dispatching.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The vehicle does not exist.
    #[error("vehicle not found: {0}")]
    VehicleNotFound(VehicleId),

    /// The vehicle is not free to take a call.
    #[error("vehicle {id} is not available (status: {status})")]
    VehicleUnavailable {
        /// Requested vehicle.
        id: VehicleId,
        /// Its current status.
        status: VehicleStatus,
    },

    /// The call does not exist.
    #[error("call schedule not found: {0}")]
    CallNotFound(CallId),

    /// No kit was selected and the call has no job type to derive one from.
    #[error("no service kit selected for call {0}")]
    KitNotSelected(CallId),

    /// The stock rule rejected the dispatch.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// Fleet repository operation failed.
    #[error(transparent)]
    Fleet(#[from] FleetRepositoryError),

    /// Inventory repository operation failed.
    #[error(transparent)]
    Stock(#[from] InventoryRepositoryError),
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Call dispatch orchestration service.
pub struct DispatchService<F, I>
where
    F: FleetRepository + ?Sized,
    I: InventoryRepository + ?Sized,
{
    fleet: Arc<F>,
    inventory: Arc<I>,
}

impl<F, I> Clone for DispatchService<F, I>
where
    F: FleetRepository + ?Sized,
    I: InventoryRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            fleet: Arc::clone(&self.fleet),
            inventory: Arc::clone(&self.inventory),
        }
    }
}

impl<F, I> DispatchService<F, I>
where
    F: FleetRepository + ?Sized,
    I: InventoryRepository + ?Sized,
{
    /// Creates a new dispatch service.
    #[must_use]
    pub const fn new(fleet: Arc<F>, inventory: Arc<I>) -> Self {
        Self { fleet, inventory }
    }

    /// Returns the vehicles that can be offered for a call.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Fleet`] when the lookup fails.
    pub fn available_vehicles(&self) -> DispatchResult<Vec<Vehicle>> {
        Ok(self.fleet.list_vehicles_by_status(VehicleStatus::Available)?)
    }

    /// Takes a kit from stock and assigns the vehicle to the call.
    ///
    /// The vehicle must exist and be `Available`, the call must exist, and
    /// the kit (explicit, or derived from the call's job type) must be in
    /// stock. The assignment is written first and the reduced stock second;
    /// if the stock write fails the error is returned and the assignment
    /// stands.
    ///
    /// # Errors
    ///
    /// Returns the [`DispatchError`] variant naming the failed check, or a
    /// repository error when storage fails.
    pub fn dispatch(&self, request: &DispatchRequest) -> DispatchResult<DispatchOutcome> {
        let vehicle = self
            .fleet
            .get_vehicle(request.vehicle_id())?
            .ok_or_else(|| DispatchError::VehicleNotFound(request.vehicle_id().clone()))?;
        if !vehicle.is_available() {
            tracing::warn!(
                vehicle_id = %vehicle.id(),
                status = %vehicle.status(),
                "dispatch refused: vehicle not available"
            );
            return Err(DispatchError::VehicleUnavailable {
                id: vehicle.id().clone(),
                status: vehicle.status(),
            });
        }

        let call = self
            .fleet
            .get_call_schedule(request.call_id())?
            .ok_or_else(|| DispatchError::CallNotFound(request.call_id().clone()))?;
        let kit = request
            .kit()
            .or_else(|| call.job_type().map(|job_type| job_type.kit()))
            .ok_or_else(|| DispatchError::KitNotSelected(call.id().clone()))?;

        let mut stock = self.inventory.load()?;
        let remaining = stock.use_item(kit).inspect_err(|_| {
            tracing::warn!(call_id = %call.id(), %kit, "dispatch refused: kit out of stock");
        })?;

        self.fleet.assign_vehicle_to_call(call.id(), vehicle.id())?;
        self.inventory.save_quantity(kit, remaining)?;

        tracing::info!(
            call_id = %call.id(),
            vehicle_id = %vehicle.id(),
            %kit,
            remaining,
            "vehicle dispatched"
        );
        Ok(DispatchOutcome {
            call_id: call.id().clone(),
            vehicle_id: vehicle.id().clone(),
            kit,
            remaining,
        })
    }
}
