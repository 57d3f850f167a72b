//! In-memory fleet repository for tests and embedding.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::fleet::{
    domain::{
        CallId, CallSchedule, Maintenance, MaintenanceId, MaintenanceRecord, Vehicle, VehicleId,
        VehicleStatus,
    },
    ports::{FleetRepository, FleetRepositoryError, FleetRepositoryResult},
};

/// Thread-safe in-memory fleet repository.
///
/// Ordered maps keep listings in the same key order as the `SQLite` adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFleetRepository {
    state: Arc<RwLock<InMemoryFleetState>>,
}

#[derive(Debug, Default)]
struct InMemoryFleetState {
    vehicles: BTreeMap<VehicleId, Vehicle>,
    calls: BTreeMap<CallId, CallSchedule>,
    maintenance: BTreeMap<MaintenanceId, MaintenanceRecord>,
    last_maintenance_id: i64,
}

impl InMemoryFleetRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> FleetRepositoryResult<RwLockReadGuard<'_, InMemoryFleetState>> {
        self.state.read().map_err(|err| {
            FleetRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> FleetRepositoryResult<RwLockWriteGuard<'_, InMemoryFleetState>> {
        self.state.write().map_err(|err| {
            FleetRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

impl FleetRepository for InMemoryFleetRepository {
    fn add_vehicle(&self, vehicle: &Vehicle) -> FleetRepositoryResult<()> {
        let mut state = self.write()?;
        if state.vehicles.contains_key(vehicle.id()) {
            return Err(FleetRepositoryError::DuplicateVehicle(vehicle.id().clone()));
        }
        state.vehicles.insert(vehicle.id().clone(), vehicle.clone());
        Ok(())
    }

    fn remove_vehicle(&self, id: &VehicleId) -> FleetRepositoryResult<()> {
        self.write()?.vehicles.remove(id);
        Ok(())
    }

    fn update_vehicle_status(
        &self,
        id: &VehicleId,
        status: VehicleStatus,
    ) -> FleetRepositoryResult<()> {
        if let Some(vehicle) = self.write()?.vehicles.get_mut(id) {
            vehicle.update_status(status);
        }
        Ok(())
    }

    fn get_vehicle(&self, id: &VehicleId) -> FleetRepositoryResult<Option<Vehicle>> {
        Ok(self.read()?.vehicles.get(id).cloned())
    }

    fn list_vehicles(&self) -> FleetRepositoryResult<Vec<Vehicle>> {
        Ok(self.read()?.vehicles.values().cloned().collect())
    }

    fn list_vehicles_by_status(
        &self,
        status: VehicleStatus,
    ) -> FleetRepositoryResult<Vec<Vehicle>> {
        Ok(self
            .read()?
            .vehicles
            .values()
            .filter(|vehicle| vehicle.status() == status)
            .cloned()
            .collect())
    }

    fn add_call_schedule(&self, call: &CallSchedule) -> FleetRepositoryResult<()> {
        let mut state = self.write()?;
        if state.calls.contains_key(call.id()) {
            return Err(FleetRepositoryError::DuplicateCall(call.id().clone()));
        }
        state.calls.insert(call.id().clone(), call.clone());
        Ok(())
    }

    fn remove_call_schedule(&self, id: &CallId) -> FleetRepositoryResult<()> {
        self.write()?.calls.remove(id);
        Ok(())
    }

    fn get_call_schedule(&self, id: &CallId) -> FleetRepositoryResult<Option<CallSchedule>> {
        Ok(self.read()?.calls.get(id).cloned())
    }

    fn list_call_schedules(&self) -> FleetRepositoryResult<Vec<CallSchedule>> {
        Ok(self.read()?.calls.values().cloned().collect())
    }

    fn assign_vehicle_to_call(
        &self,
        call_id: &CallId,
        vehicle_id: &VehicleId,
    ) -> FleetRepositoryResult<()> {
        let mut state = self.write()?;
        // Both rows are checked before either is touched.
        if !state.calls.contains_key(call_id) {
            return Err(FleetRepositoryError::CallNotFound(call_id.clone()));
        }
        let Some(vehicle) = state.vehicles.get_mut(vehicle_id) else {
            return Err(FleetRepositoryError::VehicleNotFound(vehicle_id.clone()));
        };
        vehicle.update_status(VehicleStatus::AssignedToCall);
        if let Some(call) = state.calls.get_mut(call_id) {
            call.assign_vehicle(vehicle_id.clone());
        }
        Ok(())
    }

    fn add_maintenance_record(
        &self,
        vehicle_id: &VehicleId,
        maintenance: &Maintenance,
    ) -> FleetRepositoryResult<MaintenanceRecord> {
        let mut state = self.write()?;
        state.last_maintenance_id += 1;
        let id = MaintenanceId::new(state.last_maintenance_id);
        let record = MaintenanceRecord::new(
            id,
            vehicle_id.clone(),
            Maintenance::new(maintenance.date(), maintenance.description()),
        );
        state.maintenance.insert(id, record.clone());
        Ok(record)
    }

    fn remove_maintenance_record(&self, id: MaintenanceId) -> FleetRepositoryResult<()> {
        self.write()?.maintenance.remove(&id);
        Ok(())
    }

    fn complete_maintenance_record(&self, id: MaintenanceId) -> FleetRepositoryResult<()> {
        if let Some(record) = self.write()?.maintenance.get_mut(&id) {
            record.complete_maintenance();
        }
        Ok(())
    }

    fn get_maintenance_records(
        &self,
        vehicle_id: &VehicleId,
    ) -> FleetRepositoryResult<Vec<MaintenanceRecord>> {
        Ok(self
            .read()?
            .maintenance
            .values()
            .filter(|record| record.vehicle_id() == vehicle_id)
            .cloned()
            .collect())
    }

    fn list_maintenance_records(&self) -> FleetRepositoryResult<Vec<MaintenanceRecord>> {
        Ok(self.read()?.maintenance.values().cloned().collect())
    }
}
