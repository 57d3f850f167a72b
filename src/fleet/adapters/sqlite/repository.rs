//! `SQLite` repository implementation for fleet storage.

use super::{
    models::{CallScheduleRow, MaintenanceRow, NewMaintenanceRow, VehicleRow},
    schema::{call_schedules, maintenance, vehicles},
};
use crate::fleet::{
    domain::{
        CallId, CallSchedule, JobType, Maintenance, MaintenanceId, MaintenanceRecord,
        PersistedMaintenanceData, Vehicle, VehicleId, VehicleStatus,
    },
    ports::{FleetRepository, FleetRepositoryError, FleetRepositoryResult},
};
use crate::store::{SqliteStore, StoreError};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::sync::Arc;

/// `SQLite`-backed fleet repository sharing the store connection.
#[derive(Debug)]
pub struct SqliteFleetRepository {
    store: Arc<SqliteStore>,
}

impl SqliteFleetRepository {
    /// Creates a repository over an open store.
    #[must_use]
    pub const fn new(store: Arc<SqliteStore>) -> Self {
        Self { store }
    }
}

impl From<StoreError> for FleetRepositoryError {
    fn from(err: StoreError) -> Self {
        Self::persistence(err)
    }
}

impl From<DieselError> for FleetRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

impl FleetRepository for SqliteFleetRepository {
    fn add_vehicle(&self, vehicle: &Vehicle) -> FleetRepositoryResult<()> {
        let row = to_vehicle_row(vehicle);
        self.store
            .with_connection(|connection| -> FleetRepositoryResult<usize> {
                diesel::insert_into(vehicles::table)
                    .values(&row)
                    .execute(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            FleetRepositoryError::DuplicateVehicle(vehicle.id().clone())
                        }
                        _ => FleetRepositoryError::persistence(err),
                    })
            })?;
        tracing::debug!(vehicle_id = %vehicle.id(), "vehicle added");
        Ok(())
    }

    fn remove_vehicle(&self, id: &VehicleId) -> FleetRepositoryResult<()> {
        let removed =
            self.store
                .with_connection(|connection| -> FleetRepositoryResult<usize> {
                    Ok(diesel::delete(
                        vehicles::table.filter(vehicles::vehicle_id.eq(id.as_str())),
                    )
                    .execute(connection)?)
                })?;
        tracing::debug!(vehicle_id = %id, removed, "vehicle removed");
        Ok(())
    }

    fn update_vehicle_status(
        &self,
        id: &VehicleId,
        status: VehicleStatus,
    ) -> FleetRepositoryResult<()> {
        let updated =
            self.store
                .with_connection(|connection| -> FleetRepositoryResult<usize> {
                    Ok(diesel::update(
                        vehicles::table.filter(vehicles::vehicle_id.eq(id.as_str())),
                    )
                    .set(vehicles::status.eq(status.as_str()))
                    .execute(connection)?)
                })?;
        tracing::debug!(vehicle_id = %id, %status, updated, "vehicle status updated");
        Ok(())
    }

    fn get_vehicle(&self, id: &VehicleId) -> FleetRepositoryResult<Option<Vehicle>> {
        let row = self
            .store
            .with_connection(|connection| -> FleetRepositoryResult<Option<VehicleRow>> {
                Ok(vehicles::table
                    .filter(vehicles::vehicle_id.eq(id.as_str()))
                    .select(VehicleRow::as_select())
                    .first::<VehicleRow>(connection)
                    .optional()?)
            })?;
        row.map(row_to_vehicle).transpose()
    }

    fn list_vehicles(&self) -> FleetRepositoryResult<Vec<Vehicle>> {
        let rows = self
            .store
            .with_connection(|connection| -> FleetRepositoryResult<Vec<VehicleRow>> {
                Ok(vehicles::table
                    .order(vehicles::vehicle_id.asc())
                    .select(VehicleRow::as_select())
                    .load::<VehicleRow>(connection)?)
            })?;
        rows.into_iter().map(row_to_vehicle).collect()
    }

    fn list_vehicles_by_status(
        &self,
        status: VehicleStatus,
    ) -> FleetRepositoryResult<Vec<Vehicle>> {
        let rows = self
            .store
            .with_connection(|connection| -> FleetRepositoryResult<Vec<VehicleRow>> {
                Ok(vehicles::table
                    .filter(vehicles::status.eq(status.as_str()))
                    .order(vehicles::vehicle_id.asc())
                    .select(VehicleRow::as_select())
                    .load::<VehicleRow>(connection)?)
            })?;
        rows.into_iter().map(row_to_vehicle).collect()
    }

    fn add_call_schedule(&self, call: &CallSchedule) -> FleetRepositoryResult<()> {
        let row = to_call_row(call);
        self.store
            .with_connection(|connection| -> FleetRepositoryResult<usize> {
                diesel::insert_into(call_schedules::table)
                    .values(&row)
                    .execute(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            FleetRepositoryError::DuplicateCall(call.id().clone())
                        }
                        _ => FleetRepositoryError::persistence(err),
                    })
            })?;
        tracing::debug!(call_id = %call.id(), "call schedule added");
        Ok(())
    }

    fn remove_call_schedule(&self, id: &CallId) -> FleetRepositoryResult<()> {
        let removed =
            self.store
                .with_connection(|connection| -> FleetRepositoryResult<usize> {
                    Ok(diesel::delete(
                        call_schedules::table.filter(call_schedules::call_id.eq(id.as_str())),
                    )
                    .execute(connection)?)
                })?;
        tracing::debug!(call_id = %id, removed, "call schedule removed");
        Ok(())
    }

    fn get_call_schedule(&self, id: &CallId) -> FleetRepositoryResult<Option<CallSchedule>> {
        let row = self.store.with_connection(
            |connection| -> FleetRepositoryResult<Option<CallScheduleRow>> {
                Ok(call_schedules::table
                    .filter(call_schedules::call_id.eq(id.as_str()))
                    .select(CallScheduleRow::as_select())
                    .first::<CallScheduleRow>(connection)
                    .optional()?)
            },
        )?;
        row.map(row_to_call).transpose()
    }

    fn list_call_schedules(&self) -> FleetRepositoryResult<Vec<CallSchedule>> {
        let rows = self
            .store
            .with_connection(|connection| -> FleetRepositoryResult<Vec<CallScheduleRow>> {
                Ok(call_schedules::table
                    .order(call_schedules::call_id.asc())
                    .select(CallScheduleRow::as_select())
                    .load::<CallScheduleRow>(connection)?)
            })?;
        rows.into_iter().map(row_to_call).collect()
    }

    fn assign_vehicle_to_call(
        &self,
        call_id: &CallId,
        vehicle_id: &VehicleId,
    ) -> FleetRepositoryResult<()> {
        self.store
            .transaction(|connection| -> FleetRepositoryResult<()> {
                let calls_updated = diesel::update(
                    call_schedules::table.filter(call_schedules::call_id.eq(call_id.as_str())),
                )
                .set(call_schedules::vehicle_id.eq(Some(vehicle_id.as_str())))
                .execute(connection)?;
                if calls_updated == 0 {
                    return Err(FleetRepositoryError::CallNotFound(call_id.clone()));
                }

                let vehicles_updated = diesel::update(
                    vehicles::table.filter(vehicles::vehicle_id.eq(vehicle_id.as_str())),
                )
                .set(vehicles::status.eq(VehicleStatus::AssignedToCall.as_str()))
                .execute(connection)?;
                if vehicles_updated == 0 {
                    // Returning an error rolls back the call update above.
                    return Err(FleetRepositoryError::VehicleNotFound(vehicle_id.clone()));
                }
                Ok(())
            })?;
        tracing::debug!(call_id = %call_id, vehicle_id = %vehicle_id, "vehicle assigned to call");
        Ok(())
    }

    fn add_maintenance_record(
        &self,
        vehicle_id: &VehicleId,
        job: &Maintenance,
    ) -> FleetRepositoryResult<MaintenanceRecord> {
        let new_row = NewMaintenanceRow {
            vehicle_id: vehicle_id.as_str(),
            date: job.date(),
            description: job.description(),
            completed: false,
        };
        let id = self
            .store
            .with_connection(|connection| -> FleetRepositoryResult<i64> {
                Ok(diesel::insert_into(maintenance::table)
                    .values(&new_row)
                    .returning(maintenance::id)
                    .get_result::<i64>(connection)?)
            })?;
        tracing::debug!(maintenance_id = id, vehicle_id = %vehicle_id, "maintenance record added");

        Ok(MaintenanceRecord::new(
            MaintenanceId::new(id),
            vehicle_id.clone(),
            Maintenance::new(job.date(), job.description()),
        ))
    }

    fn remove_maintenance_record(&self, id: MaintenanceId) -> FleetRepositoryResult<()> {
        let removed =
            self.store
                .with_connection(|connection| -> FleetRepositoryResult<usize> {
                    Ok(
                        diesel::delete(maintenance::table.filter(maintenance::id.eq(id.value())))
                            .execute(connection)?,
                    )
                })?;
        tracing::debug!(maintenance_id = %id, removed, "maintenance record removed");
        Ok(())
    }

    fn complete_maintenance_record(&self, id: MaintenanceId) -> FleetRepositoryResult<()> {
        let updated =
            self.store
                .with_connection(|connection| -> FleetRepositoryResult<usize> {
                    Ok(
                        diesel::update(maintenance::table.filter(maintenance::id.eq(id.value())))
                            .set(maintenance::completed.eq(true))
                            .execute(connection)?,
                    )
                })?;
        tracing::debug!(maintenance_id = %id, updated, "maintenance record completed");
        Ok(())
    }

    fn get_maintenance_records(
        &self,
        vehicle_id: &VehicleId,
    ) -> FleetRepositoryResult<Vec<MaintenanceRecord>> {
        let rows = self
            .store
            .with_connection(|connection| -> FleetRepositoryResult<Vec<MaintenanceRow>> {
                Ok(maintenance::table
                    .filter(maintenance::vehicle_id.eq(vehicle_id.as_str()))
                    .order(maintenance::id.asc())
                    .select(MaintenanceRow::as_select())
                    .load::<MaintenanceRow>(connection)?)
            })?;
        Ok(rows.into_iter().map(row_to_maintenance).collect())
    }

    fn list_maintenance_records(&self) -> FleetRepositoryResult<Vec<MaintenanceRecord>> {
        let rows = self
            .store
            .with_connection(|connection| -> FleetRepositoryResult<Vec<MaintenanceRow>> {
                Ok(maintenance::table
                    .order(maintenance::id.asc())
                    .select(MaintenanceRow::as_select())
                    .load::<MaintenanceRow>(connection)?)
            })?;
        Ok(rows.into_iter().map(row_to_maintenance).collect())
    }
}

fn to_vehicle_row(vehicle: &Vehicle) -> VehicleRow {
    VehicleRow {
        vehicle_id: vehicle.id().as_str().to_owned(),
        make: vehicle.make().to_owned(),
        model: vehicle.model().to_owned(),
        year: vehicle.year(),
        status: vehicle.status().as_str().to_owned(),
    }
}

fn row_to_vehicle(row: VehicleRow) -> FleetRepositoryResult<Vehicle> {
    let VehicleRow {
        vehicle_id,
        make,
        model,
        year,
        status: persisted_status,
    } = row;
    let status = VehicleStatus::try_from(persisted_status.as_str())
        .map_err(FleetRepositoryError::persistence)?;
    Ok(Vehicle::new(VehicleId::new(vehicle_id), make, model, year).with_status(status))
}

fn to_call_row(call: &CallSchedule) -> CallScheduleRow {
    CallScheduleRow {
        call_id: call.id().as_str().to_owned(),
        customer_name: call.customer_name().to_owned(),
        date: call.date().to_owned(),
        time: call.time().to_owned(),
        job_type: call.job_type().map(|job_type| job_type.as_str().to_owned()),
        vehicle_id: call.vehicle_id().map(|id| id.as_str().to_owned()),
    }
}

fn row_to_call(row: CallScheduleRow) -> FleetRepositoryResult<CallSchedule> {
    let CallScheduleRow {
        call_id,
        customer_name,
        date,
        time,
        job_type: persisted_job_type,
        vehicle_id,
    } = row;
    let job_type = persisted_job_type
        .as_deref()
        .map(JobType::try_from)
        .transpose()
        .map_err(FleetRepositoryError::persistence)?;

    let mut call = CallSchedule::new(CallId::new(call_id), customer_name, date, time);
    if let Some(parsed) = job_type {
        call = call.with_job_type(parsed);
    }
    if let Some(assigned) = vehicle_id {
        call.assign_vehicle(VehicleId::new(assigned));
    }
    Ok(call)
}

fn row_to_maintenance(row: MaintenanceRow) -> MaintenanceRecord {
    MaintenanceRecord::from_persisted(PersistedMaintenanceData {
        id: MaintenanceId::new(row.id),
        vehicle_id: VehicleId::new(row.vehicle_id),
        date: row.date,
        description: row.description,
        completed: row.completed,
    })
}
