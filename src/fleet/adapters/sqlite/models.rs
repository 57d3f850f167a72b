//! Diesel row models for fleet persistence.

use super::schema::{call_schedules, maintenance, vehicles};
use diesel::prelude::*;

/// Query and insert row for vehicles.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = vehicles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct VehicleRow {
    /// User-assigned vehicle key.
    pub vehicle_id: String,
    /// Manufacturer.
    pub make: String,
    /// Model name.
    pub model: String,
    /// Model year.
    pub year: i32,
    /// Status display string.
    pub status: String,
}

/// Query result row for maintenance records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = maintenance)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MaintenanceRow {
    /// Generated row identifier.
    pub id: i64,
    /// Referenced vehicle key.
    pub vehicle_id: String,
    /// Scheduled date.
    pub date: String,
    /// Job description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
}

/// Insert model for maintenance records; the identifier is generated.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = maintenance)]
pub struct NewMaintenanceRow<'a> {
    /// Referenced vehicle key.
    pub vehicle_id: &'a str,
    /// Scheduled date.
    pub date: &'a str,
    /// Job description.
    pub description: &'a str,
    /// Completion flag.
    pub completed: bool,
}

/// Query and insert row for call schedules.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = call_schedules)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CallScheduleRow {
    /// User-assigned call key.
    pub call_id: String,
    /// Customer name.
    pub customer_name: String,
    /// Call date.
    pub date: String,
    /// Call time.
    pub time: String,
    /// Optional job type display string.
    pub job_type: Option<String>,
    /// Assigned vehicle key, if any.
    pub vehicle_id: Option<String>,
}
