//! Database files created by the desktop forms before this crate.

use crate::sqlite::helpers::{DatabaseDir, database_dir};
use diesel::{
    Connection, QueryableByName, RunQueryDsl, connection::SimpleConnection, sql_types::BigInt,
    sqlite::SqliteConnection,
};
use fleetdesk::{
    config::InventoryMode,
    fleet::{
        domain::{CallId, CallSchedule, JobType, VehicleId, VehicleStatus},
        ports::{FleetRepository, FleetRepositoryError},
    },
    system::FleetSystem,
};
use rstest::rstest;

#[derive(QueryableByName)]
struct RowCount {
    #[diesel(sql_type = BigInt)]
    total: i64,
}

const DESKTOP_SCHEMA: &str = "
CREATE TABLE vehicles (
    vehicle_id TEXT PRIMARY KEY,
    make TEXT,
    model TEXT,
    year INTEGER,
    status TEXT
);
CREATE TABLE maintenance (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    vehicle_id TEXT,
    date TEXT,
    description TEXT,
    completed INTEGER,
    FOREIGN KEY(vehicle_id) REFERENCES vehicles(vehicle_id)
);
CREATE TABLE call_schedules (
    call_id TEXT PRIMARY KEY,
    customer_name TEXT,
    date TEXT,
    time TEXT,
    job_type TEXT,
    vehicle_id TEXT,
    FOREIGN KEY(vehicle_id) REFERENCES vehicles(vehicle_id)
);
";

const MINIMAL_DESKTOP_SCHEMA: &str = "
CREATE TABLE vehicles (
    vehicle_id TEXT PRIMARY KEY,
    make TEXT,
    model TEXT,
    year INTEGER,
    status TEXT
);
CREATE TABLE maintenance (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    vehicle_id TEXT,
    date TEXT,
    description TEXT,
    completed INTEGER,
    FOREIGN KEY(vehicle_id) REFERENCES vehicles(vehicle_id)
);
CREATE TABLE call_schedules (
    call_id TEXT PRIMARY KEY,
    customer_name TEXT,
    date TEXT,
    time TEXT,
    vehicle_id TEXT,
    FOREIGN KEY(vehicle_id) REFERENCES vehicles(vehicle_id)
);
";

fn write_database(database_dir: &DatabaseDir, schema: &str, rows: &str) {
    let url = database_dir.path.to_str().expect("utf-8 temp path");
    let mut connection = SqliteConnection::establish(url).expect("create desktop database");
    connection
        .batch_execute("PRAGMA foreign_keys = OFF;")
        .expect("match desktop connection settings");
    connection.batch_execute(schema).expect("create desktop tables");
    connection.batch_execute(rows).expect("insert desktop rows");
}

fn write_desktop_database(database_dir: &DatabaseDir, rows: &str) {
    write_database(database_dir, DESKTOP_SCHEMA, rows);
}

#[rstest]
fn desktop_rows_are_read_back(database_dir: DatabaseDir) {
    write_desktop_database(
        &database_dir,
        "
        INSERT INTO vehicles VALUES ('V1', 'Ford', 'Transit', 2019, 'Assigned to Call');
        INSERT INTO vehicles VALUES ('V2', 'Iveco', 'Daily', 2015, 'In for maintenance');
        INSERT INTO maintenance (vehicle_id, date, description, completed)
            VALUES ('V2', '2024-01-10', 'Clutch', 1);
        INSERT INTO call_schedules VALUES
            ('C1', 'Ada Lovelace', '2024-02-01', '08:00', 'Drain/Sewer', 'V1');
        ",
    );

    let system =
        FleetSystem::open(&database_dir.config(InventoryMode::Volatile)).expect("open desktop db");
    let v1 = system
        .fleet()
        .get_vehicle(&VehicleId::new("V1"))
        .expect("lookup")
        .expect("vehicle exists");
    let v2 = system
        .fleet()
        .get_vehicle(&VehicleId::new("V2"))
        .expect("lookup")
        .expect("vehicle exists");
    let call = system
        .fleet()
        .get_call_schedule(&CallId::new("C1"))
        .expect("lookup")
        .expect("call exists");
    let records = system
        .fleet()
        .get_maintenance_records(&VehicleId::new("V2"))
        .expect("records");
    system.close().expect("close");

    assert_eq!(v1.status(), VehicleStatus::AssignedToCall);
    assert_eq!(v2.status(), VehicleStatus::InForMaintenance);
    assert_eq!(v2.year(), 2015);
    assert_eq!(call.job_type(), Some(JobType::DrainSewer));
    assert_eq!(call.vehicle_id(), Some(&VehicleId::new("V1")));
    assert_eq!(records.len(), 1);
    assert!(records[0].is_completed());
}

#[rstest]
fn new_maintenance_ids_continue_after_desktop_rows(database_dir: DatabaseDir) {
    write_desktop_database(
        &database_dir,
        "
        INSERT INTO maintenance (id, vehicle_id, date, description, completed)
            VALUES (41, 'V1', '2024-01-10', 'Brakes', 0);
        ",
    );

    let system =
        FleetSystem::open(&database_dir.config(InventoryMode::Volatile)).expect("open desktop db");
    let record = system
        .fleet()
        .add_maintenance_record(
            &VehicleId::new("V1"),
            &fleetdesk::fleet::domain::Maintenance::new("2024-03-01", "Tyres"),
        )
        .expect("add record");
    system.close().expect("close");

    assert_eq!(record.id().value(), 42);
}

#[rstest]
fn minimal_desktop_calls_gain_a_job_type_column(database_dir: DatabaseDir) {
    write_database(
        &database_dir,
        MINIMAL_DESKTOP_SCHEMA,
        "
        INSERT INTO vehicles VALUES ('V1', 'Ford', 'Transit', 2019, 'Available');
        INSERT INTO call_schedules VALUES ('C1', 'Ada Lovelace', '2024-02-01', '08:00', 'V1');
        ",
    );

    let system =
        FleetSystem::open(&database_dir.config(InventoryMode::Volatile)).expect("open desktop db");
    let call = system
        .fleet()
        .get_call_schedule(&CallId::new("C1"))
        .expect("lookup")
        .expect("call exists");
    system
        .fleet()
        .add_call_schedule(
            &CallSchedule::new(CallId::new("C2"), "Alan Turing", "2024-02-02", "10:00")
                .with_job_type(JobType::Plumbing),
        )
        .expect("add typed call");
    let calls = system.fleet().list_call_schedules().expect("list calls");
    system.close().expect("close");

    assert_eq!(call.customer_name(), "Ada Lovelace");
    assert_eq!(call.job_type(), None);
    assert_eq!(call.vehicle_id(), Some(&VehicleId::new("V1")));
    assert_eq!(calls.len(), 2);
    assert!(
        calls
            .iter()
            .any(|stored| stored.job_type() == Some(JobType::Plumbing))
    );
}

#[rstest]
fn unknown_stored_status_is_a_persistence_error(database_dir: DatabaseDir) {
    write_desktop_database(
        &database_dir,
        "INSERT INTO vehicles VALUES ('V1', 'Ford', 'Transit', 2019, 'Scrapped');",
    );

    let system =
        FleetSystem::open(&database_dir.config(InventoryMode::Volatile)).expect("open desktop db");
    let result = system.fleet().get_vehicle(&VehicleId::new("V1"));
    system.close().expect("close");

    assert!(
        matches!(result, Err(FleetRepositoryError::Persistence(_))),
        "expected a persistence error, got {result:?}"
    );
}

#[rstest]
fn desktop_database_gains_inventory_table_when_persistent(database_dir: DatabaseDir) {
    write_desktop_database(&database_dir, "");

    let system = FleetSystem::open(&database_dir.config(InventoryMode::Persistent))
        .expect("open desktop db");
    system.close().expect("close");

    let url = database_dir.path.to_str().expect("utf-8 temp path");
    let mut connection = SqliteConnection::establish(url).expect("reopen raw connection");
    let seeded = diesel::sql_query("SELECT COUNT(*) AS total FROM inventory")
        .get_result::<RowCount>(&mut connection)
        .expect("inventory table exists");
    assert_eq!(seeded.total, 5);
}
