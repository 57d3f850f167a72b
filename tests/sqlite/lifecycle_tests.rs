//! Open, close and reopen tests for [`FleetSystem`].

use crate::sqlite::helpers::{DatabaseDir, database_dir, heating_call, vehicle};
use fleetdesk::{
    config::{InventoryMode, StoreConfig},
    fleet::{
        domain::{CallId, Maintenance, VehicleId, VehicleStatus},
        ports::FleetRepository,
        services::DispatchRequest,
    },
    inventory::domain::KitType,
    system::FleetSystem,
};
use rstest::rstest;

#[rstest]
fn records_survive_close_and_reopen(database_dir: DatabaseDir) {
    let config = database_dir.config(InventoryMode::Volatile);

    let system = FleetSystem::open(&config).expect("first open");
    system.fleet().add_vehicle(&vehicle("V1")).expect("add vehicle");
    system
        .fleet()
        .add_call_schedule(&heating_call("C1"))
        .expect("add call");
    let record = system
        .fleet()
        .add_maintenance_record(
            &VehicleId::new("V1"),
            &Maintenance::new("2024-06-01", "Oil change"),
        )
        .expect("add maintenance");
    system
        .fleet()
        .complete_maintenance_record(record.id())
        .expect("complete maintenance");
    system.close().expect("close");

    let reopened = FleetSystem::open(&config).expect("second open");
    let vehicles = reopened.fleet().list_vehicles().expect("list vehicles");
    let calls = reopened.fleet().list_call_schedules().expect("list calls");
    let records = reopened
        .fleet()
        .list_maintenance_records()
        .expect("list maintenance");
    reopened.close().expect("close");

    assert_eq!(vehicles, vec![vehicle("V1")]);
    assert_eq!(calls, vec![heating_call("C1")]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id(), record.id());
    assert!(records[0].is_completed());
}

#[rstest]
fn reopening_an_existing_file_keeps_its_rows(database_dir: DatabaseDir) {
    let config = database_dir.config(InventoryMode::Persistent);

    for attempt in 0..3 {
        let system = FleetSystem::open(&config).expect("open");
        system
            .fleet()
            .add_vehicle(&vehicle(&format!("V{attempt}")))
            .expect("add vehicle");
        system.close().expect("close");
    }

    let system = FleetSystem::open(&config).expect("final open");
    let count = system.fleet().list_vehicles().expect("list").len();
    system.close().expect("close");

    assert_eq!(count, 3);
}

#[rstest]
fn dispatch_is_visible_after_reopen(database_dir: DatabaseDir) {
    let config = database_dir.config(InventoryMode::Persistent);
    let system = FleetSystem::open(&config).expect("open");
    system.fleet().add_vehicle(&vehicle("V1")).expect("add vehicle");
    system
        .fleet()
        .add_call_schedule(&heating_call("C1"))
        .expect("add call");

    let outcome = system
        .dispatch()
        .dispatch(&DispatchRequest::new(CallId::new("C1"), VehicleId::new("V1")))
        .expect("dispatch");
    assert_eq!(outcome.remaining, 4);
    system.close().expect("close");

    let reopened = FleetSystem::open(&config).expect("reopen");
    let vehicle = reopened
        .fleet()
        .get_vehicle(&VehicleId::new("V1"))
        .expect("lookup")
        .expect("vehicle exists");
    let call = reopened
        .fleet()
        .get_call_schedule(&CallId::new("C1"))
        .expect("lookup")
        .expect("call exists");
    let available = reopened
        .dispatch()
        .available_vehicles()
        .expect("available vehicles");
    reopened.close().expect("close");

    assert_eq!(vehicle.status(), VehicleStatus::AssignedToCall);
    assert_eq!(call.vehicle_id(), Some(&VehicleId::new("V1")));
    assert!(available.is_empty());
}

#[rstest]
fn close_after_using_every_service_releases_the_store(database_dir: DatabaseDir) {
    let system = FleetSystem::open(&database_dir.config(InventoryMode::Persistent)).expect("open");
    system.fleet().add_vehicle(&vehicle("V1")).expect("add vehicle");
    system
        .fleet()
        .add_call_schedule(&heating_call("C1"))
        .expect("add call");
    system
        .dispatch()
        .dispatch(&DispatchRequest::new(CallId::new("C1"), VehicleId::new("V1")))
        .expect("dispatch");
    system
        .inventory()
        .restock_item(KitType::Heating, 2)
        .expect("restock");

    let result = system.close();

    assert!(result.is_ok(), "store still shared at close: {result:?}");
}

#[rstest]
fn orphaned_references_survive_reopen(database_dir: DatabaseDir) {
    let config = database_dir.config(InventoryMode::Volatile);
    let system = FleetSystem::open(&config).expect("open");
    system
        .fleet()
        .add_call_schedule(&heating_call("C1").with_vehicle(VehicleId::new("GHOST")))
        .expect("add call with unknown vehicle");
    system
        .fleet()
        .add_maintenance_record(
            &VehicleId::new("GHOST"),
            &Maintenance::new("2024-06-01", "Brakes"),
        )
        .expect("add maintenance for unknown vehicle");
    system.close().expect("close");

    let reopened = FleetSystem::open(&config).expect("reopen");
    let call = reopened
        .fleet()
        .get_call_schedule(&CallId::new("C1"))
        .expect("lookup")
        .expect("call exists");
    let records = reopened
        .fleet()
        .get_maintenance_records(&VehicleId::new("GHOST"))
        .expect("records");
    reopened.close().expect("close");

    assert_eq!(call.vehicle_id(), Some(&VehicleId::new("GHOST")));
    assert_eq!(records.len(), 1);
}

#[rstest]
fn in_memory_store_starts_empty_every_time() {
    let config = StoreConfig::in_memory();

    let system = FleetSystem::open(&config).expect("open");
    system.fleet().add_vehicle(&vehicle("V1")).expect("add vehicle");
    assert_eq!(system.store().location(), ":memory:");
    system.close().expect("close");

    let fresh = FleetSystem::open(&config).expect("reopen");
    let vehicles = fresh.fleet().list_vehicles().expect("list");
    fresh.close().expect("close");

    assert!(vehicles.is_empty());
}

#[rstest]
fn opening_a_directory_path_fails(database_dir: DatabaseDir) {
    let config = StoreConfig::new(database_dir.dir.path());

    assert!(FleetSystem::open(&config).is_err());
}
