//! Volatile and persistent kit stock across restarts.

use crate::sqlite::helpers::{DatabaseDir, database_dir};
use fleetdesk::{
    config::{InventoryMode, StoreConfig},
    inventory::domain::KitType,
    system::FleetSystem,
};
use rstest::rstest;

fn use_two_ac_kits(config: &StoreConfig) {
    let system = FleetSystem::open(config).expect("open");
    system.inventory().use_item(KitType::Ac).expect("first use");
    system.inventory().use_item(KitType::Ac).expect("second use");
    system.close().expect("close");
}

#[rstest]
fn volatile_stock_resets_on_reopen(database_dir: DatabaseDir) {
    let config = database_dir.config(InventoryMode::Volatile);
    use_two_ac_kits(&config);

    let system = FleetSystem::open(&config).expect("reopen");
    let mode = system.inventory_mode();
    let quantity = system.inventory().quantity(KitType::Ac).expect("quantity");
    system.close().expect("close");

    assert_eq!(mode, InventoryMode::Volatile);
    assert_eq!(quantity, 5);
}

#[rstest]
fn persistent_stock_survives_reopen(database_dir: DatabaseDir) {
    let config = database_dir.config(InventoryMode::Persistent);
    use_two_ac_kits(&config);

    let system = FleetSystem::open(&config).expect("reopen");
    let snapshot = system.inventory().snapshot().expect("snapshot");
    system.close().expect("close");

    assert_eq!(snapshot.quantity(KitType::Ac), 3);
    assert_eq!(snapshot.quantity(KitType::Heating), 5);
}

#[rstest]
fn persistent_mode_selected_from_json(database_dir: DatabaseDir) {
    let json = serde_json::json!({
        "database_path": database_dir.path,
        "inventory": "persistent",
    })
    .to_string();
    let config = StoreConfig::from_json_str(&json).expect("valid config");
    use_two_ac_kits(&config);

    let system = FleetSystem::open(&config).expect("reopen");
    let quantity = system.inventory().quantity(KitType::Ac).expect("quantity");
    system.close().expect("close");

    assert_eq!(quantity, 3);
}

#[rstest]
fn switching_to_volatile_ignores_stored_stock(database_dir: DatabaseDir) {
    use_two_ac_kits(&database_dir.config(InventoryMode::Persistent));

    let system = FleetSystem::open(&database_dir.config(InventoryMode::Volatile)).expect("reopen");
    let quantity = system.inventory().quantity(KitType::Ac).expect("quantity");
    system.close().expect("close");

    assert_eq!(quantity, 5);
}
