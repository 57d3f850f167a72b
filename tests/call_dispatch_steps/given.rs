//! Given steps for call dispatch BDD scenarios.

use super::world::DispatchWorld;
use eyre::WrapErr;
use fleetdesk::{
    fleet::{
        domain::{CallId, CallSchedule, JobType, Vehicle, VehicleId, VehicleStatus},
        ports::FleetRepository,
    },
    inventory::domain::KitType,
};
use rstest_bdd_macros::given;

#[given(r#"a vehicle "{id}" that is "{status_name}""#)]
fn vehicle_with_status(
    world: &mut DispatchWorld,
    id: String,
    status_name: String,
) -> Result<(), eyre::Report> {
    let status = VehicleStatus::try_from(status_name.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let vehicle = Vehicle::new(VehicleId::new(id), "Ford", "Transit", 2019).with_status(status);
    world
        .system
        .fleet()
        .add_vehicle(&vehicle)
        .wrap_err("add vehicle for dispatch scenario")?;
    Ok(())
}

#[given(r#"a call "{id}" for a "{job_name}" job"#)]
fn call_for_job(
    world: &mut DispatchWorld,
    id: String,
    job_name: String,
) -> Result<(), eyre::Report> {
    let job_type = JobType::try_from(job_name.as_str())
        .map_err(|err| eyre::eyre!("invalid job type in scenario: {err}"))?;
    let call = CallSchedule::new(CallId::new(id), "Ada Lovelace", "2024-05-01", "09:30")
        .with_job_type(job_type);
    world
        .system
        .fleet()
        .add_call_schedule(&call)
        .wrap_err("add call for dispatch scenario")?;
    Ok(())
}

#[given(r#"the "{kit_name}" stock has been used up"#)]
fn stock_used_up(world: &mut DispatchWorld, kit_name: String) -> Result<(), eyre::Report> {
    let kit = KitType::try_from(kit_name.as_str())
        .map_err(|err| eyre::eyre!("invalid kit in scenario: {err}"))?;
    let inventory = world.system.inventory();
    while inventory.quantity(kit).wrap_err("read kit stock")? > 0 {
        inventory.use_item(kit).wrap_err("use kit")?;
    }
    Ok(())
}
