#[cfg(test)]
#[path = "../../../tests/unit/format/problem/reader_test.rs"]
mod reader_test;

use super::*;
use crate::parse_time;
use crate::validation::ValidationContext;
use marina_core::models::common::{Dimensions, TimeWindow};
use marina_core::models::{
    Boat as CoreBoat, BoatKind as CoreBoatKind, Dock as CoreDock, Slot as CoreSlot,
    SlotCategory as CoreSlotCategory, SlotStatus as CoreSlotStatus, Snapshot,
};
use marina_core::solver::{RunConfig, ScoreWeights};
use marina_core::utils::GenericError;
use std::sync::Arc;

pub(super) fn map_to_request(api_request: ApiRequest) -> Result<PragmaticRunRequest, MultiFormatError> {
    ValidationContext::new(&api_request).validate()?;

    let snapshot = map_to_snapshot(&api_request)?;
    let config = map_to_config(api_request.config.as_ref())?;
    let strategies = api_request.strategies.clone().unwrap_or_default();

    Ok(PragmaticRunRequest {
        request: CoreRunRequest::new(Arc::new(snapshot), strategies, config),
        run_in_background: api_request.run_in_background.unwrap_or(false),
    })
}

fn map_to_snapshot(api_request: &ApiRequest) -> Result<Snapshot, MultiFormatError> {
    let boats = api_request.boats.iter().map(read_boat).collect::<Result<Vec<_>, _>>()?;
    let slots = api_request.slots.iter().map(read_slot).collect::<Result<Vec<_>, _>>()?;
    let docks = api_request.docks.iter().flat_map(|docks| docks.iter()).map(read_dock).collect::<Vec<_>>();

    Snapshot::new(boats, slots, docks).map_err(to_multi_format_error)
}

fn map_to_config(config: Option<&Config>) -> Result<RunConfig, MultiFormatError> {
    let Some(config) = config else { return Ok(RunConfig::default()) };

    let weights = config
        .weights
        .as_ref()
        .map(|weights| ScoreWeights::new(weights.placement, weights.utilization))
        .transpose()
        .map_err(to_multi_format_error)?
        .unwrap_or_default();

    let horizon = config.horizon.as_ref().map(read_interval).transpose().map_err(to_multi_format_error)?;

    let config = RunConfig::default()
        .with_weights(weights)
        .with_horizon(horizon)
        .with_max_time(config.max_time)
        .with_seed(config.seed)
        .with_parallelism(config.parallelism);

    config.validate().map_err(to_multi_format_error)?;

    Ok(config)
}

fn read_boat(boat: &Boat) -> Result<CoreBoat, MultiFormatError> {
    let time = read_interval(&Interval { start: boat.arrival.clone(), end: boat.departure.clone() })
        .map_err(to_multi_format_error)?;
    let kind = match boat.kind {
        Some(BoatKind::Transient) => CoreBoatKind::Transient,
        Some(BoatKind::Resident) | None => CoreBoatKind::Resident,
    };

    let core_boat = CoreBoat::new(&boat.id, Dimensions::new(boat.length, boat.width), time)
        .map_err(to_multi_format_error)?
        .with_kind(kind);

    Ok(match &boat.name {
        Some(name) => core_boat.with_name(name),
        None => core_boat,
    })
}

fn read_slot(slot: &Slot) -> Result<CoreSlot, MultiFormatError> {
    let category = match slot.category {
        Some(SlotCategory::Permanent) => CoreSlotCategory::Permanent,
        Some(SlotCategory::Transient) => CoreSlotCategory::Transient,
        Some(SlotCategory::Flexible) | None => CoreSlotCategory::Flexible,
    };

    let status = match slot.status {
        Some(SlotStatus::Reserved) => CoreSlotStatus::Reserved,
        Some(SlotStatus::Available) | None => CoreSlotStatus::Available,
    };

    let availability = slot.availability.as_ref().map(read_interval).transpose().map_err(to_multi_format_error)?;

    let core_slot = CoreSlot::new(
        &slot.id,
        &slot.dock_id,
        Dimensions::new(slot.length, slot.width),
        Dimensions::new(slot.max_boat_length, slot.max_boat_width),
    )
    .map_err(to_multi_format_error)?
    .with_category(category)
    .with_status(status)
    .with_availability(availability)
    .with_price(slot.price.unwrap_or(0.));

    core_slot.validate().map_err(to_multi_format_error)?;

    Ok(core_slot)
}

fn read_dock(dock: &Dock) -> CoreDock {
    CoreDock {
        id: dock.id.clone(),
        name: dock.name.clone(),
        position: dock.position.as_ref().map_or((0., 0.), |position| (position.x, position.y)),
        extent: dock.extent.unwrap_or(0.),
    }
}

pub(crate) fn read_interval(interval: &Interval) -> Result<TimeWindow, GenericError> {
    Ok(TimeWindow::new(parse_time(&interval.start)?, parse_time(&interval.end)?))
}

fn to_multi_format_error<E: Into<GenericError>>(error: E) -> MultiFormatError {
    FormatError::new_with_details(
        "E1000".to_string(),
        "cannot create run request from input".to_string(),
        "check input values".to_string(),
        error.into().to_string(),
    )
    .into()
}
