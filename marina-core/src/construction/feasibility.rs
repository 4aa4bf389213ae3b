//! Contains the rules which decide whether a boat may occupy a slot.
//!
//! Every placement decision made by any strategy goes through [`check_placement`], so all strategies
//! are compared under the same legality rules.

#[cfg(test)]
#[path = "../../tests/unit/construction/feasibility_test.rs"]
mod feasibility_test;

use crate::models::common::TimeWindow;
use crate::models::{Assignment, Boat, BoatKind, Slot, SlotCategory, SlotStatus, Snapshot};
use crate::utils::GenericError;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt::{Display, Formatter};

/// Specifies a reason why a boat cannot be placed into a slot.
/// Variants are ordered by how far the check went before it failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Violation {
    /// The boat is larger than the slot accepts.
    Dimensions,
    /// The slot category does not accept the boat kind.
    Category,
    /// The slot is not available during the requested interval.
    Availability,
    /// The slot is already occupied during the requested interval.
    Occupied,
}

impl Violation {
    /// Returns a stable code of the violation.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::Dimensions => "DIMENSIONS",
            Violation::Category => "CATEGORY",
            Violation::Availability => "AVAILABILITY",
            Violation::Occupied => "OCCUPIED",
        }
    }

    /// Returns a human readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Violation::Dimensions => "no slot accepts boat dimensions",
            Violation::Category => "no slot of a suitable category accepts the boat",
            Violation::Availability => "no suitable slot is available during the requested interval",
            Violation::Occupied => "all suitable slots are occupied during the requested interval",
        }
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

/// Keeps intervals already assigned per slot.
#[derive(Clone, Debug, Default)]
pub struct Occupancy {
    intervals: FxHashMap<String, Vec<TimeWindow>>,
}

impl Occupancy {
    /// Returns intervals assigned to the slot.
    pub fn get(&self, slot_id: &str) -> &[TimeWindow] {
        self.intervals.get(slot_id).map_or(&[], |intervals| intervals.as_slice())
    }

    /// Registers an interval on the slot. Legality is not checked here.
    pub fn add(&mut self, slot_id: &str, time: TimeWindow) {
        self.intervals.entry(slot_id.to_string()).or_default().push(time);
    }
}

/// Checks whether two half-open intervals overlap.
pub fn overlaps(a: &TimeWindow, b: &TimeWindow) -> bool {
    a.intersects(b)
}

/// Checks static compatibility of a boat and a slot: dimensions and category.
pub fn fits(boat: &Boat, slot: &Slot) -> bool {
    check_static(boat, slot).is_ok()
}

/// Checks whether the slot is administratively usable during the interval.
///
/// An available slot is usable inside its availability window or always when it has none. A reserved slot
/// is usable only inside its availability window, that is while its owner temporarily released it.
pub fn is_available(slot: &Slot, time: &TimeWindow) -> bool {
    match (slot.status, slot.availability.as_ref()) {
        (_, Some(window)) => window.contains(time),
        (SlotStatus::Available, None) => true,
        (SlotStatus::Reserved, None) => false,
    }
}

/// Checks whether a boat can occupy a slot during the given interval with already occupied intervals.
pub fn check_placement(boat: &Boat, slot: &Slot, time: &TimeWindow, occupied: &[TimeWindow]) -> Result<(), Violation> {
    check_static(boat, slot)?;

    if !is_available(slot, time) {
        return Err(Violation::Availability);
    }

    if time.intersects_any(occupied) {
        return Err(Violation::Occupied);
    }

    Ok(())
}

/// Checks whether a boat can occupy a slot for its whole requested interval.
pub fn can_place(boat: &Boat, slot: &Slot, occupied: &[TimeWindow]) -> bool {
    check_placement(boat, slot, &boat.time, occupied).is_ok()
}

/// Returns the most specific reason why the boat cannot be placed into any of the slots,
/// or `None` when some slot is still legal for it.
pub fn diagnose(boat: &Boat, slots: &[Slot], occupancy: &Occupancy) -> Option<Violation> {
    let mut reason = None;

    for slot in slots {
        match check_placement(boat, slot, &boat.time, occupancy.get(&slot.id)) {
            Ok(_) => return None,
            Err(violation) => reason = reason.max(Some(violation)),
        }
    }

    Some(reason.unwrap_or(Violation::Dimensions))
}

/// Verifies a complete assignment set against the snapshot, returns all found issues.
pub fn check_assignments(snapshot: &Snapshot, assignments: &[Assignment]) -> Result<(), Vec<GenericError>> {
    let mut errors: Vec<GenericError> = Vec::new();
    let mut seen_boats = FxHashSet::default();

    // intervals are checked against earlier ones only, so each conflict is reported once
    let mut occupancy = Occupancy::default();

    for assignment in assignments {
        let (boat, slot) = match (snapshot.boat(&assignment.boat_id), snapshot.slot(&assignment.slot_id)) {
            (Some(boat), Some(slot)) => (boat, slot),
            (None, _) => {
                errors.push(format!("unknown boat '{}'", assignment.boat_id).into());
                continue;
            }
            (_, None) => {
                errors.push(format!("unknown slot '{}' for boat '{}'", assignment.slot_id, assignment.boat_id).into());
                continue;
            }
        };

        if !seen_boats.insert(boat.id.as_str()) {
            errors.push(format!("boat '{}' is assigned more than once", boat.id).into());
        }

        if !assignment.time.is_valid() || !boat.time.contains(&assignment.time) {
            errors.push(format!("boat '{}' is assigned outside of its requested interval", boat.id).into());
        }

        if let Err(violation) = check_placement(boat, slot, &assignment.time, occupancy.get(&slot.id)) {
            let code = violation.code();
            errors.push(format!("boat '{}' cannot be placed into slot '{}': {code}", boat.id, slot.id).into());
        }

        occupancy.add(&slot.id, assignment.time.clone());
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_static(boat: &Boat, slot: &Slot) -> Result<(), Violation> {
    if !boat.dimensions.fits_into(&slot.max_boat) {
        return Err(Violation::Dimensions);
    }

    if slot.category == SlotCategory::Permanent && boat.kind == BoatKind::Transient {
        return Err(Violation::Category);
    }

    Ok(())
}
