#[cfg(test)]
#[path = "../../tests/unit/models/snapshot_test.rs"]
mod snapshot_test;

use crate::models::common::TimeWindow;
use crate::models::{Boat, Dock, RunError, Slot};
use rustc_hash::{FxHashMap, FxHashSet};

/// An immutable and validated view on boats, slots and docks used by a single run.
#[derive(Clone, Debug)]
pub struct Snapshot {
    boats: Vec<Boat>,
    slots: Vec<Slot>,
    docks: Vec<Dock>,
    boat_index: FxHashMap<String, usize>,
    slot_index: FxHashMap<String, usize>,
}

impl Snapshot {
    /// Creates a new snapshot. Boats keep the caller's order, slots are sorted by id.
    pub fn new(boats: Vec<Boat>, slots: Vec<Slot>, docks: Vec<Dock>) -> Result<Self, RunError> {
        boats.iter().try_for_each(|boat| boat.validate())?;
        slots.iter().try_for_each(|slot| slot.validate())?;

        let boat_index = create_index(boats.iter().map(|boat| boat.id.as_str()), "boat")?;

        let mut slots = slots;
        slots.sort_by(|a, b| a.id.cmp(&b.id));
        let slot_index = create_index(slots.iter().map(|slot| slot.id.as_str()), "slot")?;

        create_index(docks.iter().map(|dock| dock.id.as_str()), "dock")?;
        if !docks.is_empty() {
            let dock_ids = docks.iter().map(|dock| dock.id.as_str()).collect::<FxHashSet<_>>();
            if let Some(slot) = slots.iter().find(|slot| !dock_ids.contains(slot.dock_id.as_str())) {
                return Err(RunError::InvalidInput(format!(
                    "slot '{}' refers to unknown dock '{}'",
                    slot.id, slot.dock_id
                )));
            }
        }

        Ok(Self { boats, slots, docks, boat_index, slot_index })
    }

    /// Returns boats in the caller's order.
    pub fn boats(&self) -> &[Boat] {
        self.boats.as_slice()
    }

    /// Returns slots sorted by id.
    pub fn slots(&self) -> &[Slot] {
        self.slots.as_slice()
    }

    /// Returns docks.
    pub fn docks(&self) -> &[Dock] {
        self.docks.as_slice()
    }

    /// Returns a boat by its id.
    pub fn boat(&self, id: &str) -> Option<&Boat> {
        self.boat_index.get(id).map(|&idx| &self.boats[idx])
    }

    /// Returns a slot by its id.
    pub fn slot(&self, id: &str) -> Option<&Slot> {
        self.slot_index.get(id).map(|&idx| &self.slots[idx])
    }

    /// Returns an index of the slot in sorted slot list.
    pub fn slot_idx(&self, id: &str) -> Option<usize> {
        self.slot_index.get(id).copied()
    }

    /// Returns the union span of all requested boat intervals, if there is any boat.
    pub fn requested_span(&self) -> Option<TimeWindow> {
        self.boats.iter().map(|boat| boat.time.clone()).reduce(|acc, time| acc.span(&time))
    }
}

fn create_index<'a>(ids: impl Iterator<Item = &'a str>, kind: &str) -> Result<FxHashMap<String, usize>, RunError> {
    let mut index = FxHashMap::default();

    for (idx, id) in ids.enumerate() {
        if index.insert(id.to_string(), idx).is_some() {
            return Err(RunError::InvalidInput(format!("duplicate {kind} id: '{id}'")));
        }
    }

    Ok(index)
}
