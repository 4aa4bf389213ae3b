#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/placement_test.rs"]
mod placement_test;

use crate::construction::feasibility::{can_place, diagnose};
use crate::construction::heuristics::*;
use crate::models::{Assignment, Slot};

/// A placement heuristic which processes boats one by one and never revisits a decision.
#[derive(Default)]
pub struct PlacementHeuristic {}

impl PlacementHeuristic {
    /// Runs placement using given ordering and slot selector specializations.
    pub fn process(
        &self,
        placement_ctx: PlacementContext,
        boat_ordering: &(dyn BoatOrdering + Send + Sync),
        slot_selector: &(dyn SlotSelector + Send + Sync),
    ) -> PlacementResult {
        let mut placement_ctx = placement_ctx;

        let mut order = boat_ordering.order(&placement_ctx);
        order.reverse();
        placement_ctx.pending = order;

        while let Some(boat_idx) = placement_ctx.pending.pop() {
            if placement_ctx.environment.is_quota_reached() {
                placement_ctx.pending.push(boat_idx);
                skip_pending(&mut placement_ctx);
                break;
            }

            let snapshot = placement_ctx.snapshot;
            let boat = &snapshot.boats()[boat_idx];

            let candidates = snapshot
                .slots()
                .iter()
                .filter(|slot| can_place(boat, slot, placement_ctx.occupancy.get(&slot.id)))
                .collect::<Vec<&Slot>>();

            match slot_selector.select(&placement_ctx, boat, candidates.as_slice()) {
                Some(slot) => {
                    placement_ctx.occupancy.add(&slot.id, boat.time.clone());
                    placement_ctx.assignments.push(Assignment {
                        boat_id: boat.id.clone(),
                        slot_id: slot.id.clone(),
                        time: boat.time.clone(),
                        strategy: placement_ctx.strategy.clone(),
                    });
                }
                None => {
                    // an empty candidate list means a legality violation, otherwise the selector declined
                    let reason = diagnose(boat, snapshot.slots(), &placement_ctx.occupancy)
                        .map_or(UnassignedReason::Skipped, UnassignedReason::Violation);
                    placement_ctx.unassigned.push(Unassigned { boat_id: boat.id.clone(), reason });
                }
            }
        }

        placement_ctx.into_result()
    }
}

fn skip_pending(placement_ctx: &mut PlacementContext) {
    placement_ctx.interrupted = true;

    let snapshot = placement_ctx.snapshot;
    let skipped = placement_ctx.pending.drain(..).rev().map(|boat_idx| Unassigned {
        boat_id: snapshot.boats()[boat_idx].id.clone(),
        reason: UnassignedReason::Skipped,
    });

    placement_ctx.unassigned.extend(skipped);
}
