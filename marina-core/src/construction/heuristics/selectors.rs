#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/selectors_test.rs"]
mod selectors_test;

use crate::construction::feasibility::{fits, is_available};
use crate::construction::heuristics::PlacementContext;
use crate::models::{Boat, Slot};
use crate::utils::{Float, compare_floats};
use rand::prelude::SliceRandom;

/// Decides in which order boats are considered.
pub trait BoatOrdering {
    /// Returns boat indices in the order of processing.
    fn order(&self, ctx: &PlacementContext) -> Vec<usize>;
}

/// Keeps boats in the order supplied by the caller.
#[derive(Default)]
pub struct InputOrdering {}

impl BoatOrdering for InputOrdering {
    fn order(&self, ctx: &PlacementContext) -> Vec<usize> {
        (0..ctx.snapshot.boats().len()).collect()
    }
}

/// A boat key function used by [`KeyOrdering`].
pub type BoatKeyFn = Box<dyn Fn(&PlacementContext, &Boat) -> Float + Send + Sync>;

/// Orders boats by a numeric key. The sort is stable: boats with equal keys keep the caller's order.
pub struct KeyOrdering {
    key: BoatKeyFn,
    descending: bool,
}

impl KeyOrdering {
    /// Creates an ordering by ascending key.
    pub fn ascending(key: BoatKeyFn) -> Self {
        Self { key, descending: false }
    }

    /// Creates an ordering by descending key.
    pub fn descending(key: BoatKeyFn) -> Self {
        Self { key, descending: true }
    }
}

impl BoatOrdering for KeyOrdering {
    fn order(&self, ctx: &PlacementContext) -> Vec<usize> {
        let boats = ctx.snapshot.boats();
        let mut keyed = boats.iter().enumerate().map(|(idx, boat)| (idx, (self.key)(ctx, boat))).collect::<Vec<_>>();

        keyed.sort_by(|(_, a), (_, b)| {
            let ordering = compare_floats(*a, *b);
            if self.descending { ordering.reverse() } else { ordering }
        });

        keyed.into_iter().map(|(idx, _)| idx).collect()
    }
}

/// Shuffles boats using the context's random generator.
#[derive(Default)]
pub struct ShuffledOrdering {}

impl BoatOrdering for ShuffledOrdering {
    fn order(&self, ctx: &PlacementContext) -> Vec<usize> {
        let mut order = (0..ctx.snapshot.boats().len()).collect::<Vec<_>>();
        order.shuffle(&mut ctx.environment.random.get_rng());

        order
    }
}

/// Uses an explicit permutation of boat indices.
pub struct FixedOrdering {
    order: Vec<usize>,
}

impl FixedOrdering {
    /// Creates a new instance of `FixedOrdering`.
    pub fn new(order: Vec<usize>) -> Self {
        Self { order }
    }
}

impl BoatOrdering for FixedOrdering {
    fn order(&self, _: &PlacementContext) -> Vec<usize> {
        self.order.clone()
    }
}

/// Chooses a slot among legal candidates. Candidates are sorted by slot id.
pub trait SlotSelector {
    /// Returns a chosen slot or `None` to leave the boat unplaced.
    fn select<'s>(&self, ctx: &PlacementContext, boat: &Boat, candidates: &[&'s Slot]) -> Option<&'s Slot>;
}

/// Takes the first legal slot.
#[derive(Default)]
pub struct FirstSlotSelector {}

impl SlotSelector for FirstSlotSelector {
    fn select<'s>(&self, _: &PlacementContext, _: &Boat, candidates: &[&'s Slot]) -> Option<&'s Slot> {
        candidates.first().copied()
    }
}

/// A slot key function used by [`KeySlotSelector`].
pub type SlotKeyFn = Box<dyn Fn(&PlacementContext, &Boat, &Slot) -> Float + Send + Sync>;

/// Selects a slot with the lowest (or highest) key, ties are resolved to the lowest slot id.
pub struct KeySlotSelector {
    key: SlotKeyFn,
    maximize: bool,
}

impl KeySlotSelector {
    /// Creates a selector which prefers the lowest key.
    pub fn minimizing(key: SlotKeyFn) -> Self {
        Self { key, maximize: false }
    }

    /// Creates a selector which prefers the highest key.
    pub fn maximizing(key: SlotKeyFn) -> Self {
        Self { key, maximize: true }
    }

    /// Creates a selector which minimizes leftover capacity (tightest fit).
    pub fn tightest() -> Self {
        Self::minimizing(Box::new(|_, boat, slot| get_leftover(boat, slot)))
    }

    /// Creates a selector which maximizes leftover capacity (spreads load).
    pub fn loosest() -> Self {
        Self::maximizing(Box::new(|_, boat, slot| get_leftover(boat, slot)))
    }

    /// Creates a selector which takes the most expensive slot.
    pub fn most_expensive() -> Self {
        Self::maximizing(Box::new(|_, _, slot| slot.price))
    }

    /// Creates a selector which takes the slot with the fewest conflicts with boats not processed yet.
    pub fn fewest_conflicts() -> Self {
        Self::minimizing(Box::new(|ctx, boat, slot| count_conflicts(ctx, boat, slot) as Float))
    }
}

impl SlotSelector for KeySlotSelector {
    fn select<'s>(&self, ctx: &PlacementContext, boat: &Boat, candidates: &[&'s Slot]) -> Option<&'s Slot> {
        // min_by returns the first of equal elements and candidates are sorted by id
        candidates
            .iter()
            .map(|&slot| (slot, (self.key)(ctx, boat, slot)))
            .min_by(|(_, a), (_, b)| {
                let ordering = compare_floats(*a, *b);
                if self.maximize { ordering.reverse() } else { ordering }
            })
            .map(|(slot, _)| slot)
    }
}

/// A slot predicate used by [`PreferenceSlotSelector`].
pub type SlotPredicateFn = Box<dyn Fn(&Boat, &Slot) -> bool + Send + Sync>;

/// Restricts choice to preferred slots when there is any, otherwise falls back to all candidates.
pub struct PreferenceSlotSelector {
    is_preferred: SlotPredicateFn,
    inner: Box<dyn SlotSelector + Send + Sync>,
}

impl PreferenceSlotSelector {
    /// Creates a new instance of `PreferenceSlotSelector`.
    pub fn new(is_preferred: SlotPredicateFn, inner: Box<dyn SlotSelector + Send + Sync>) -> Self {
        Self { is_preferred, inner }
    }
}

impl SlotSelector for PreferenceSlotSelector {
    fn select<'s>(&self, ctx: &PlacementContext, boat: &Boat, candidates: &[&'s Slot]) -> Option<&'s Slot> {
        let preferred = candidates.iter().copied().filter(|slot| (self.is_preferred)(boat, slot)).collect::<Vec<_>>();

        if preferred.is_empty() {
            self.inner.select(ctx, boat, candidates)
        } else {
            self.inner.select(ctx, boat, preferred.as_slice())
        }
    }
}

/// Returns leftover capacity of the slot when it hosts the boat.
pub fn get_leftover(boat: &Boat, slot: &Slot) -> Float {
    (slot.max_boat.width - boat.dimensions.width) + (slot.max_boat.length - boat.dimensions.length)
}

/// Counts not yet processed boats which would compete with the boat for the slot.
fn count_conflicts(ctx: &PlacementContext, boat: &Boat, slot: &Slot) -> usize {
    let boats = ctx.snapshot.boats();

    ctx.pending
        .iter()
        .map(|&idx| &boats[idx])
        .filter(|other| other.time.intersects(&boat.time) && fits(other, slot) && is_available(slot, &other.time))
        .count()
}

