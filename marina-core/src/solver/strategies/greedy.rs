#[cfg(test)]
#[path = "../../../tests/unit/solver/strategies/greedy_test.rs"]
mod greedy_test;

use super::ConfigurableStrategy;
use crate::construction::feasibility::fits;
use crate::construction::heuristics::*;
use crate::models::common::Duration;
use crate::models::{Boat, Slot, SlotCategory, SlotStatus};
use crate::utils::Float;

const SECONDS_IN_DAY: Duration = 86_400.;

/// Places boats in the caller's order into the first legal slot.
pub fn create_first_fit() -> ConfigurableStrategy {
    ConfigurableStrategy::new(Box::<InputOrdering>::default(), Box::<FirstSlotSelector>::default())
}

/// Places longer boats first into the slot with the smallest leftover capacity.
pub fn create_best_fit() -> ConfigurableStrategy {
    ConfigurableStrategy::new(Box::new(by_decreasing_length()), Box::new(KeySlotSelector::tightest()))
}

/// Places longer boats first into the slot with the largest leftover capacity.
pub fn create_worst_fit() -> ConfigurableStrategy {
    ConfigurableStrategy::new(Box::new(by_decreasing_length()), Box::new(KeySlotSelector::loosest()))
}

/// Places boats which leave soonest first into the first legal slot.
pub fn create_earliest_deadline_first() -> ConfigurableStrategy {
    ConfigurableStrategy::new(
        Box::new(KeyOrdering::ascending(Box::new(|_, boat| boat.time.end))),
        Box::<FirstSlotSelector>::default(),
    )
}

/// Places boats with the longest stays first into the slot with the fewest future conflicts.
pub fn create_longest_stay_first() -> ConfigurableStrategy {
    ConfigurableStrategy::new(
        Box::new(KeyOrdering::descending(Box::new(|_, boat| boat.time.duration()))),
        Box::new(KeySlotSelector::fewest_conflicts()),
    )
}

/// Places boats with the highest revenue potential first into the most expensive slot.
pub fn create_price_maximizing() -> ConfigurableStrategy {
    ConfigurableStrategy::new(
        Box::new(KeyOrdering::descending(Box::new(|ctx, boat| {
            boat.dimensions.length * get_max_price(ctx.snapshot.slots(), boat)
        }))),
        Box::new(KeySlotSelector::most_expensive()),
    )
}

/// Places boats by arrival into the tightest slot.
pub fn create_earliest_arrival_first() -> ConfigurableStrategy {
    ConfigurableStrategy::new(Box::new(by_arrival()), Box::new(KeySlotSelector::tightest()))
}

/// Places narrow boats first into the tightest slot.
pub fn create_smallest_first() -> ConfigurableStrategy {
    ConfigurableStrategy::new(
        Box::new(KeyOrdering::ascending(Box::new(|_, boat| boat.dimensions.width))),
        Box::new(KeySlotSelector::tightest()),
    )
}

/// Places boats with short stays first into the tightest slot to maximize turnover.
pub fn create_short_stay_first() -> ConfigurableStrategy {
    ConfigurableStrategy::new(
        Box::new(KeyOrdering::ascending(Box::new(|_, boat| boat.time.duration()))),
        Box::new(KeySlotSelector::tightest()),
    )
}

/// Places boats by arrival, filling temporarily released slots before regular ones.
pub fn create_temporary_first() -> ConfigurableStrategy {
    ConfigurableStrategy::new(
        Box::new(by_arrival()),
        Box::new(PreferenceSlotSelector::new(
            Box::new(|_, slot| is_temporarily_released(slot)),
            Box::new(KeySlotSelector::tightest()),
        )),
    )
}

/// Places boats by arrival, preferring a slot category which matches the stay length.
pub fn create_slot_type_matching() -> ConfigurableStrategy {
    ConfigurableStrategy::new(
        Box::new(by_arrival()),
        Box::new(PreferenceSlotSelector::new(
            Box::new(|boat, slot| slot.category == get_matching_category(boat)),
            Box::new(KeySlotSelector::tightest()),
        )),
    )
}

fn by_arrival() -> KeyOrdering {
    KeyOrdering::ascending(Box::new(|_, boat| boat.time.start))
}

fn by_decreasing_length() -> KeyOrdering {
    KeyOrdering::descending(Box::new(|_, boat| boat.dimensions.length))
}

fn get_max_price(slots: &[Slot], boat: &Boat) -> Float {
    slots.iter().filter(|slot| fits(boat, slot)).map(|slot| slot.price).fold(0., Float::max)
}

fn is_temporarily_released(slot: &Slot) -> bool {
    slot.status == SlotStatus::Reserved && slot.availability.is_some()
}

/// Short stays (up to a week) match guest slots, up to a month flexible ones, longer stays permanent ones.
fn get_matching_category(boat: &Boat) -> SlotCategory {
    let days = (boat.time.duration() / SECONDS_IN_DAY).floor();

    if days <= 7. {
        SlotCategory::Transient
    } else if days <= 30. {
        SlotCategory::Flexible
    } else {
        SlotCategory::Permanent
    }
}
