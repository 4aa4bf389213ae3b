use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::create_test_environment;
use crate::models::{BoatKind, Snapshot};
use crate::solver::strategies::Strategy;

fn place(strategy: &ConfigurableStrategy, snapshot: &Snapshot) -> Vec<(String, String)> {
    strategy
        .place(snapshot, None, create_test_environment(), "test")
        .expect("strategy should not fail")
        .assignments
        .into_iter()
        .map(|assignment| (assignment.boat_id, assignment.slot_id))
        .collect()
}

fn pairs(values: &[(&str, &str)]) -> Vec<(String, String)> {
    values.iter().map(|(boat, slot)| (boat.to_string(), slot.to_string())).collect()
}

#[test]
fn can_use_first_fit() {
    let snapshot = create_snapshot(
        vec![test_boat("b1", 6., (0., 10.)), test_boat("b2", 6., (5., 15.))],
        vec![test_slot("s2", 10.), test_slot("s1", 10.)],
    );

    assert_eq!(place(&create_first_fit(), &snapshot), pairs(&[("b1", "s1"), ("b2", "s2")]));
}

#[test]
fn can_use_best_and_worst_fit() {
    let snapshot = create_snapshot(
        vec![test_boat("small", 5., (0., 10.)), test_boat("large", 9., (0., 10.))],
        vec![test_slot("s1", 12.), test_slot("s2", 9.5), test_slot("s3", 6.)],
    );

    assert_eq!(place(&create_best_fit(), &snapshot), pairs(&[("large", "s2"), ("small", "s3")]));
    assert_eq!(place(&create_worst_fit(), &snapshot), pairs(&[("large", "s1"), ("small", "s2")]));
}

#[test]
fn can_use_earliest_deadline_first() {
    let snapshot = create_snapshot(
        vec![test_boat("late", 6., (0., 20.)), test_boat("early", 6., (0., 5.)), test_boat("next", 6., (5., 10.))],
        vec![test_slot("s1", 10.)],
    );

    assert_eq!(place(&create_earliest_deadline_first(), &snapshot), pairs(&[("early", "s1"), ("next", "s1")]));
}

#[test]
fn can_use_longest_stay_first() {
    let snapshot = create_snapshot(
        vec![test_boat("short", 9., (0., 5.)), test_boat("long", 6., (0., 30.))],
        vec![test_slot("s1", 10.), test_slot("s2", 7.)],
    );

    // the long stay avoids s1 which is the only slot for the short stay boat
    assert_eq!(place(&create_longest_stay_first(), &snapshot), pairs(&[("long", "s2"), ("short", "s1")]));
}

#[test]
fn can_use_price_maximizing() {
    let snapshot = create_snapshot(
        vec![test_boat("small", 5., (0., 10.)), test_boat("large", 9., (0., 10.))],
        vec![
            SlotBuilder::new("cheap").max_boat(10., 3.5).price(10.).build(),
            SlotBuilder::new("premium").max_boat(10., 3.5).price(500.).build(),
        ],
    );

    assert_eq!(place(&create_price_maximizing(), &snapshot), pairs(&[("large", "premium"), ("small", "cheap")]));
}

#[test]
fn can_use_smallest_and_short_stay_first() {
    let snapshot = create_snapshot(
        vec![
            BoatBuilder::new("wide").dimensions(6., 3.4).time(0., 5.).build(),
            BoatBuilder::new("narrow").dimensions(6., 2.).time(0., 50.).build(),
        ],
        vec![test_slot("s1", 10.)],
    );

    assert_eq!(place(&create_smallest_first(), &snapshot), pairs(&[("narrow", "s1")]));
    assert_eq!(place(&create_short_stay_first(), &snapshot), pairs(&[("wide", "s1")]));
    assert_eq!(place(&create_earliest_arrival_first(), &snapshot), pairs(&[("wide", "s1")]));
}

#[test]
fn can_use_temporary_first() {
    let snapshot = create_snapshot(
        vec![test_boat("b1", 6., (10., 20.)), test_boat("b2", 6., (30., 40.))],
        vec![
            test_slot("regular", 10.),
            SlotBuilder::new("released").status(SlotStatus::Reserved).availability(0., 25.).build(),
        ],
    );

    assert_eq!(place(&create_temporary_first(), &snapshot), pairs(&[("b1", "released"), ("b2", "regular")]));
}

#[test]
fn can_use_slot_type_matching() {
    let snapshot = create_snapshot(
        vec![
            test_boat("week", 6., (0., 3. * DAY)),
            test_boat("month", 6., (0., 20. * DAY)),
            BoatBuilder::new("season").kind(BoatKind::Resident).time(0., 90. * DAY).build(),
        ],
        vec![
            SlotBuilder::new("a_permanent").category(SlotCategory::Permanent).build(),
            SlotBuilder::new("b_flexible").category(SlotCategory::Flexible).build(),
            SlotBuilder::new("c_guest").category(SlotCategory::Transient).build(),
        ],
    );

    assert_eq!(
        place(&create_slot_type_matching(), &snapshot),
        pairs(&[("week", "c_guest"), ("month", "b_flexible"), ("season", "a_permanent")])
    );
}

#[test]
fn can_keep_transient_boats_away_from_permanent_slots() {
    let snapshot = create_snapshot(
        vec![BoatBuilder::new("guest").kind(BoatKind::Transient).time(0., 90. * DAY).build()],
        vec![SlotBuilder::new("a_permanent").category(SlotCategory::Permanent).build()],
    );

    assert!(place(&create_slot_type_matching(), &snapshot).is_empty());
}
