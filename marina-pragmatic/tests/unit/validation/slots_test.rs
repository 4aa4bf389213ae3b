use super::*;
use crate::helpers::*;

fn assert_result(code: &str, action: &str, result: Option<FormatError>) {
    assert_eq!(result.clone().map(|err| err.code), Some(code.to_string()));
    assert!(result.map_or("".to_string(), |err| err.action).contains(action));
}

#[test]
fn can_detect_duplicate_slot_ids() {
    let request = create_request(vec![], vec![create_slot("slot1", 10.), create_slot("slot1", 8.)]);

    let result = check_e1004_no_slots_with_duplicate_ids(&ValidationContext::new(&request)).err();

    assert_result("E1004", "slot1", result);
}

parameterized_test! {can_detect_invalid_slot_dimensions, (physical, max_boat, expected), {
    let (length, width) = physical;
    let (max_boat_length, max_boat_width) = max_boat;
    let slot = Slot { length, width, max_boat_length, max_boat_width, ..create_slot("slot1", 10.) };
    let request = create_request(vec![], vec![slot]);

    let result = check_e1005_slot_dimensions(&ValidationContext::new(&request)).err();

    if expected {
        assert_result("E1005", "slot1", result);
    } else {
        assert!(result.is_none());
    }
}}

can_detect_invalid_slot_dimensions! {
    case_01_valid: ((12., 4.), (10., 3.5), false),
    case_02_equal: ((10., 3.5), (10., 3.5), false),
    case_03_max_length_above_physical: ((10., 4.), (11., 3.5), true),
    case_04_max_width_above_physical: ((12., 3.), (10., 3.5), true),
    case_05_zero_physical: ((0., 4.), (10., 3.5), true),
    case_06_negative_max: ((12., 4.), (-10., 3.5), true),
}

parameterized_test! {can_detect_invalid_availability_or_price, (availability, price, expected), {
    let availability: Option<(f64, f64)> = availability;
    let slot = Slot {
        availability: availability.map(|(start, end)| create_interval(start, end)),
        price,
        ..create_slot("slot1", 10.)
    };
    let request = create_request(vec![], vec![slot]);

    let result = check_e1006_slot_availability_and_price(&ValidationContext::new(&request)).err();

    if expected {
        assert_result("E1006", "slot1", result);
    } else {
        assert!(result.is_none());
    }
}}

can_detect_invalid_availability_or_price! {
    case_01_no_window: (None, Some(10.), false),
    case_02_valid_window: (Some((0., 5.)), None, false),
    case_03_inverted_window: (Some((5., 0.)), Some(10.), true),
    case_04_negative_price: (None, Some(-1.), true),
    case_05_free_slot: (None, Some(0.), false),
}

#[test]
fn can_skip_dock_references_without_docks() {
    let request = create_request(vec![], vec![create_slot("slot1", 10.)]);

    assert!(check_e1007_dock_references(&ValidationContext::new(&request)).is_ok());
}

#[test]
fn can_detect_unknown_dock_reference() {
    let request = Request {
        docks: Some(vec![create_dock("dock1")]),
        ..create_request(
            vec![],
            vec![create_slot("slot1", 10.), Slot { dock_id: "dock2".to_string(), ..create_slot("slot2", 10.) }],
        )
    };

    let result = check_e1007_dock_references(&ValidationContext::new(&request)).err();

    assert_result("E1007", "slot2", result);
}

#[test]
fn can_detect_duplicate_dock_ids() {
    let request = Request {
        docks: Some(vec![create_dock("dock1"), create_dock("dock1")]),
        ..create_request(vec![], vec![create_slot("slot1", 10.)])
    };

    let result = check_e1007_dock_references(&ValidationContext::new(&request)).err();

    assert_result("E1007", "dock1", result);
}
