use super::*;
use crate::helpers::*;
use marina_core::solver::get_default_registry;
use std::sync::Arc;

#[test]
fn can_create_solution_from_run_result() {
    let (_, result) = solve_request(create_overlapping_request());

    let solution = create_solution(&result, Some("summary".to_string())).expect("cannot create solution");

    assert_eq!(solution.selected_strategy, "first_fit");
    assert_eq!(solution.seed, 42);
    assert_eq!(solution.narrative.as_deref(), Some("summary"));
    assert_eq!(solution.strategies.keys().collect::<Vec<_>>(), vec!["best_fit", "first_fit"]);
    assert_eq!(
        solution.strategies["first_fit"],
        vec![
            Assignment {
                boat_id: "boat1".to_string(),
                slot_id: "slot1".to_string(),
                start: format_day(0.),
                end: format_day(2.)
            },
            Assignment {
                boat_id: "boat2".to_string(),
                slot_id: "slot2".to_string(),
                start: format_day(1.),
                end: format_day(3.)
            },
        ]
    );

    let unassigned = &solution.unassigned["first_fit"];
    assert_eq!(unassigned.len(), 1);
    assert_eq!(unassigned[0].boat_id, "boat3");
    assert_eq!(unassigned[0].code, "OCCUPIED");

    let evaluation = &solution.evaluations["first_fit"];
    assert_eq!(evaluation.boats_placed, 2);
    assert_eq!(evaluation.total_boats, 3);
    assert!(solution.failures.is_empty());
}

#[test]
fn can_write_run_result_as_json() {
    let (_, result) = solve_request(create_overlapping_request());
    let mut buffer = Vec::new();

    result.write_pragmatic_json(BufWriter::new(&mut buffer)).expect("cannot write");

    let json = String::from_utf8(buffer).expect("not utf8");
    assert!(json.contains("\"selectedStrategy\": \"first_fit\""));
    assert!(json.contains("\"boatsPlaced\": 2"));
    assert!(!json.contains("narrative"));
}

#[test]
fn can_create_run_statuses() {
    let (_, result) = solve_request(create_overlapping_request());

    let pending = create_run_status("run1", &CoreRunStatus::Pending).expect("cannot create status");
    let complete = create_run_status("run1", &CoreRunStatus::Complete(Arc::new(result))).expect("cannot create status");
    let failed = create_run_status("run1", &CoreRunStatus::Failed("boom".to_string())).expect("cannot create status");

    assert_eq!(pending.status, RunState::Pending);
    assert!(pending.result.is_none());
    assert_eq!(complete.status, RunState::Complete);
    assert_eq!(complete.result.map(|solution| solution.selected_strategy), Some("first_fit".to_string()));
    assert_eq!(failed.status, RunState::Failed);
    assert_eq!(failed.reason, Some("boom".to_string()));
}

#[test]
fn can_create_catalog_in_registration_order() {
    let catalog = create_catalog(get_default_registry().as_ref());

    assert_eq!(catalog.len(), 13);
    assert_eq!(catalog[0].name, "first_fit");
    assert_eq!(catalog[1].name, "best_fit");
    assert!(catalog.iter().all(|entry| !entry.description.is_empty()));

    let mut buffer = Vec::new();
    serialize_catalog(BufWriter::new(&mut buffer), catalog.as_slice()).expect("cannot write");
    let json = String::from_utf8(buffer).expect("not utf8");
    assert!(json.contains("\"name\": \"simulated_annealing\""));
}
