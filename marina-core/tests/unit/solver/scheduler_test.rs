use super::*;
use crate::construction::heuristics::UnassignedReason;
use crate::helpers::models::*;
use crate::helpers::solver::*;
use crate::helpers::utils::create_test_environment;
use crate::solver::RunConfig;
use std::time::Duration;

fn create_scheduler() -> RunScheduler {
    RunScheduler::new(Arc::new(create_test_solver()))
}

#[test]
fn can_run_in_background() {
    let scheduler = create_scheduler();
    let snapshot = create_snapshot(vec![test_boat("b1", 6., (0., 10.))], vec![test_slot("s1", 10.)]);

    let run_id = scheduler.submit(create_test_request(snapshot, &["first_fit"])).expect("can submit");
    let status = scheduler.wait(&run_id, Duration::from_secs(30)).expect("run is known");

    match status {
        RunStatus::Complete(result) => {
            assert_eq!(result.selected, "first_fit");
            assert_eq!(result.outcomes[0].evaluation.boats_placed, 1);
        }
        status => panic!("unexpected status: {status:?}"),
    }
}

#[test]
fn can_produce_same_result_as_synchronous_run() {
    let scheduler = create_scheduler();
    let create_request = || {
        create_test_request(
            create_snapshot(
                vec![test_boat("b1", 6., (0., 10.)), test_boat("b2", 8., (5., 10.)), test_boat("b3", 6., (5., 20.))],
                vec![test_slot("s1", 10.), test_slot("s2", 7.)],
            ),
            &[],
        )
    };

    let sync_result = create_test_solver().run(&create_request()).expect("run should succeed");
    let run_id = scheduler.submit(create_request()).expect("can submit");

    match scheduler.wait(&run_id, Duration::from_secs(30)).expect("run is known") {
        RunStatus::Complete(result) => {
            assert_eq!(result.selected, sync_result.selected);
            result.outcomes.iter().zip(sync_result.outcomes.iter()).for_each(|(a, b)| {
                assert_eq!(a.assignments, b.assignments);
            });
        }
        status => panic!("unexpected status: {status:?}"),
    }
}

#[test]
fn can_reject_invalid_request_eagerly() {
    let scheduler = create_scheduler();
    let snapshot = create_snapshot(vec![], vec![]);

    let unknown = scheduler.submit(create_test_request(snapshot.clone(), &["magic"]));
    let mut request = create_test_request(snapshot, &[]);
    request.config = RunConfig::default().with_max_time(Some(0.));
    let invalid = scheduler.submit(request);

    assert_eq!(unknown.err(), Some(RunError::UnknownStrategy("magic".to_string())));
    assert!(matches!(invalid, Err(RunError::InvalidConfiguration(_))));
}

#[test]
fn can_report_unknown_run() {
    let scheduler = create_scheduler();

    assert_eq!(scheduler.status("unknown").err(), Some(RunError::UnknownRun("unknown".to_string())));
    assert_eq!(scheduler.cancel("unknown").err(), Some(RunError::UnknownRun("unknown".to_string())));
}

#[test]
fn can_cancel_run() {
    let registry = create_registry_with(vec![("waiting", Arc::new(WaitingStrategy))]);
    let scheduler = RunScheduler::new(Arc::new(Solver::new(registry, create_test_environment())));
    let snapshot = create_snapshot(
        vec![test_boat("b1", 6., (0., 10.)), test_boat("b2", 6., (10., 20.))],
        vec![test_slot("s1", 10.)],
    );

    let run_id = scheduler.submit(create_test_request(snapshot, &["waiting"])).expect("can submit");
    assert!(matches!(scheduler.status(&run_id), Ok(RunStatus::Pending)));
    scheduler.cancel(&run_id).expect("run is known");

    match scheduler.wait(&run_id, Duration::from_secs(60)).expect("run is known") {
        RunStatus::Complete(result) => {
            let outcome = &result.outcomes[0];
            assert_eq!(outcome.failure, None);
            assert!(outcome.interrupted);
            assert_eq!(outcome.evaluation.boats_placed, 0);
            assert_eq!(outcome.unassigned.len(), 2);
            assert!(outcome.unassigned.iter().all(|unassigned| unassigned.reason == UnassignedReason::Skipped));
        }
        status => panic!("unexpected status: {status:?}"),
    }
}

#[test]
fn can_forget_finished_run() {
    let scheduler = create_scheduler();
    let snapshot = create_snapshot(vec![test_boat("b1", 6., (0., 10.))], vec![test_slot("s1", 10.)]);

    let run_id = scheduler.submit(create_test_request(snapshot, &["first_fit"])).expect("can submit");
    assert!(scheduler.wait(&run_id, Duration::from_secs(30)).expect("run is known").is_finished());

    assert!(matches!(scheduler.forget(&run_id), Ok(RunStatus::Complete(_))));
    assert_eq!(scheduler.status(&run_id).err(), Some(RunError::UnknownRun(run_id.clone())));
    assert_eq!(scheduler.forget(&run_id).err(), Some(RunError::UnknownRun(run_id)));
}

#[test]
fn can_forget_pending_run() {
    let registry = create_registry_with(vec![("waiting", Arc::new(WaitingStrategy))]);
    let scheduler = RunScheduler::new(Arc::new(Solver::new(registry, create_test_environment())));
    let snapshot = create_snapshot(vec![test_boat("b1", 6., (0., 10.))], vec![test_slot("s1", 10.)]);

    let run_id = scheduler.submit(create_test_request(snapshot, &["waiting"])).expect("can submit");

    assert!(matches!(scheduler.forget(&run_id), Ok(RunStatus::Pending)));
    assert_eq!(scheduler.status(&run_id).err(), Some(RunError::UnknownRun(run_id)));
}
