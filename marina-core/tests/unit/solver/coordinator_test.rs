use super::*;
use crate::construction::heuristics::UnassignedReason;
use crate::helpers::models::*;
use crate::helpers::solver::*;
use crate::helpers::utils::create_test_environment;
use crate::solver::get_default_registry;
use crate::solver::strategies::{Strategy, create_first_fit};

fn create_fixed(assignments: Vec<Assignment>) -> Arc<dyn Strategy> {
    Arc::new(FixedStrategy(PlacementResult { assignments, unassigned: vec![], interrupted: false }))
}

parameterized_test! {can_place_boats_with_first_fit, (intervals, expected_placed), {
    let boats = intervals.iter().enumerate().map(|(idx, time)| test_boat(&format!("b{idx}"), 6., *time)).collect();
    let snapshot = create_snapshot(boats, vec![test_slot("s1", 10.), test_slot("s2", 10.)]);

    let result = create_test_solver().run(&create_test_request(snapshot, &["first_fit"])).expect("run should succeed");

    let evaluation = &result.outcomes[0].evaluation;
    assert_eq!(evaluation.boats_placed, expected_placed);
    assert!((evaluation.placement_rate - expected_placed as Float / 3.).abs() < 1E-9);
}}

can_place_boats_with_first_fit! {
    case_01_no_overlaps: (vec![(0., 10.), (10., 20.), (20., 30.)], 3),
    case_02_all_overlap: (vec![(0., 10.), (0., 10.), (5., 15.)], 2),
}

#[test]
fn can_skip_boat_larger_than_any_slot() {
    let snapshot = create_snapshot(
        vec![test_boat("b1", 6., (0., 10.)), test_boat("huge", 40., (0., 10.))],
        vec![test_slot("s1", 10.), test_slot("s2", 12.)],
    );

    let result = create_test_solver().run(&create_test_request(snapshot, &[])).expect("run should succeed");

    assert_eq!(result.outcomes.len(), get_default_registry().entries().len());
    result.outcomes.iter().for_each(|outcome| {
        assert_eq!(outcome.failure, None, "{} failed", outcome.name);
        assert_eq!(outcome.evaluation.boats_placed, 1, "{} placed wrong amount", outcome.name);
        assert!(outcome.assignments.iter().all(|assignment| assignment.boat_id != "huge"));
        assert!(outcome.unassigned.iter().any(|unassigned| unassigned.boat_id == "huge"));
    });
}

#[test]
fn can_handle_empty_boats() {
    let snapshot = create_snapshot(vec![], vec![test_slot("s1", 10.)]);

    let result = create_test_solver().run(&create_test_request(snapshot, &[])).expect("run should succeed");

    result.outcomes.iter().for_each(|outcome| {
        assert_eq!(outcome.evaluation.placement_rate, 1.);
        assert_eq!(outcome.evaluation.utilization, 0.);
    });
    assert_eq!(result.selected, "first_fit");
}

#[test]
fn can_break_placed_tie_by_score() {
    let snapshot = create_snapshot(vec![test_boat("b1", 6., (0., 10.))], vec![test_slot("s1", 10.)]);
    let registry = create_registry_with(vec![
        ("clipped", create_fixed(vec![test_assignment("b1", "s1", (0., 5.))])),
        ("full", create_fixed(vec![test_assignment("b1", "s1", (0., 10.))])),
    ]);
    let solver = Solver::new(registry, create_test_environment());

    let result = solver.run(&create_test_request(snapshot, &[])).expect("run should succeed");

    assert_eq!(result.selected, "full");
    let utilization = |name: &str| result.outcome(name).unwrap().evaluation.utilization;
    assert!(utilization("full") > utilization("clipped"));
}

#[test]
fn can_prefer_placed_boats_over_score() {
    let snapshot = create_snapshot(
        vec![test_boat("b1", 6., (0., 100.)), test_boat("b2", 6., (0., 1.)), test_boat("b3", 6., (1., 2.))],
        vec![test_slot("s1", 10.)],
    );
    let registry = create_registry_with(vec![
        ("long", create_fixed(vec![test_assignment("b1", "s1", (0., 100.))])),
        ("many", create_fixed(vec![test_assignment("b2", "s1", (0., 1.)), test_assignment("b3", "s1", (1., 2.))])),
    ]);
    let solver = Solver::new(registry, create_test_environment());
    let mut request = create_test_request(snapshot, &[]);
    request.config = request.config.with_weights(ScoreWeights::new(0., 1.).unwrap());

    let result = solver.run(&request).expect("run should succeed");

    assert!(result.outcome("long").unwrap().evaluation.score > result.outcome("many").unwrap().evaluation.score);
    assert_eq!(result.selected, "many");
}

#[test]
fn can_select_earliest_registered_on_full_tie() {
    let snapshot = create_snapshot(vec![test_boat("b1", 6., (0., 10.))], vec![test_slot("s1", 10.)]);

    let result = create_test_solver()
        .run(&create_test_request(snapshot, &["best_fit", "first_fit", "worst_fit"]))
        .expect("run should succeed");

    assert_eq!(result.outcomes.iter().map(|outcome| outcome.name.as_str()).collect::<Vec<_>>(), vec![
        "first_fit",
        "best_fit",
        "worst_fit"
    ]);
    assert_eq!(result.selected, "first_fit");
}

#[test]
fn can_ignore_duplicate_names() {
    let snapshot = create_snapshot(vec![test_boat("b1", 6., (0., 10.))], vec![test_slot("s1", 10.)]);

    let result = create_test_solver()
        .run(&create_test_request(snapshot, &["first_fit", "first_fit"]))
        .expect("run should succeed");

    assert_eq!(result.outcomes.len(), 1);
}

#[test]
fn can_reject_unknown_strategy() {
    let snapshot = create_snapshot(vec![test_boat("b1", 6., (0., 10.))], vec![test_slot("s1", 10.)]);

    let result = create_test_solver().run(&create_test_request(snapshot, &["first_fit", "magic"]));

    assert_eq!(result.err(), Some(RunError::UnknownStrategy("magic".to_string())));
}

parameterized_test! {can_reject_invalid_configuration, config, {
    let snapshot = create_snapshot(vec![test_boat("b1", 6., (0., 10.))], vec![test_slot("s1", 10.)]);
    let mut request = create_test_request(snapshot, &[]);
    request.config = config;

    let result = create_test_solver().run(&request);

    assert!(matches!(result, Err(RunError::InvalidConfiguration(_))));
}}

can_reject_invalid_configuration! {
    case_01_zero_time: RunConfig::default().with_max_time(Some(0.)),
    case_02_negative_time: RunConfig::default().with_max_time(Some(-5.)),
    case_03_zero_parallelism: RunConfig::default().with_parallelism(Some(0)),
    case_04_invalid_horizon: RunConfig::default().with_horizon(Some(TimeWindow::new(10., 0.))),
}

#[test]
fn can_isolate_failing_strategies() {
    let snapshot = create_snapshot(vec![test_boat("b1", 6., (0., 10.))], vec![test_slot("s1", 10.)]);
    let registry = create_registry_with(vec![
        ("panicking", Arc::new(PanickingStrategy)),
        ("failing", Arc::new(FailingStrategy)),
        ("illegal", create_fixed(vec![test_assignment("b1", "s1", (0., 10.)), test_assignment("b1", "s1", (0., 10.))])),
        ("first_fit", Arc::new(create_first_fit())),
    ]);
    let solver = Solver::new(registry, create_test_environment());

    let result = solver.run(&create_test_request(snapshot, &[])).expect("run should succeed");

    assert!(result.outcome("panicking").unwrap().failure.as_ref().unwrap().contains("broken strategy"));
    assert!(result.outcome("failing").unwrap().failure.as_ref().unwrap().contains("cannot place"));
    assert!(result.outcome("illegal").unwrap().failure.as_ref().unwrap().contains("illegal"));
    ["panicking", "failing", "illegal"].iter().for_each(|name| {
        assert_eq!(result.outcome(name).unwrap().evaluation, Evaluation::failure(1));
    });
    assert_eq!(result.selected, "first_fit");
}

#[test]
fn can_return_partial_results_when_cancelled() {
    let snapshot = create_snapshot(
        vec![test_boat("b1", 6., (0., 10.)), test_boat("b2", 6., (10., 20.))],
        vec![test_slot("s1", 10.)],
    );
    let quota = CancellationQuota::default();
    quota.cancel();

    let result = create_test_solver()
        .run_with_quota(&create_test_request(snapshot, &["first_fit", "random_restart"]), Some(Arc::new(quota)))
        .expect("run should succeed");

    result.outcomes.iter().for_each(|outcome| {
        assert!(outcome.interrupted);
        assert_eq!(outcome.failure, None);
        assert_eq!(outcome.evaluation.boats_placed, 0);
        assert!(outcome.unassigned.iter().all(|unassigned| unassigned.reason == UnassignedReason::Skipped));
    });
}

#[test]
fn can_keep_best_random_repetition_within_configured_horizon() {
    let snapshot = create_snapshot(
        vec![test_boat("a", 6., (0., 10.)), test_boat("b", 6., (5., 100.))],
        vec![test_slot("s1", 10.)],
    );
    let mut request = create_test_request(snapshot, &["first_fit", "random_restart", "simulated_annealing"]);
    request.config = request.config.with_horizon(Some(TimeWindow::new(0., 10.)));

    let result = create_test_solver().run(&request).expect("run should succeed");

    result.outcomes.iter().for_each(|outcome| {
        assert_eq!(outcome.assignments.len(), 1, "{}", outcome.name);
        assert_eq!(outcome.assignments[0].boat_id, "a", "{}", outcome.name);
        assert_eq!(outcome.evaluation.utilization, 1., "{}", outcome.name);
    });
}

#[test]
fn can_share_run_deadline_between_strategies() {
    let snapshot = create_snapshot(vec![test_boat("b1", 6., (0., 10.))], vec![test_slot("s1", 10.)]);
    let registry = create_registry_with(vec![
        ("first", Arc::new(WaitingStrategy) as Arc<dyn Strategy>),
        ("second", Arc::new(WaitingStrategy)),
    ]);
    let solver = Solver::new(registry, create_test_environment());
    let mut request = create_test_request(snapshot, &[]);
    request.config = request.config.with_max_time(Some(0.5)).with_parallelism(Some(1));

    let result = solver.run(&request).expect("run should succeed");

    assert!(result.outcomes.iter().all(|outcome| outcome.interrupted && outcome.failure.is_none()));
    let first = result.outcome("first").unwrap().duration;
    let second = result.outcome("second").unwrap().duration;
    assert!(first.max(second) >= Duration::from_millis(450));
    assert!(first.min(second) < Duration::from_millis(250));
}

#[test]
fn can_produce_same_result_for_same_seed() {
    let create_request = || {
        let boats = (0..30)
            .map(|idx| {
                let start = (idx % 7) as Float * 10.;
                test_boat(&format!("b{idx}"), 4. + (idx % 5) as Float, (start, start + 15. + (idx % 3) as Float * 10.))
            })
            .collect();
        let slots = (0..6).map(|idx| test_slot(&format!("s{idx}"), 5. + idx as Float)).collect();

        create_test_request(create_snapshot(boats, slots), &[])
    };

    let first = create_test_solver().run(&create_request()).expect("run should succeed");
    let second = create_test_solver().run(&create_request()).expect("run should succeed");

    assert_eq!(first.selected, second.selected);
    first.outcomes.iter().zip(second.outcomes.iter()).for_each(|(a, b)| {
        assert_eq!(a.assignments, b.assignments, "{} is not deterministic", a.name);
        assert_eq!(a.evaluation, b.evaluation);
    });
}
