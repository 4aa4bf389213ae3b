use crate::generator::*;
use crate::helpers::utils::create_test_environment;
use crate::models::Snapshot;
use crate::solver::*;
use proptest::prelude::*;
use std::sync::Arc;

fn run_and_check(snapshot: Snapshot, placement_weight: f64) {
    let weights = ScoreWeights::new(placement_weight, 1. - placement_weight).expect("valid weights");
    let config = RunConfig::default().with_weights(weights).with_seed(Some(7));
    let request = RunRequest::new(Arc::new(snapshot), vec![], config);
    let solver = Solver::new(get_default_registry(), create_test_environment());

    let result = solver.run(&request).expect("run should succeed");

    result.outcomes.iter().for_each(|outcome| {
        let evaluation = &outcome.evaluation;
        assert!((0. ..=1.).contains(&evaluation.placement_rate));
        assert!((0. ..=1.).contains(&evaluation.utilization));
        assert!(evaluation.score >= 0. && evaluation.score <= 1. + 1E-9);
    });

    let max_placed = result.outcomes.iter().map(|outcome| outcome.evaluation.boats_placed).max().unwrap_or(0);
    let selected = result.selected_outcome().expect("selected outcome");
    assert_eq!(selected.evaluation.boats_placed, max_placed);

    // the earliest registered outcome wins a tie
    let first_best = result
        .outcomes
        .iter()
        .filter(|outcome| outcome.evaluation.boats_placed == max_placed)
        .fold(None, |best: Option<&StrategyOutcome>, outcome| match best {
            Some(best) if best.evaluation.score >= outcome.evaluation.score => Some(best),
            _ => Some(outcome),
        })
        .expect("best outcome");
    assert_eq!(first_best.name, selected.name);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]
    #[test]
    fn can_select_strategy_by_placed_boats_then_score(snapshot in generate_snapshot(20, 6), weight in 0_f64..=1.) {
        run_and_check(snapshot, weight);
    }
}
