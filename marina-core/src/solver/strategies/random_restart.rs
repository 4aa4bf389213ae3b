#[cfg(test)]
#[path = "../../../tests/unit/solver/strategies/random_restart_test.rs"]
mod random_restart_test;

use super::{Candidate, Strategy, keep_best};
use crate::construction::heuristics::*;
use crate::models::Snapshot;
use crate::models::common::TimeWindow;
use crate::solver::get_utilization;
use crate::utils::{Environment, GenericResult};
use std::sync::Arc;

/// Repeats first-fit placement with shuffled boat order and keeps the best repetition.
pub struct RandomRestart {
    restarts: usize,
    heuristic: PlacementHeuristic,
}

impl RandomRestart {
    /// Creates a new instance of `RandomRestart`. At least one repetition is always made.
    pub fn new(restarts: usize) -> Self {
        Self { restarts: restarts.max(1), heuristic: PlacementHeuristic::default() }
    }
}

impl Strategy for RandomRestart {
    fn place(
        &self,
        snapshot: &Snapshot,
        horizon: Option<&TimeWindow>,
        environment: Arc<Environment>,
        name: &str,
    ) -> GenericResult<PlacementResult> {
        let ordering = ShuffledOrdering::default();
        let selector = FirstSlotSelector::default();

        let mut best: Option<Candidate> = None;
        let mut interrupted = false;

        for restart in 0..self.restarts {
            if restart > 0 && environment.is_quota_reached() {
                interrupted = true;
                break;
            }

            let placement_ctx = PlacementContext::new(snapshot, environment.clone(), name);
            let result = self.heuristic.process(placement_ctx, &ordering, &selector);
            let utilization = get_utilization(snapshot, result.assignments.as_slice(), horizon);

            best = Some(keep_best(best, Candidate { result, utilization }));
        }

        let mut result = best.map(|candidate| candidate.result).unwrap_or_default();
        result.interrupted |= interrupted;

        Ok(result)
    }
}
