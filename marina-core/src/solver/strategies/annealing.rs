#[cfg(test)]
#[path = "../../../tests/unit/solver/strategies/annealing_test.rs"]
mod annealing_test;

use super::{AnnealingParams, Candidate, Strategy, keep_best};
use crate::construction::heuristics::*;
use crate::models::Snapshot;
use crate::models::common::TimeWindow;
use crate::solver::get_utilization;
use crate::utils::{Environment, Float, GenericResult};
use rand::prelude::SliceRandom;
use std::sync::Arc;

/// Searches over boat orders: each order is decoded with first-fit placement, a random swap of two boats
/// is accepted using Metropolis criterion with geometric cooling.
pub struct SimulatedAnnealing {
    params: AnnealingParams,
    heuristic: PlacementHeuristic,
}

impl SimulatedAnnealing {
    /// Creates a new instance of `SimulatedAnnealing`.
    pub fn new(params: AnnealingParams) -> Self {
        Self { params, heuristic: PlacementHeuristic::default() }
    }

    fn decode(
        &self,
        snapshot: &Snapshot,
        environment: &Arc<Environment>,
        name: &str,
        order: &[usize],
        horizon: Option<&TimeWindow>,
    ) -> Candidate {
        let placement_ctx = PlacementContext::new(snapshot, environment.clone(), name);
        let ordering = FixedOrdering::new(order.to_vec());
        let result = self.heuristic.process(placement_ctx, &ordering, &FirstSlotSelector::default());
        let utilization = get_utilization(snapshot, result.assignments.as_slice(), horizon);

        Candidate { result, utilization }
    }
}

impl Strategy for SimulatedAnnealing {
    fn place(
        &self,
        snapshot: &Snapshot,
        horizon: Option<&TimeWindow>,
        environment: Arc<Environment>,
        name: &str,
    ) -> GenericResult<PlacementResult> {
        let random = environment.random.clone();
        let size = snapshot.boats().len();

        let mut current_order = (0..size).collect::<Vec<_>>();
        current_order.shuffle(&mut random.get_rng());

        let mut current = self.decode(snapshot, &environment, name, &current_order, horizon);
        let mut best = current.clone();
        let mut temperature = self.params.initial_temperature.max(Float::EPSILON);
        let mut interrupted = current.result.interrupted;

        if size > 1 {
            for _ in 0..self.params.iterations {
                if environment.is_quota_reached() {
                    interrupted = true;
                    break;
                }

                let mut candidate_order = current_order.clone();
                let first = random.uniform_int(0, size as i32 - 1) as usize;
                let second = random.uniform_int(0, size as i32 - 1) as usize;
                candidate_order.swap(first, second);

                let candidate = self.decode(snapshot, &environment, name, &candidate_order, horizon);
                let delta = candidate.fitness() - current.fitness();

                if delta >= 0. || random.is_hit((delta / temperature).exp()) {
                    best = keep_best(Some(best), candidate.clone());
                    current = candidate;
                    current_order = candidate_order;
                }

                temperature = (temperature * self.params.cooling_rate).max(Float::EPSILON);
            }
        }

        let mut result = best.result;
        result.interrupted |= interrupted;

        Ok(result)
    }
}
