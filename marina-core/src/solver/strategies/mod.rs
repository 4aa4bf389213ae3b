//! The strategies module contains algorithms which build a complete assignment set from a snapshot.

use crate::construction::heuristics::*;
use crate::models::{RunError, Snapshot};
use crate::models::common::TimeWindow;
use crate::utils::{Environment, Float, GenericResult, compare_floats};
use std::cmp::Ordering;
use std::sync::Arc;

mod annealing;
pub use self::annealing::SimulatedAnnealing;

mod greedy;
pub use self::greedy::*;

mod random_restart;
pub use self::random_restart::RandomRestart;

/// A placement strategy: maps a snapshot to an assignment set.
///
/// A strategy never fails because of a boat it cannot place: such a boat is reported as unassigned.
/// An implementation must be deterministic for the same snapshot and the same random seed in environment.
pub trait Strategy: Send + Sync {
    /// Places boats from the snapshot. Assignments are tagged with given strategy name.
    /// A planning horizon is the one used to evaluate the result, `None` means the requested span.
    fn place(
        &self,
        snapshot: &Snapshot,
        horizon: Option<&TimeWindow>,
        environment: Arc<Environment>,
        name: &str,
    ) -> GenericResult<PlacementResult>;
}

/// Provides way to reuse generic placement behaviour: a strategy is defined by boat ordering and slot selection.
pub struct ConfigurableStrategy {
    boat_ordering: Box<dyn BoatOrdering + Send + Sync>,
    slot_selector: Box<dyn SlotSelector + Send + Sync>,
    heuristic: PlacementHeuristic,
}

impl ConfigurableStrategy {
    /// Creates a new instance of `ConfigurableStrategy`.
    pub fn new(
        boat_ordering: Box<dyn BoatOrdering + Send + Sync>,
        slot_selector: Box<dyn SlotSelector + Send + Sync>,
    ) -> Self {
        Self { boat_ordering, slot_selector, heuristic: PlacementHeuristic::default() }
    }
}

impl Strategy for ConfigurableStrategy {
    fn place(
        &self,
        snapshot: &Snapshot,
        _: Option<&TimeWindow>,
        environment: Arc<Environment>,
        name: &str,
    ) -> GenericResult<PlacementResult> {
        let placement_ctx = PlacementContext::new(snapshot, environment, name);

        Ok(self.heuristic.process(placement_ctx, self.boat_ordering.as_ref(), self.slot_selector.as_ref()))
    }
}

/// Parameters of randomized strategies.
#[derive(Clone, Debug, PartialEq)]
pub struct StrategyParams {
    /// Amount of repetitions for random restart strategy.
    pub restarts: usize,
    /// Simulated annealing parameters.
    pub annealing: AnnealingParams,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self { restarts: 10, annealing: AnnealingParams::default() }
    }
}

/// Simulated annealing parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnealingParams {
    /// Amount of perturbation steps.
    pub iterations: usize,
    /// Initial temperature.
    pub initial_temperature: Float,
    /// A multiplier applied to temperature after each step, in (0, 1).
    pub cooling_rate: Float,
}

impl AnnealingParams {
    /// Creates annealing parameters, returns an error when they cannot drive the cooling schedule.
    pub fn new(iterations: usize, initial_temperature: Float, cooling_rate: Float) -> Result<Self, RunError> {
        let params = Self { iterations, initial_temperature, cooling_rate };
        params.validate()?;

        Ok(params)
    }

    /// Checks that initial temperature is positive and cooling rate is in (0, 1).
    pub fn validate(&self) -> Result<(), RunError> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.) {
            return Err(RunError::InvalidConfiguration("annealing expects positive initial temperature".to_string()));
        }

        if !(self.cooling_rate > 0. && self.cooling_rate < 1.) {
            return Err(RunError::InvalidConfiguration("annealing expects cooling rate in (0, 1)".to_string()));
        }

        Ok(())
    }
}

impl Default for AnnealingParams {
    fn default() -> Self {
        Self { iterations: 200, initial_temperature: 1., cooling_rate: 0.95 }
    }
}

/// A placement result with its utilization, used by randomized strategies to compare repetitions.
#[derive(Clone)]
struct Candidate {
    result: PlacementResult,
    utilization: Float,
}

impl Candidate {
    fn fitness(&self) -> Float {
        self.result.assignments.len() as Float + self.utilization
    }

    /// More placed boats first, then higher utilization.
    fn compare(&self, other: &Self) -> Ordering {
        self.result
            .assignments
            .len()
            .cmp(&other.result.assignments.len())
            .then_with(|| compare_floats(self.utilization, other.utilization))
    }
}

/// Keeps the best candidate. An equal candidate does not replace the current best one.
fn keep_best(best: Option<Candidate>, candidate: Candidate) -> Candidate {
    match best {
        Some(best) if candidate.compare(&best) != Ordering::Greater => best,
        _ => candidate,
    }
}
