#[cfg(test)]
#[path = "../../tests/unit/solver/coordinator_test.rs"]
mod coordinator_test;

use crate::construction::feasibility::check_assignments;
use crate::construction::heuristics::{PlacementResult, Unassigned};
use crate::models::common::TimeWindow;
use crate::models::{Assignment, RunError, Snapshot};
use crate::solver::{Evaluation, ScoreWeights, StrategyEntry, StrategyRegistry, evaluate};
use crate::utils::*;
use rand::RngCore;
use rustc_hash::{FxHashSet, FxHasher};
use std::any::Any;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::time::Duration;

/// A run configuration.
#[derive(Clone, Debug, Default)]
pub struct RunConfig {
    /// Score weights.
    pub weights: ScoreWeights,
    /// A planning horizon, the union span of requested intervals when not set.
    pub horizon: Option<TimeWindow>,
    /// An overall run deadline in seconds, shared by all strategies of the run.
    pub max_time: Option<Float>,
    /// A random seed, a random one is used when not set.
    pub seed: Option<u64>,
    /// Max amount of strategies run in parallel, environment's parallelism is used when not set.
    pub parallelism: Option<usize>,
}

impl RunConfig {
    /// Sets score weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets planning horizon.
    pub fn with_horizon(mut self, horizon: Option<TimeWindow>) -> Self {
        self.horizon = horizon;
        self
    }

    /// Sets time limit in seconds.
    pub fn with_max_time(mut self, max_time: Option<Float>) -> Self {
        self.max_time = max_time;
        self
    }

    /// Sets random seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets parallelism.
    pub fn with_parallelism(mut self, parallelism: Option<usize>) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Checks configuration before execution.
    pub fn validate(&self) -> Result<(), RunError> {
        self.weights.validate()?;

        if self.max_time.is_some_and(|max_time| !max_time.is_finite() || max_time <= 0.) {
            return Err(RunError::InvalidConfiguration("max time must be positive".to_string()));
        }

        if self.horizon.as_ref().is_some_and(|horizon| !horizon.is_valid()) {
            return Err(RunError::InvalidConfiguration("horizon start must be before its end".to_string()));
        }

        if self.parallelism == Some(0) {
            return Err(RunError::InvalidConfiguration("parallelism must be positive".to_string()));
        }

        Ok(())
    }
}

/// A run request: a snapshot, strategy names and configuration. Empty names mean all registered strategies.
#[derive(Clone, Debug)]
pub struct RunRequest {
    /// A validated snapshot.
    pub snapshot: Arc<Snapshot>,
    /// Requested strategy names.
    pub strategies: Vec<String>,
    /// Run configuration.
    pub config: RunConfig,
}

impl RunRequest {
    /// Creates a new instance of `RunRequest`.
    pub fn new(snapshot: Arc<Snapshot>, strategies: Vec<String>, config: RunConfig) -> Self {
        Self { snapshot, strategies, config }
    }
}

/// An outcome of one strategy within a run.
#[derive(Clone, Debug)]
pub struct StrategyOutcome {
    /// Strategy name.
    pub name: String,
    /// Produced assignments, empty on failure.
    pub assignments: Vec<Assignment>,
    /// Boats left without a slot.
    pub unassigned: Vec<Unassigned>,
    /// Assignment set evaluation.
    pub evaluation: Evaluation,
    /// True when the strategy stopped early because of time limit or cancellation.
    pub interrupted: bool,
    /// A failure reason when the strategy failed.
    pub failure: Option<String>,
    /// Strategy execution duration.
    pub duration: Duration,
}

/// A result of a completed run.
#[derive(Clone, Debug)]
pub struct RunResult {
    /// Outcomes in strategy registration order.
    pub outcomes: Vec<StrategyOutcome>,
    /// A name of the selected strategy.
    pub selected: String,
    /// A seed used by the run.
    pub seed: u64,
}

impl RunResult {
    /// Returns outcome of the strategy with given name.
    pub fn outcome(&self, name: &str) -> Option<&StrategyOutcome> {
        self.outcomes.iter().find(|outcome| outcome.name == name)
    }

    /// Returns outcome of the selected strategy.
    pub fn selected_outcome(&self) -> Option<&StrategyOutcome> {
        self.outcome(&self.selected)
    }
}

/// Runs requested strategies over the same snapshot, evaluates their outputs and selects the best one.
pub struct Solver {
    registry: Arc<StrategyRegistry>,
    environment: Arc<Environment>,
}

impl Solver {
    /// Creates a new instance of `Solver`.
    pub fn new(registry: Arc<StrategyRegistry>, environment: Arc<Environment>) -> Self {
        Self { registry, environment }
    }

    /// Returns strategy registry.
    pub fn registry(&self) -> &StrategyRegistry {
        self.registry.as_ref()
    }

    /// Returns environment.
    pub fn environment(&self) -> &Environment {
        self.environment.as_ref()
    }

    /// Validates the request and resolves strategies in registration order without duplicates.
    pub fn resolve(&self, request: &RunRequest) -> Result<Vec<StrategyEntry>, RunError> {
        request.config.validate()?;

        let mut entries = if request.strategies.is_empty() {
            self.registry.entries().iter().cloned().enumerate().collect::<Vec<_>>()
        } else {
            let mut seen = FxHashSet::default();
            request
                .strategies
                .iter()
                .filter(|name| seen.insert(name.as_str()))
                .map(|name| self.registry.get(name).map(|(idx, entry)| (idx, entry.clone())))
                .collect::<Result<Vec<_>, _>>()?
        };

        if entries.is_empty() {
            return Err(RunError::InvalidConfiguration("no strategies to run".to_string()));
        }

        entries.sort_by_key(|(idx, _)| *idx);

        Ok(entries.into_iter().map(|(_, entry)| entry).collect())
    }

    /// Runs the request and blocks until all strategies are completed.
    pub fn run(&self, request: &RunRequest) -> Result<RunResult, RunError> {
        self.run_with_quota(request, None)
    }

    /// Runs the request with an additional quota, e.g. a cancellation flag. A strategy stopped by the quota
    /// returns its partial assignment set which is evaluated as any other.
    pub fn run_with_quota(
        &self,
        request: &RunRequest,
        quota: Option<Arc<dyn Quota + Send + Sync>>,
    ) -> Result<RunResult, RunError> {
        let entries = self.resolve(request)?;
        let config = &request.config;
        let snapshot = request.snapshot.as_ref();
        let logger = self.environment.logger.clone();

        let seed = config.seed.unwrap_or_else(|| self.environment.random.get_rng().next_u64());
        let quota = self.create_quota(config, quota);

        (logger)(&format!(
            "run started: {} boats, {} slots, {} strategies, seed {seed}",
            snapshot.boats().len(),
            snapshot.slots().len(),
            entries.len()
        ));

        let run_strategy = |entry: &StrategyEntry| {
            let environment =
                Arc::new(self.environment.with_seed(get_strategy_seed(seed, &entry.name)).with_quota(quota.clone()));
            let outcome = execute_strategy(snapshot, entry, environment, config);

            match &outcome.failure {
                Some(reason) => (logger)(&format!("strategy '{}' failed: {reason}", outcome.name)),
                None => (logger)(&format!(
                    "strategy '{}' placed {}/{} boats, score {:.4}, took {}ms{}",
                    outcome.name,
                    outcome.evaluation.boats_placed,
                    outcome.evaluation.total_boats,
                    outcome.evaluation.score,
                    outcome.duration.as_millis(),
                    if outcome.interrupted { ", interrupted" } else { "" }
                )),
            }

            outcome
        };

        let parallelism = config.parallelism.unwrap_or(self.environment.parallelism).max(1);
        let outcomes = match ThreadPool::new(parallelism) {
            Ok(pool) => pool.execute(|| parallel_collect(entries.as_slice(), run_strategy)),
            Err(err) => {
                (logger)(&format!("{err}, using global pool"));
                parallel_collect(entries.as_slice(), run_strategy)
            }
        };

        let selected = select_best(outcomes.as_slice())
            .map(|outcome| outcome.name.clone())
            .ok_or_else(|| RunError::InvalidConfiguration("no strategies to run".to_string()))?;

        (logger)(&format!("selected strategy: '{selected}'"));

        Ok(RunResult { outcomes, selected, seed })
    }

    fn create_quota(
        &self,
        config: &RunConfig,
        quota: Option<Arc<dyn Quota + Send + Sync>>,
    ) -> Option<Arc<dyn Quota + Send + Sync>> {
        let time_quota =
            config.max_time.map(|max_time| Arc::new(TimeQuota::new(max_time)) as Arc<dyn Quota + Send + Sync>);
        let quotas = self.environment.quota.iter().cloned().chain(time_quota).chain(quota).collect::<Vec<_>>();

        match quotas.len() {
            0 => None,
            1 => quotas.into_iter().next(),
            _ => Some(Arc::new(CompositeQuota::new(quotas))),
        }
    }
}

fn execute_strategy(
    snapshot: &Snapshot,
    entry: &StrategyEntry,
    environment: Arc<Environment>,
    config: &RunConfig,
) -> StrategyOutcome {
    let place = || entry.strategy.place(snapshot, config.horizon.as_ref(), environment, &entry.name);
    let (result, duration) = Timer::measure_duration(|| {
        catch_unwind(AssertUnwindSafe(place))
            .map_err(|payload| format!("strategy panicked: {}", get_panic_message(payload.as_ref())))
            .and_then(|result| result.map_err(|err| err.to_string()))
            .and_then(|result: PlacementResult| match check_assignments(snapshot, result.assignments.as_slice()) {
                Ok(_) => Ok(result),
                Err(errors) => Err(format!(
                    "strategy produced illegal assignments: {}",
                    errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join(", ")
                )),
            })
    });

    match result {
        Ok(result) => StrategyOutcome {
            name: entry.name.clone(),
            evaluation: evaluate(snapshot, result.assignments.as_slice(), &config.weights, config.horizon.as_ref()),
            assignments: result.assignments,
            unassigned: result.unassigned,
            interrupted: result.interrupted,
            failure: None,
            duration,
        },
        Err(reason) => StrategyOutcome {
            name: entry.name.clone(),
            assignments: vec![],
            unassigned: vec![],
            evaluation: Evaluation::failure(snapshot.boats().len()),
            interrupted: false,
            failure: Some(reason),
            duration,
        },
    }
}

/// Selects the outcome with most placed boats, then highest score. A failed outcome never beats a successful
/// one and the earliest registered outcome wins a tie.
fn select_best(outcomes: &[StrategyOutcome]) -> Option<&StrategyOutcome> {
    let compare = |a: &StrategyOutcome, b: &StrategyOutcome| {
        a.failure
            .is_none()
            .cmp(&b.failure.is_none())
            .then_with(|| a.evaluation.boats_placed.cmp(&b.evaluation.boats_placed))
            .then_with(|| compare_floats(a.evaluation.score, b.evaluation.score))
    };

    outcomes.iter().fold(None, |best, outcome| match best {
        Some(best) if compare(outcome, best) != Ordering::Greater => Some(best),
        _ => Some(outcome),
    })
}

fn get_strategy_seed(seed: u64, name: &str) -> u64 {
    let mut hasher = FxHasher::default();
    name.hash(&mut hasher);

    seed ^ hasher.finish()
}

fn get_panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|msg| msg.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown reason".to_string())
}
