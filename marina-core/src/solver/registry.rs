#[cfg(test)]
#[path = "../../tests/unit/solver/registry_test.rs"]
mod registry_test;

use crate::models::RunError;
use crate::solver::strategies::*;
use lazy_static::lazy_static;
use std::sync::Arc;

/// A registered strategy.
#[derive(Clone)]
pub struct StrategyEntry {
    /// Unique strategy name.
    pub name: String,
    /// A short human readable description.
    pub description: String,
    /// Strategy implementation.
    pub strategy: Arc<dyn Strategy>,
}

/// Keeps strategies by name in registration order. Registration order is used to resolve ties between
/// equally good strategies.
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    entries: Vec<StrategyEntry>,
}

impl StrategyRegistry {
    /// Creates a registry with all built-in strategies.
    pub fn with_default_strategies(params: &StrategyParams) -> Self {
        let mut registry = Self::default();

        registry.push(
            "first_fit",
            "places boats in given order into the first legal slot",
            Arc::new(create_first_fit()),
        );
        registry.push(
            "best_fit",
            "places longest boats first into the tightest legal slot",
            Arc::new(create_best_fit()),
        );
        registry.push(
            "worst_fit",
            "places longest boats first into the loosest legal slot",
            Arc::new(create_worst_fit()),
        );
        registry.push(
            "earliest_deadline_first",
            "places boats which leave soonest first into the first legal slot",
            Arc::new(create_earliest_deadline_first()),
        );
        registry.push(
            "longest_stay_first",
            "places longest stays first into the slot with the fewest future conflicts",
            Arc::new(create_longest_stay_first()),
        );
        registry.push(
            "price_maximizing",
            "places boats with the highest revenue potential into the most expensive slot",
            Arc::new(create_price_maximizing()),
        );
        registry.push(
            "random_restart",
            "repeats first fit placement with random boat order and keeps the best repetition",
            Arc::new(RandomRestart::new(params.restarts)),
        );
        registry.push(
            "simulated_annealing",
            "searches boat orders with simulated annealing, each order placed with first fit",
            Arc::new(SimulatedAnnealing::new(params.annealing.clone())),
        );
        registry.push(
            "earliest_arrival_first",
            "places boats by arrival into the tightest legal slot",
            Arc::new(create_earliest_arrival_first()),
        );
        registry.push(
            "smallest_first",
            "places narrowest boats first into the tightest legal slot",
            Arc::new(create_smallest_first()),
        );
        registry.push(
            "short_stay_first",
            "places shortest stays first to maximize slot turnover",
            Arc::new(create_short_stay_first()),
        );
        registry.push(
            "temporary_first",
            "fills temporarily released slots before regular ones",
            Arc::new(create_temporary_first()),
        );
        registry.push(
            "slot_type_matching",
            "matches stay length with slot category: guest, flexible or permanent",
            Arc::new(create_slot_type_matching()),
        );

        registry
    }

    /// Registers a new strategy after already registered ones.
    pub fn register(&mut self, name: &str, description: &str, strategy: Arc<dyn Strategy>) -> Result<(), RunError> {
        if name.is_empty() || self.entries.iter().any(|entry| entry.name == name) {
            return Err(RunError::InvalidConfiguration(format!("cannot register strategy with name '{name}'")));
        }

        self.push(name, description, strategy);

        Ok(())
    }

    fn push(&mut self, name: &str, description: &str, strategy: Arc<dyn Strategy>) {
        self.entries.push(StrategyEntry { name: name.to_string(), description: description.to_string(), strategy });
    }

    /// Returns a registration index and a strategy entry by name.
    pub fn get(&self, name: &str) -> Result<(usize, &StrategyEntry), RunError> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.name == name)
            .ok_or_else(|| RunError::UnknownStrategy(name.to_string()))
    }

    /// Returns all entries in registration order.
    pub fn entries(&self) -> &[StrategyEntry] {
        self.entries.as_slice()
    }

    /// Returns (name, description) pairs of all registered strategies in registration order.
    pub fn catalog(&self) -> Vec<(String, String)> {
        self.entries.iter().map(|entry| (entry.name.clone(), entry.description.clone())).collect()
    }
}

lazy_static! {
    static ref DEFAULT_REGISTRY: Arc<StrategyRegistry> =
        Arc::new(StrategyRegistry::with_default_strategies(&StrategyParams::default()));
}

/// Returns a process-wide registry with built-in strategies and default parameters.
pub fn get_default_registry() -> Arc<StrategyRegistry> {
    DEFAULT_REGISTRY.clone()
}
