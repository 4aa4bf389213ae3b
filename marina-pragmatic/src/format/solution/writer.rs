#[cfg(test)]
#[path = "../../../tests/unit/format/solution/writer_test.rs"]
mod writer_test;

use super::*;
use crate::format_time;
use marina_core::solver::{RunResult, RunStatus as CoreRunStatus, StrategyOutcome, StrategyRegistry};
use marina_core::utils::{GenericError, GenericResult};
use std::collections::BTreeMap;
use std::io::{BufWriter, Write};

/// Writes run result in pragmatic json format.
pub trait PragmaticSolution {
    /// Serializes run result into json format.
    fn write_pragmatic_json<W: Write>(&self, writer: BufWriter<W>) -> GenericResult<()>;
}

impl PragmaticSolution for RunResult {
    fn write_pragmatic_json<W: Write>(&self, writer: BufWriter<W>) -> GenericResult<()> {
        let solution = create_solution(self, None)?;

        serialize_solution(writer, &solution).map_err(GenericError::from)
    }
}

/// Creates a pragmatic solution from run result.
pub fn create_solution(result: &RunResult, narrative: Option<String>) -> GenericResult<Solution> {
    let mut strategies = BTreeMap::new();
    let mut evaluations = BTreeMap::new();
    let mut unassigned = BTreeMap::new();
    let mut failures = BTreeMap::new();

    for outcome in result.outcomes.iter() {
        strategies.insert(outcome.name.clone(), create_assignments(outcome)?);
        evaluations.insert(outcome.name.clone(), create_evaluation(outcome));

        if !outcome.unassigned.is_empty() {
            let boats = outcome
                .unassigned
                .iter()
                .map(|unassigned| UnassignedBoat {
                    boat_id: unassigned.boat_id.clone(),
                    code: unassigned.reason.code().to_string(),
                    reason: unassigned.reason.description().to_string(),
                })
                .collect();
            unassigned.insert(outcome.name.clone(), boats);
        }

        if let Some(failure) = outcome.failure.as_ref() {
            failures.insert(outcome.name.clone(), failure.clone());
        }
    }

    Ok(Solution {
        strategies,
        evaluations,
        unassigned,
        failures,
        selected_strategy: result.selected.clone(),
        seed: result.seed,
        narrative,
    })
}

/// Creates a pragmatic background run status.
pub fn create_run_status(run_id: &str, status: &CoreRunStatus) -> GenericResult<RunStatus> {
    let (status, result, reason) = match status {
        CoreRunStatus::Pending => (RunState::Pending, None, None),
        CoreRunStatus::Complete(result) => (RunState::Complete, Some(create_solution(result, None)?), None),
        CoreRunStatus::Failed(reason) => (RunState::Failed, None, Some(reason.clone())),
    };

    Ok(RunStatus { run_id: run_id.to_string(), status, result, reason })
}

/// Creates a strategy catalog from the registry.
pub fn create_catalog(registry: &StrategyRegistry) -> Vec<CatalogEntry> {
    registry.catalog().into_iter().map(|(name, description)| CatalogEntry { name, description }).collect()
}

/// Serializes background run status into json format.
pub fn serialize_run_status<W: Write>(writer: BufWriter<W>, status: &RunStatus) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, status).map_err(|err| GenericError::from(err.to_string()))
}

/// Serializes strategy catalog into json format.
pub fn serialize_catalog<W: Write>(writer: BufWriter<W>, catalog: &[CatalogEntry]) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, catalog).map_err(|err| GenericError::from(err.to_string()))
}

fn create_assignments(outcome: &StrategyOutcome) -> GenericResult<Vec<Assignment>> {
    outcome
        .assignments
        .iter()
        .map(|assignment| {
            Ok(Assignment {
                boat_id: assignment.boat_id.clone(),
                slot_id: assignment.slot_id.clone(),
                start: format_time(assignment.time.start)?,
                end: format_time(assignment.time.end)?,
            })
        })
        .collect()
}

fn create_evaluation(outcome: &StrategyOutcome) -> Evaluation {
    let evaluation = &outcome.evaluation;

    Evaluation {
        boats_placed: evaluation.boats_placed,
        total_boats: evaluation.total_boats,
        placement_rate: evaluation.placement_rate,
        utilization: evaluation.utilization,
        score: evaluation.score,
        width_utilization: evaluation.width_utilization,
        max_simultaneous_occupancy: evaluation.max_simultaneous_occupancy,
        average_stay: evaluation.average_stay,
        interrupted: outcome.interrupted,
        duration: outcome.duration.as_millis() as u64,
    }
}
