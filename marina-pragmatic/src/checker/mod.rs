//! This module provides functionality to check that a run result in pragmatic format is feasible
//! for the request it was produced for: no double booking, no oversized boats, no intervals outside
//! of requested ones and evaluations consistent with assignments.

#[cfg(test)]
#[path = "../../tests/unit/checker/checker_test.rs"]
mod checker_test;

use crate::format::solution::*;
use crate::parse_time;
use marina_core::construction::feasibility::check_assignments;
use marina_core::models::common::TimeWindow;
use marina_core::models::{Assignment as CoreAssignment, Snapshot};
use marina_core::utils::is_close;
use std::collections::HashSet;
use std::sync::Arc;

/// Stores snapshot and solution together and provides some helper methods.
pub struct CheckerContext {
    /// A snapshot the solution is produced for.
    pub snapshot: Arc<Snapshot>,
    /// Solution to be checked.
    pub solution: Solution,
}

impl CheckerContext {
    /// Creates an instance of `CheckerContext`.
    pub fn new(snapshot: Arc<Snapshot>, solution: Solution) -> Self {
        Self { snapshot, solution }
    }

    /// Performs solution check.
    pub fn check(&self) -> Result<(), Vec<String>> {
        // avoid duplicates keeping original order
        let (_, errors) = check_selected_strategy(self)
            .err()
            .into_iter()
            .chain(check_strategy_assignments(self).err())
            .chain(check_evaluations(self).err())
            .chain(check_unassigned(self).err())
            .flatten()
            .fold((HashSet::new(), Vec::default()), |(mut used, mut errors), error| {
                if !used.contains(&error) {
                    errors.push(error.clone());
                    used.insert(error);
                }

                (used, errors)
            });

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Converts assignments of given strategy into core assignments.
    pub fn get_assignments(&self, strategy: &str) -> Result<Vec<CoreAssignment>, String> {
        let assignments =
            self.solution.strategies.get(strategy).ok_or_else(|| format!("unknown strategy '{strategy}'"))?;

        assignments
            .iter()
            .map(|assignment| {
                let start = parse_time(&assignment.start).map_err(|err| err.to_string())?;
                let end = parse_time(&assignment.end).map_err(|err| err.to_string())?;

                Ok(CoreAssignment {
                    boat_id: assignment.boat_id.clone(),
                    slot_id: assignment.slot_id.clone(),
                    time: TimeWindow::new(start, end),
                    strategy: strategy.to_string(),
                })
            })
            .collect()
    }
}

fn check_selected_strategy(ctx: &CheckerContext) -> Result<(), Vec<String>> {
    let selected = ctx.solution.selected_strategy.as_str();

    if !ctx.solution.strategies.contains_key(selected) {
        return Err(vec![format!("selected strategy '{selected}' has no assignments")]);
    }

    if ctx.solution.failures.contains_key(selected) && ctx.solution.failures.len() < ctx.solution.strategies.len() {
        return Err(vec![format!("selected strategy '{selected}' is failed while others are not")]);
    }

    let Some(evaluation) = ctx.solution.evaluations.get(selected) else { return Ok(()) };

    // more placed boats first, then higher score, failed strategies never compete
    let errors = ctx
        .solution
        .evaluations
        .iter()
        .filter(|(name, _)| name.as_str() != selected && !ctx.solution.failures.contains_key(name.as_str()))
        .filter(|(_, other)| {
            other.boats_placed > evaluation.boats_placed
                || (other.boats_placed == evaluation.boats_placed
                    && other.score > evaluation.score
                    && !is_close(other.score, evaluation.score, 1E-9))
        })
        .map(|(name, _)| format!("selected strategy '{selected}' is worse than '{name}'"))
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_strategy_assignments(ctx: &CheckerContext) -> Result<(), Vec<String>> {
    let errors = ctx
        .solution
        .strategies
        .keys()
        .flat_map(|strategy| match ctx.get_assignments(strategy) {
            Ok(assignments) => check_assignments(ctx.snapshot.as_ref(), assignments.as_slice())
                .err()
                .into_iter()
                .flatten()
                .map(|err| format!("strategy '{strategy}': {err}"))
                .collect::<Vec<_>>(),
            Err(err) => vec![format!("strategy '{strategy}': {err}")],
        })
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_evaluations(ctx: &CheckerContext) -> Result<(), Vec<String>> {
    let total_boats = ctx.snapshot.boats().len();

    let errors = ctx
        .solution
        .strategies
        .iter()
        .filter_map(|(strategy, assignments)| match ctx.solution.evaluations.get(strategy) {
            None => Some(format!("strategy '{strategy}' has no evaluation")),
            Some(evaluation) if evaluation.boats_placed != assignments.len() => Some(format!(
                "strategy '{strategy}' reports {} placed boats, but has {} assignments",
                evaluation.boats_placed,
                assignments.len()
            )),
            Some(evaluation) if evaluation.total_boats != total_boats => Some(format!(
                "strategy '{strategy}' reports {} boats in total, but request has {total_boats}",
                evaluation.total_boats
            )),
            Some(_) => None,
        })
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_unassigned(ctx: &CheckerContext) -> Result<(), Vec<String>> {
    let errors = ctx
        .solution
        .unassigned
        .iter()
        .flat_map(|(strategy, boats)| {
            let assigned = ctx
                .solution
                .strategies
                .get(strategy)
                .map(|assignments| assignments.iter().map(|a| a.boat_id.as_str()).collect::<HashSet<_>>())
                .unwrap_or_default();

            boats
                .iter()
                .filter_map(move |boat| {
                    if ctx.snapshot.boat(&boat.boat_id).is_none() {
                        Some(format!("strategy '{strategy}': unknown unassigned boat '{}'", boat.boat_id))
                    } else if assigned.contains(boat.boat_id.as_str()) {
                        Some(format!("strategy '{strategy}': boat '{}' is assigned and unassigned", boat.boat_id))
                    } else {
                        None
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
