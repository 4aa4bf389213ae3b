#[cfg(test)]
#[path = "../../tests/unit/solver/narrative_test.rs"]
mod narrative_test;

use crate::solver::RunResult;
use crate::utils::{GenericResult, InfoLogger};
use std::fmt::Write;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// An optional collaborator which turns a completed run into a human readable text.
/// A run result is complete and valid without it.
pub trait Narrator {
    /// Creates a narrative for the run.
    fn narrate(&self, result: &RunResult) -> GenericResult<String>;
}

/// An offline narrator which summarizes evaluations.
#[derive(Default)]
pub struct SummaryNarrator {}

impl Narrator for SummaryNarrator {
    fn narrate(&self, result: &RunResult) -> GenericResult<String> {
        let mut text = String::new();

        let selected = result.selected_outcome().ok_or_else(|| format!("no outcome for '{}'", result.selected))?;
        let evaluation = &selected.evaluation;

        writeln!(
            text,
            "Strategy '{}' was selected: it placed {} of {} boats ({:.1}%) with {:.1}% slot utilization.",
            selected.name,
            evaluation.boats_placed,
            evaluation.total_boats,
            evaluation.placement_rate * 100.,
            evaluation.utilization * 100.
        )
        .map_err(|err| err.to_string())?;

        if !selected.unassigned.is_empty() {
            writeln!(text, "{} boat(s) could not be placed:", selected.unassigned.len())
                .map_err(|err| err.to_string())?;
            for unassigned in selected.unassigned.iter() {
                writeln!(text, "  - {}: {}", unassigned.boat_id, unassigned.reason.description())
                    .map_err(|err| err.to_string())?;
            }
        }

        let others = result.outcomes.iter().filter(|outcome| outcome.name != selected.name).collect::<Vec<_>>();
        if !others.is_empty() {
            writeln!(text, "Other strategies:").map_err(|err| err.to_string())?;
            for outcome in others {
                let written = match &outcome.failure {
                    Some(reason) => writeln!(text, "  - {}: failed ({reason})", outcome.name),
                    None => writeln!(
                        text,
                        "  - {}: {} placed, score {:.3}",
                        outcome.name, outcome.evaluation.boats_placed, outcome.evaluation.score
                    ),
                };
                written.map_err(|err| err.to_string())?;
            }
        }

        Ok(text)
    }
}

/// Calls narrator, if any, and returns its text. Narrator errors and panics are logged and swallowed.
pub fn narrate_safely(narrator: Option<&dyn Narrator>, result: &RunResult, logger: &InfoLogger) -> Option<String> {
    let narrator = narrator?;

    match catch_unwind(AssertUnwindSafe(|| narrator.narrate(result))) {
        Ok(Ok(text)) => Some(text),
        Ok(Err(err)) => {
            (logger)(&format!("cannot create narrative: {err}"));
            None
        }
        Err(_) => {
            (logger)("cannot create narrative: narrator panicked");
            None
        }
    }
}
