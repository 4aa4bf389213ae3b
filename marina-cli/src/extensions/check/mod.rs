//! Check command helpers.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/check/check_test.rs"]
mod check_test;

use marina_pragmatic::checker::CheckerContext;
use marina_pragmatic::format::problem::PragmaticRequest;
use marina_pragmatic::format::solution::deserialize_solution;
use std::io::{BufReader, Read};

/// Checks that result in pragmatic format is feasible for given request.
pub fn check_pragmatic_solution<F: Read>(
    request_reader: BufReader<F>,
    solution_reader: BufReader<F>,
) -> Result<(), Vec<String>> {
    let request = request_reader.read_pragmatic().map_err(|errors| {
        errors.iter().map(|err| format!("cannot read request: {err}")).collect::<Vec<_>>()
    })?;

    let solution =
        deserialize_solution(solution_reader).map_err(|err| vec![format!("cannot read result: '{err}'")])?;

    CheckerContext::new(request.request.snapshot, solution).check()
}
