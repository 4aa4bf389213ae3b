#[cfg(test)]
#[path = "../../tests/unit/commands/strategies_test.rs"]
mod strategies_test;

use super::*;
use clap::{Arg, Command};
use marina_core::solver::get_default_registry;
use marina_pragmatic::format::solution::{create_catalog, serialize_catalog};

const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_strategies_app() -> Command {
    Command::new("strategies").about("Lists registered strategies with their descriptions").arg(
        Arg::new(OUT_RESULT_ARG_NAME)
            .help("Specifies path to file for catalog output")
            .short('o')
            .long(OUT_RESULT_ARG_NAME)
            .required(false),
    )
}

pub fn run_strategies(matches: &ArgMatches) -> Result<(), GenericError> {
    let catalog = create_catalog(get_default_registry().as_ref());
    let writer = get_out_buffer(matches, OUT_RESULT_ARG_NAME)?;

    serialize_catalog(writer, catalog.as_slice())
}
