#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::{Arg, Command};
use marina_cli::extensions::check::check_pragmatic_solution;
use std::io::BufReader;

const REQUEST_ARG_NAME: &str = "REQUEST";
const RESULT_ARG_NAME: &str = "RESULT";

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Provides the way to check result feasibility")
        .arg(Arg::new(REQUEST_ARG_NAME).help("Sets the request file to use").required(true).index(1))
        .arg(Arg::new(RESULT_ARG_NAME).help("Sets the result file to check").required(true).index(2))
}

pub fn run_check(matches: &ArgMatches) -> Result<(), GenericError> {
    let request_path = matches.get_one::<String>(REQUEST_ARG_NAME).ok_or("request file is not specified")?;
    let result_path = matches.get_one::<String>(RESULT_ARG_NAME).ok_or("result file is not specified")?;

    let request = BufReader::new(open_file(request_path, "request")?);
    let result = BufReader::new(open_file(result_path, "result")?);

    check_pragmatic_solution(request, result).map_err(|errors| {
        format!("checker found {} errors:\n{}", errors.len(), errors.join("\n")).into()
    })
}
