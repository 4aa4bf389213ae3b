#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use marina_cli::extensions::check::check_pragmatic_solution;
use marina_cli::extensions::solve::config::*;
use marina_cli::extensions::solve::interruption::create_interruption_quota;
use marina_cli::get_errors_serialized;
use marina_core::solver::{
    Narrator, RunRequest, RunResult, RunScheduler, RunStatus, Solver, SummaryNarrator, narrate_safely,
};
use marina_core::utils::{Environment, Quota};
use marina_pragmatic::format::problem::{PragmaticRequest, PragmaticRunRequest};
use marina_pragmatic::format::solution::*;
use std::io::BufReader;
use std::sync::Arc;
use std::time::Duration;

const REQUEST_ARG_NAME: &str = "REQUEST";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const STRATEGIES_ARG_NAME: &str = "strategies";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const TIME_ARG_NAME: &str = "max-time";
const LOG_ARG_NAME: &str = "log";
const BACKGROUND_ARG_NAME: &str = "background";
const NARRATIVE_ARG_NAME: &str = "narrative";
const CHECK_ARG_NAME: &str = "check";

const POLL_INTERVAL: Duration = Duration::from_millis(200);

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Assigns boats to dock slots using registered strategies and selects the best result")
        .arg(Arg::new(REQUEST_ARG_NAME).help("Sets the request file to use").required(true).index(1))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(STRATEGIES_ARG_NAME)
                .help("Specifies comma separated strategy names to run, overrides names from request")
                .short('s')
                .long(STRATEGIES_ARG_NAME)
                .value_delimiter(',')
                .num_args(1..)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies random seed")
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies overall run deadline in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(BACKGROUND_ARG_NAME)
                .help("Runs request in background and polls its status until it is finished")
                .long(BACKGROUND_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(NARRATIVE_ARG_NAME)
                .help("Adds a human readable summary to the result")
                .long(NARRATIVE_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(CHECK_ARG_NAME)
                .help("Checks final result for feasibility")
                .long(CHECK_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
}

pub fn run_solve(matches: &ArgMatches) -> Result<(), GenericError> {
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();

    let PragmaticRunRequest { mut request, run_in_background } = read_request(matches)?;

    request.config = apply_config(&config, request.config)?;
    if let Some(seed) = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "random seed")? {
        request.config = request.config.with_seed(Some(seed));
    }
    if let Some(max_time) = parse_float_value::<f64>(matches, TIME_ARG_NAME, "max time")? {
        request.config = request.config.with_max_time(Some(max_time));
    }
    if let Some(strategies) = matches.get_many::<String>(STRATEGIES_ARG_NAME) {
        request.strategies = strategies.cloned().collect();
    }

    let is_logging_enabled = matches.get_flag(LOG_ARG_NAME);
    let quota: Arc<dyn Quota + Send + Sync> = Arc::new(create_interruption_quota());
    let environment = Arc::new(create_environment_from_config(&config, Some(quota), is_logging_enabled));
    let solver = Arc::new(Solver::new(create_registry_from_config(&config)?, environment.clone()));

    let run_in_background = run_in_background || matches.get_flag(BACKGROUND_ARG_NAME);
    let narrative = matches.get_flag(NARRATIVE_ARG_NAME);
    let out_path = matches.get_one::<String>(OUT_RESULT_ARG_NAME);

    let result = if run_in_background {
        let (run_id, status) = run_in_scheduler(solver, request, environment.as_ref())?;
        let result = match &status {
            RunStatus::Complete(result) => Some(result.clone()),
            _ => None,
        };

        let mut run_status = create_run_status(&run_id, &status)?;
        if let (Some(solution), Some(result)) = (run_status.result.as_mut(), result.as_ref()) {
            solution.narrative = create_narrative(narrative, result, environment.as_ref());
        }

        let writer = get_out_buffer(matches, OUT_RESULT_ARG_NAME)?;
        serialize_run_status(writer, &run_status)?;

        match status {
            RunStatus::Failed(reason) => return Err(format!("background run '{run_id}' failed: {reason}").into()),
            _ => result,
        }
    } else {
        let result = solver.run(&request)?;

        let solution = create_solution(&result, create_narrative(narrative, &result, environment.as_ref()))?;
        let writer = get_out_buffer(matches, OUT_RESULT_ARG_NAME)?;
        serialize_solution(writer, &solution)?;

        Some(Arc::new(result))
    };

    if matches.get_flag(CHECK_ARG_NAME) {
        match (out_path, result) {
            (Some(out_path), Some(_)) if !run_in_background => check_result(matches, out_path)?,
            _ => (environment.logger)("result check is skipped: it requires synchronous run with out result file"),
        }
    }

    Ok(())
}

fn read_request(matches: &ArgMatches) -> Result<PragmaticRunRequest, GenericError> {
    let path = matches
        .get_one::<String>(REQUEST_ARG_NAME)
        .ok_or_else(|| GenericError::from("request file is not specified"))?;

    BufReader::new(open_file(path, "request")?)
        .read_pragmatic()
        .map_err(|errors| format!("cannot read request:\n{}", get_errors_serialized(&errors)).into())
}

fn run_in_scheduler(
    solver: Arc<Solver>,
    request: RunRequest,
    environment: &Environment,
) -> Result<(String, RunStatus), GenericError> {
    let scheduler = RunScheduler::new(solver);
    let run_id = scheduler.submit(request)?;

    (environment.logger)(&format!("background run '{run_id}' is submitted"));

    loop {
        if scheduler.wait(&run_id, POLL_INTERVAL)?.is_finished() {
            let status = scheduler.forget(&run_id)?;
            return Ok((run_id, status));
        }

        (environment.logger)(&format!("background run '{run_id}' is pending"));
    }
}

fn create_narrative(is_enabled: bool, result: &RunResult, environment: &Environment) -> Option<String> {
    if !is_enabled {
        return None;
    }

    let narrator = SummaryNarrator::default();
    narrate_safely(Some(&narrator as &dyn Narrator), result, &environment.logger)
}

fn check_result(matches: &ArgMatches, out_path: &str) -> Result<(), GenericError> {
    let request_path = matches
        .get_one::<String>(REQUEST_ARG_NAME)
        .ok_or_else(|| GenericError::from("request file is not specified"))?;

    let request = BufReader::new(open_file(request_path, "request")?);
    let solution = BufReader::new(open_file(out_path, "result")?);

    check_pragmatic_solution(request, solution)
        .map_err(|errors| format!("checker found {} errors:\n{}", errors.len(), errors.join("\n")).into())
}
