//! A command line interface to marina slot assignment engine.
//!

mod commands;

use self::cli::*;

fn main() {
    let matches = get_app().get_matches();

    run_subcommand(matches);
}

mod cli {
    use super::commands::check::{get_check_app, run_check};
    use super::commands::import::{get_import_app, run_import};
    use super::commands::solve::{get_solve_app, run_solve};
    use super::commands::strategies::{get_strategies_app, run_strategies};
    use clap::{ArgMatches, Command};
    use marina_core::utils::GenericError;
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Marina Slot Planner")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to assign boats to dock slots")
            .subcommand(get_solve_app())
            .subcommand(get_strategies_app())
            .subcommand(get_check_app())
            .subcommand(get_import_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        let result: Result<(), GenericError> = match arg_matches.subcommand() {
            Some(("solve", solve_matches)) => run_solve(solve_matches),
            Some(("strategies", strategies_matches)) => run_strategies(strategies_matches),
            Some(("check", check_matches)) => run_check(check_matches),
            Some(("import", import_matches)) => run_import(import_matches),
            _ => Err("no subcommand was used. Use -h to print help information".into()),
        };

        if let Err(err) = result {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
