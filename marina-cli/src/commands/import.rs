#[cfg(test)]
#[path = "../../tests/unit/commands/import_test.rs"]
mod import_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use marina_cli::extensions::import::import_request;
use marina_cli::get_request_serialized;
use std::io::{BufReader, Write};

const FORMAT_ARG_NAME: &str = "FORMAT";
const INPUT_ARG_NAME: &str = "input-files";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_import_app() -> Command {
    Command::new("import")
        .about("Provides the way to convert requests from various formats into pragmatic one")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies input type")
                .required(true)
                .value_parser(["csv"])
                .index(1),
        )
        .arg(
            Arg::new(INPUT_ARG_NAME)
                .help("Sets input files which contain boats and slots")
                .short('i')
                .long(INPUT_ARG_NAME)
                .required(true)
                .action(ArgAction::Append)
                .num_args(1..),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to output file with request in pragmatic format")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_import(matches: &ArgMatches) -> Result<(), GenericError> {
    let input_format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("input format is not specified")?;
    let input_files = matches
        .get_many::<String>(INPUT_ARG_NAME)
        .map(|paths| {
            paths.map(|path| open_file(path, "input").map(BufReader::new)).collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;

    let request = import_request(input_format, input_files)?;
    let json = get_request_serialized(&request).map_err(|err| format!("cannot serialize request: '{err}'"))?;

    let mut writer = get_out_buffer(matches, OUT_RESULT_ARG_NAME)?;
    writer.write_all(json.as_bytes())?;

    Ok(())
}
