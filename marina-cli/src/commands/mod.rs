use clap::ArgMatches;
use marina_core::utils::GenericError;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::str::FromStr;

pub mod check;
pub mod import;
pub mod solve;
pub mod strategies;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, GenericError> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'").into())
}

fn create_file(path: &str, description: &str) -> Result<File, GenericError> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'").into())
}

fn get_out_buffer(matches: &ArgMatches, arg_name: &str) -> Result<BufWriter<Box<dyn Write>>, GenericError> {
    let out_file = matches.get_one::<String>(arg_name).map(|path| create_file(path, "out result")).transpose()?;

    Ok(create_write_buffer(out_file))
}

fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, GenericError> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'").into())
                .map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, GenericError> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'").into())
                .map(Some)
        })
        .unwrap_or(Ok(None))
}
