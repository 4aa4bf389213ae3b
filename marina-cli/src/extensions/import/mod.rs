//! Import command helpers.

mod csv;
pub use self::csv::*;

use marina_core::utils::GenericError;
use marina_pragmatic::format::problem::Request;
use std::io::{BufReader, Read};

/// Imports run request from specific format into pragmatic.
pub fn import_request<R: Read>(
    input_format: &str,
    readers: Option<Vec<BufReader<R>>>,
) -> Result<Request, GenericError> {
    match (input_format, readers) {
        ("csv", Some(mut readers)) if readers.len() == 2 => {
            let boats = readers.swap_remove(0);
            let slots = readers.swap_remove(0);
            read_csv_request(boats, slots).map_err(|err| format!("cannot read csv: {err}").into())
        }
        ("csv", _) => Err("csv format expects two files with boats and slots as an input".into()),
        _ => Err(format!("unknown format: '{input_format}'").into()),
    }
}
