//! A crate contains command line interface helpers for marina slot assignment engine: reading algorithm
//! configuration, importing requests from other formats, handling interruption and checking results.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../../marina-core/tests/helpers/macros.rs"]
#[macro_use]
mod macros;

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

pub use marina_core as core;
pub use marina_pragmatic as pragmatic;

pub mod extensions;

use marina_pragmatic::format::MultiFormatError;
use marina_pragmatic::format::problem::Request;
use std::io::BufWriter;

/// Serializes format errors into json string.
pub fn get_errors_serialized(errors: &MultiFormatError) -> String {
    errors.to_json()
}

/// Serializes request in pragmatic format into json string.
pub fn get_request_serialized(request: &Request) -> Result<String, String> {
    let mut buffer = Vec::new();
    marina_pragmatic::format::problem::serialize_request(request, &mut BufWriter::new(&mut buffer))
        .map_err(|err| err.to_string())?;

    String::from_utf8(buffer).map_err(|err| err.to_string())
}
