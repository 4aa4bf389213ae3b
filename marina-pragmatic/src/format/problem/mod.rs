//! Specifies logic to read a run request from json input.

use super::*;
use marina_core::solver::RunRequest as CoreRunRequest;
use std::io::{BufReader, Read};

pub(crate) type ApiRequest = Request;

mod model;
pub use self::model::*;

mod reader;
use self::reader::map_to_request;

/// A run request read from pragmatic format.
#[derive(Clone, Debug)]
pub struct PragmaticRunRequest {
    /// A core run request with validated snapshot and configuration.
    pub request: CoreRunRequest,
    /// Whether the caller asked for a background run.
    pub run_in_background: bool,
}

/// Reads specific run request definition from various sources.
pub trait PragmaticRequest {
    /// Reads run request defined in pragmatic format.
    fn read_pragmatic(self) -> Result<PragmaticRunRequest, MultiFormatError>;
}

impl<R: Read> PragmaticRequest for BufReader<R> {
    fn read_pragmatic(self) -> Result<PragmaticRunRequest, MultiFormatError> {
        let request = deserialize_request(self)?;

        map_to_request(request)
    }
}

impl PragmaticRequest for String {
    fn read_pragmatic(self) -> Result<PragmaticRunRequest, MultiFormatError> {
        let request = deserialize_request(BufReader::new(self.as_bytes()))?;

        map_to_request(request)
    }
}

impl PragmaticRequest for Request {
    fn read_pragmatic(self) -> Result<PragmaticRunRequest, MultiFormatError> {
        map_to_request(self)
    }
}
