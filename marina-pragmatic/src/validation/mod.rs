//! This module provides functionality to validate run request for logical correctness.

use crate::format::problem::*;
use crate::format::{FormatError, MultiFormatError};

/// Keeps a run request to validate.
pub struct ValidationContext<'a> {
    /// A request in pragmatic format.
    pub request: &'a Request,
}

mod boats;
use self::boats::validate_boats;

mod common;
use self::common::*;

mod config;
use self::config::validate_config;

mod slots;
use self::slots::validate_slots;

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(request: &'a Request) -> Self {
        Self { request }
    }

    /// Validates request on set of rules.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        let errors = validate_boats(self)
            .err()
            .into_iter()
            .chain(validate_slots(self).err())
            .chain(validate_config(self).err())
            .chain(check_e1008_time_format(self).err().map(|err| vec![err]))
            .flatten()
            .collect::<Vec<_>>();

        if errors.is_empty() { Ok(()) } else { Err(errors.into()) }
    }

    /// Get list of boats from the request.
    fn boats(&self) -> impl Iterator<Item = &Boat> {
        self.request.boats.iter()
    }

    /// Get list of slots from the request.
    fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.request.slots.iter()
    }
}
