//! Pragmatic crate allows to describe marina slot assignment runs via simple **pragmatic** json format:
//! boats, slots, docks and run configuration go in, per strategy assignments and evaluations go out.
//!
//! Input is validated before any strategy runs: every detected problem is reported as a [`format::FormatError`]
//! with a stable code, a cause and an action to take.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

pub mod checker;
pub mod format;

mod validation;

use marina_core::models::common::Timestamp;
use marina_core::utils::{GenericError, GenericResult};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Formats unix timestamp (seconds) as RFC3339 string with millisecond precision.
pub fn format_time(time: Timestamp) -> GenericResult<String> {
    if !time.is_finite() {
        return Err(format!("cannot convert timestamp {time}").into());
    }

    OffsetDateTime::from_unix_timestamp_nanos((time * 1000.).round() as i128 * 1_000_000)
        .map_err(|err| GenericError::from(format!("cannot convert timestamp {time}: {err}")))?
        .format(&Rfc3339)
        .map_err(|err| format!("cannot format timestamp {time}: {err}").into())
}

/// Parses RFC3339 string into unix timestamp (seconds), fractional seconds are kept.
pub fn parse_time(time: &str) -> GenericResult<Timestamp> {
    OffsetDateTime::parse(time, &Rfc3339)
        .map(|time| time.unix_timestamp_nanos() as Timestamp / 1E9)
        .map_err(|err| format!("cannot parse '{time}' as RFC3339: {err}").into())
}
