#[cfg(test)]
#[path = "../../tests/unit/validation/common_test.rs"]
mod common_test;

use super::*;
use crate::parse_time;
use std::collections::HashSet;

/// Returns sorted duplicates.
pub fn get_duplicates<'a>(items: impl Iterator<Item = &'a String>) -> Option<Vec<String>> {
    let mut ids = HashSet::<_>::default();
    let duplicates =
        items.filter_map(move |id| if ids.insert(id) { None } else { Some(id.clone()) }).collect::<HashSet<_>>();

    if duplicates.is_empty() {
        None
    } else {
        let mut duplicates = duplicates.into_iter().collect::<Vec<_>>();
        duplicates.sort();
        Some(duplicates)
    }
}

/// Parses both interval ends, returns `None` when any of them has invalid format.
pub fn get_interval(start: &str, end: &str) -> Option<(f64, f64)> {
    match (parse_time(start), parse_time(end)) {
        (Ok(start), Ok(end)) => Some((start, end)),
        _ => None,
    }
}

/// Returns true when value is a finite positive number.
pub fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.
}

/// Creates a format error when the list of ids is not empty.
pub fn check_ids(ids: Vec<String>, create_error: impl FnOnce(String) -> FormatError) -> Result<(), FormatError> {
    if ids.is_empty() { Ok(()) } else { Err(create_error(ids.join(", "))) }
}

/// Checks that all times in the request are in RFC3339 format.
pub fn check_e1008_time_format(ctx: &ValidationContext) -> Result<(), FormatError> {
    let is_invalid = |time: &String| parse_time(time).is_err();

    let boat_times = ctx.boats().flat_map(|boat| [&boat.arrival, &boat.departure]);
    let slot_times = ctx.slots().filter_map(|slot| slot.availability.as_ref()).flat_map(|i| [&i.start, &i.end]);
    let horizon_times = ctx
        .request
        .config
        .as_ref()
        .and_then(|config| config.horizon.as_ref())
        .into_iter()
        .flat_map(|interval| [&interval.start, &interval.end]);

    let mut times =
        boat_times.chain(slot_times).chain(horizon_times).filter(|time| is_invalid(time)).cloned().collect::<Vec<_>>();
    times.dedup();

    check_ids(times, |times| {
        FormatError::new(
            "E1008".to_string(),
            "invalid time format".to_string(),
            format!("use RFC3339 format for times: {times}"),
        )
    })
}
