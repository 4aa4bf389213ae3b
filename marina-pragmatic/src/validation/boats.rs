#[cfg(test)]
#[path = "../../tests/unit/validation/boats_test.rs"]
mod boats_test;

use super::*;

/// Checks that request has no boats with duplicate ids.
fn check_e1001_no_boats_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.boats().map(|boat| &boat.id)).map_or(Ok(()), |ids| {
        Err(FormatError::new(
            "E1001".to_string(),
            "duplicated boat ids".to_string(),
            format!("remove duplicated boat ids: {}", ids.join(", ")),
        ))
    })
}

/// Checks that boat dimensions are positive.
fn check_e1002_positive_boat_dimensions(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = ctx
        .boats()
        .filter(|boat| !is_positive(boat.length) || !is_positive(boat.width))
        .map(|boat| boat.id.clone())
        .collect::<Vec<_>>();

    check_ids(ids, |ids| {
        FormatError::new(
            "E1002".to_string(),
            "boat has non-positive dimension".to_string(),
            format!("use positive length and width for boats: {ids}"),
        )
    })
}

/// Checks that boat arrival is before departure.
fn check_e1003_boat_interval_order(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = ctx
        .boats()
        .filter(|boat| get_interval(&boat.arrival, &boat.departure).is_some_and(|(start, end)| start >= end))
        .map(|boat| boat.id.clone())
        .collect::<Vec<_>>();

    check_ids(ids, |ids| {
        FormatError::new(
            "E1003".to_string(),
            "boat has inverted interval".to_string(),
            format!("make sure that arrival is before departure for boats: {ids}"),
        )
    })
}

/// Validates boats from the request.
pub fn validate_boats(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    let errors = check_e1001_no_boats_with_duplicate_ids(ctx)
        .err()
        .into_iter()
        .chain(check_e1002_positive_boat_dimensions(ctx).err())
        .chain(check_e1003_boat_interval_order(ctx).err())
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
