#[cfg(test)]
#[path = "../../tests/unit/validation/slots_test.rs"]
mod slots_test;

use super::*;

/// Checks that request has no slots with duplicate ids.
fn check_e1004_no_slots_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.slots().map(|slot| &slot.id)).map_or(Ok(()), |ids| {
        Err(FormatError::new(
            "E1004".to_string(),
            "duplicated slot ids".to_string(),
            format!("remove duplicated slot ids: {}", ids.join(", ")),
        ))
    })
}

/// Checks that slot dimensions are positive and max boat dimensions do not exceed physical ones.
fn check_e1005_slot_dimensions(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = ctx
        .slots()
        .filter(|slot| {
            let all_positive = [slot.length, slot.width, slot.max_boat_length, slot.max_boat_width]
                .into_iter()
                .all(is_positive);

            !all_positive || slot.max_boat_length > slot.length || slot.max_boat_width > slot.width
        })
        .map(|slot| slot.id.clone())
        .collect::<Vec<_>>();

    check_ids(ids, |ids| {
        FormatError::new(
            "E1005".to_string(),
            "slot has invalid dimensions".to_string(),
            format!("use positive dimensions with max boat dimensions not above physical ones for slots: {ids}"),
        )
    })
}

/// Checks that slot availability window is not inverted and price is not negative.
fn check_e1006_slot_availability_and_price(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = ctx
        .slots()
        .filter(|slot| {
            let invalid_window = slot
                .availability
                .as_ref()
                .and_then(|interval| get_interval(&interval.start, &interval.end))
                .is_some_and(|(start, end)| start >= end);
            let invalid_price = slot.price.is_some_and(|price| !price.is_finite() || price < 0.);

            invalid_window || invalid_price
        })
        .map(|slot| slot.id.clone())
        .collect::<Vec<_>>();

    check_ids(ids, |ids| {
        FormatError::new(
            "E1006".to_string(),
            "slot has invalid availability window or price".to_string(),
            format!("make sure that availability start is before its end and price is not negative for slots: {ids}"),
        )
    })
}

/// Checks that docks have unique ids and every slot refers to a known dock.
fn check_e1007_dock_references(ctx: &ValidationContext) -> Result<(), FormatError> {
    let Some(docks) = ctx.request.docks.as_ref().filter(|docks| !docks.is_empty()) else { return Ok(()) };

    if let Some(ids) = get_duplicates(docks.iter().map(|dock| &dock.id)) {
        return Err(FormatError::new(
            "E1007".to_string(),
            "duplicated dock ids".to_string(),
            format!("remove duplicated dock ids: {}", ids.join(", ")),
        ));
    }

    let ids = ctx
        .slots()
        .filter(|slot| !docks.iter().any(|dock| dock.id == slot.dock_id))
        .map(|slot| slot.id.clone())
        .collect::<Vec<_>>();

    check_ids(ids, |ids| {
        FormatError::new(
            "E1007".to_string(),
            "slot refers to unknown dock".to_string(),
            format!("use known dock ids or remove docks list for slots: {ids}"),
        )
    })
}

/// Validates slots and docks from the request.
pub fn validate_slots(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    let errors = check_e1004_no_slots_with_duplicate_ids(ctx)
        .err()
        .into_iter()
        .chain(check_e1005_slot_dimensions(ctx).err())
        .chain(check_e1006_slot_availability_and_price(ctx).err())
        .chain(check_e1007_dock_references(ctx).err())
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
