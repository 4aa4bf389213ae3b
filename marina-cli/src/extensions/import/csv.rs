//! Import from a simple csv format logic.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

pub use self::actual::read_csv_request;

#[cfg(feature = "csv-format")]
mod actual {
    use marina_pragmatic::format::FormatError;
    use marina_pragmatic::format::problem::*;
    use serde::Deserialize;
    use std::collections::BTreeSet;
    use std::error::Error;
    use std::io::{BufReader, Read};

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "UPPERCASE")]
    struct CsvBoat {
        id: String,
        name: Option<String>,
        length: f64,
        width: f64,
        arrival: String,
        departure: String,
        kind: Option<BoatKind>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    struct CsvSlot {
        id: String,
        dock_id: String,
        length: f64,
        width: f64,
        max_boat_length: f64,
        max_boat_width: f64,
        category: Option<SlotCategory>,
        status: Option<SlotStatus>,
        available_from: Option<String>,
        available_to: Option<String>,
        price: Option<f64>,
    }

    pub(super) fn read_csv_entries<T, R: Read>(reader: BufReader<R>) -> Result<Vec<T>, Box<dyn Error>>
    where
        for<'de> T: Deserialize<'de>,
    {
        let mut reader = csv::Reader::from_reader(reader);
        let mut entries = vec![];

        for entry in reader.deserialize() {
            entries.push(entry?);
        }

        Ok(entries)
    }

    pub(super) fn read_boats<R: Read>(reader: BufReader<R>) -> Result<Vec<Boat>, Box<dyn Error>> {
        let boats = read_csv_entries::<CsvBoat, _>(reader)?
            .into_iter()
            .map(|boat| Boat {
                id: boat.id,
                name: boat.name.filter(|name| !name.is_empty()),
                length: boat.length,
                width: boat.width,
                arrival: boat.arrival,
                departure: boat.departure,
                kind: boat.kind,
            })
            .collect();

        Ok(boats)
    }

    pub(super) fn read_slots<R: Read>(reader: BufReader<R>) -> Result<Vec<Slot>, Box<dyn Error>> {
        read_csv_entries::<CsvSlot, _>(reader)?
            .into_iter()
            .map(|slot| {
                let availability = match (slot.available_from, slot.available_to) {
                    (Some(start), Some(end)) => Some(Interval { start, end }),
                    (None, None) => None,
                    _ => return Err(format!("slot '{}' has incomplete availability window", slot.id).into()),
                };

                Ok(Slot {
                    id: slot.id,
                    dock_id: slot.dock_id,
                    length: slot.length,
                    width: slot.width,
                    max_boat_length: slot.max_boat_length,
                    max_boat_width: slot.max_boat_width,
                    category: slot.category,
                    status: slot.status,
                    availability,
                    price: slot.price,
                })
            })
            .collect()
    }

    fn create_format_error(entity: &str, error: Box<dyn Error>) -> FormatError {
        FormatError::new_with_details(
            "E0000".to_string(),
            format!("cannot read {entity}"),
            format!("check {entity} definition"),
            format!("{error}"),
        )
    }

    /// Reads run request from csv format: one file with boats and one with slots.
    /// Docks are derived from slot dock ids.
    pub fn read_csv_request<R1: Read, R2: Read>(
        boats_reader: BufReader<R1>,
        slots_reader: BufReader<R2>,
    ) -> Result<Request, FormatError> {
        let boats = read_boats(boats_reader).map_err(|err| create_format_error("boats", err))?;
        let slots = read_slots(slots_reader).map_err(|err| create_format_error("slots", err))?;
        let docks = slots
            .iter()
            .map(|slot| slot.dock_id.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|id| Dock { id, name: None, position: None, extent: None })
            .collect();

        Ok(Request { boats, slots, docks: Some(docks), strategies: None, run_in_background: None, config: None })
    }
}

#[cfg(not(feature = "csv-format"))]
mod actual {
    use marina_pragmatic::format::FormatError;
    use marina_pragmatic::format::problem::Request;
    use std::io::{BufReader, Read};

    /// A stub method for reading request from csv format.
    pub fn read_csv_request<R1: Read, R2: Read>(
        _boats_reader: BufReader<R1>,
        _slots_reader: BufReader<R2>,
    ) -> Result<Request, FormatError> {
        Err(FormatError::new(
            "E0000".to_string(),
            "csv-format feature is not included".to_string(),
            "build the tool with csv-format feature".to_string(),
        ))
    }
}
