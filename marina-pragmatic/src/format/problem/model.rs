#[cfg(test)]
#[path = "../../../tests/unit/format/problem/model_test.rs"]
mod model_test;

use crate::format::{FormatError, MultiFormatError};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Error, Read, Write};

// region Boats

/// Specifies how a boat relates to the marina.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum BoatKind {
    /// A boat of marina's berth holder.
    Resident,
    /// A visiting boat.
    Transient,
}

/// A boat which asks for a berth.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Boat {
    /// Unique boat id.
    pub id: String,
    /// Boat name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Boat length in meters.
    pub length: f64,
    /// Boat width (beam) in meters.
    pub width: f64,
    /// Arrival time in RFC3339 format.
    pub arrival: String,
    /// Departure time in RFC3339 format.
    pub departure: String,
    /// Boat kind, resident when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<BoatKind>,
}

// endregion

// region Slots

/// A slot category.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum SlotCategory {
    /// A berth rented on a long term basis.
    Permanent,
    /// A berth for any boat.
    Flexible,
    /// A guest berth.
    Transient,
}

/// An administrative slot status.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum SlotStatus {
    /// Free to use.
    Available,
    /// Held by its owner, usable only inside availability window.
    Reserved,
}

/// A time interval.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Interval {
    /// Start time in RFC3339 format.
    pub start: String,
    /// End time in RFC3339 format.
    pub end: String,
}

/// A dock slot.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// Unique slot id.
    pub id: String,
    /// An id of the dock which owns the slot.
    pub dock_id: String,
    /// Physical length.
    pub length: f64,
    /// Physical width.
    pub width: f64,
    /// Max length of a boat accepted by the slot.
    pub max_boat_length: f64,
    /// Max width of a boat accepted by the slot.
    pub max_boat_width: f64,
    /// Slot category, flexible when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<SlotCategory>,
    /// Administrative status, available when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SlotStatus>,
    /// An availability window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Interval>,
    /// Slot price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

// endregion

// region Docks

/// A dock position.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Position {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

/// A dock which groups slots.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Dock {
    /// Unique dock id.
    pub id: String,
    /// Dock name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Dock position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Dock extent (length) in meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent: Option<f64>,
}

// endregion

// region Config

/// Score weights.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Weights {
    /// Placement rate weight.
    pub placement: f64,
    /// Utilization weight.
    pub utilization: f64,
}

/// A run configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Score weights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<Weights>,
    /// A planning horizon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizon: Option<Interval>,
    /// An overall run deadline in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_time: Option<f64>,
    /// A random seed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Max amount of strategies run in parallel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallelism: Option<usize>,
}

// endregion

/// A run request.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// Boats to place.
    pub boats: Vec<Boat>,
    /// Available slots.
    pub slots: Vec<Slot>,
    /// Docks, slot dock references are not checked when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docks: Option<Vec<Dock>>,
    /// Requested strategy names, all registered strategies when omitted or empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategies: Option<Vec<String>>,
    /// Whether the run should be executed in background.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_in_background: Option<bool>,
    /// Run configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Config>,
}

/// Deserializes request in json format from `BufReader`.
pub fn deserialize_request<R: Read>(reader: BufReader<R>) -> Result<Request, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        FormatError::new(
            "E0000".to_string(),
            "cannot deserialize request".to_string(),
            format!("check input json: '{err}'"),
        )
        .into()
    })
}

/// Serializes `request` in json into `writer`.
pub fn serialize_request<W: Write>(request: &Request, writer: &mut BufWriter<W>) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, request).map_err(Error::from)
}
