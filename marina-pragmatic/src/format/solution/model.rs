#[cfg(test)]
#[path = "../../../tests/unit/format/solution/model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{BufReader, BufWriter, Error, Read, Write};

/// An assignment of a boat to a slot.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Boat id.
    pub boat_id: String,
    /// Slot id.
    pub slot_id: String,
    /// Start time in RFC3339 format.
    pub start: String,
    /// End time in RFC3339 format.
    pub end: String,
}

/// A boat left without a slot.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnassignedBoat {
    /// Boat id.
    pub boat_id: String,
    /// A reason code.
    pub code: String,
    /// A reason description.
    pub reason: String,
}

/// An evaluation of strategy output.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// Amount of placed boats.
    pub boats_placed: usize,
    /// Total amount of boats.
    pub total_boats: usize,
    /// A share of placed boats.
    pub placement_rate: f64,
    /// A share of available slot-time occupied by boats.
    pub utilization: f64,
    /// A composite score.
    pub score: f64,
    /// A mean ratio of boat width to slot max boat width.
    pub width_utilization: f64,
    /// Max amount of boats moored at the same time.
    pub max_simultaneous_occupancy: usize,
    /// Average stay in seconds.
    pub average_stay: f64,
    /// True when the strategy stopped early.
    #[serde(default)]
    pub interrupted: bool,
    /// Strategy execution duration in milliseconds.
    #[serde(default)]
    pub duration: u64,
}

/// A run result.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Assignments per strategy.
    pub strategies: BTreeMap<String, Vec<Assignment>>,
    /// Evaluations per strategy.
    pub evaluations: BTreeMap<String, Evaluation>,
    /// Unassigned boats per strategy.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub unassigned: BTreeMap<String, Vec<UnassignedBoat>>,
    /// Failure reasons of failed strategies.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub failures: BTreeMap<String, String>,
    /// A name of the selected strategy.
    pub selected_strategy: String,
    /// A seed used by the run.
    pub seed: u64,
    /// A human readable run summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}

/// A background run status kind.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum RunState {
    /// The run is in progress.
    Pending,
    /// The run is completed.
    Complete,
    /// The run is failed.
    Failed,
}

/// A background run status.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RunStatus {
    /// A run id.
    pub run_id: String,
    /// Status kind.
    pub status: RunState,
    /// A run result when complete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Solution>,
    /// A failure reason when failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A strategy catalog entry.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct CatalogEntry {
    /// Strategy name.
    pub name: String,
    /// Strategy description.
    pub description: String,
}

/// Serializes solution into json format.
pub fn serialize_solution<W: Write>(writer: BufWriter<W>, solution: &Solution) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, solution).map_err(Error::from)
}

/// Deserializes solution from json format.
pub fn deserialize_solution<R: Read>(reader: BufReader<R>) -> Result<Solution, Error> {
    serde_json::from_reader(reader).map_err(Error::from)
}
