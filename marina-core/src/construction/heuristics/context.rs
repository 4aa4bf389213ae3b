use crate::construction::feasibility::{Occupancy, Violation};
use crate::models::{Assignment, Snapshot};
use crate::utils::Environment;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Keeps the state of one placement process.
pub struct PlacementContext<'a> {
    /// A snapshot being processed.
    pub snapshot: &'a Snapshot,

    /// An environment with a strategy specific random generator and quota.
    pub environment: Arc<Environment>,

    /// A name of the strategy used to tag assignments.
    pub strategy: String,

    /// Boat indices which are not processed yet.
    pub pending: Vec<usize>,

    /// Intervals occupied so far, per slot.
    pub occupancy: Occupancy,

    /// Assignments made so far.
    pub assignments: Vec<Assignment>,

    /// Boats which could not be placed.
    pub unassigned: Vec<Unassigned>,

    /// Set when the quota stopped the process before all boats were processed.
    pub interrupted: bool,
}

impl<'a> PlacementContext<'a> {
    /// Creates a new instance of `PlacementContext`.
    pub fn new(snapshot: &'a Snapshot, environment: Arc<Environment>, strategy: &str) -> Self {
        Self {
            snapshot,
            environment,
            strategy: strategy.to_string(),
            pending: Vec::new(),
            occupancy: Occupancy::default(),
            assignments: Vec::new(),
            unassigned: Vec::new(),
            interrupted: false,
        }
    }

    /// Converts context into a placement result.
    pub fn into_result(self) -> PlacementResult {
        PlacementResult { assignments: self.assignments, unassigned: self.unassigned, interrupted: self.interrupted }
    }
}

/// Specifies why a boat is left without a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnassignedReason {
    /// No slot is legal for the boat.
    Violation(Violation),
    /// The process was stopped before the boat was considered.
    Skipped,
}

impl UnassignedReason {
    /// Returns a stable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            UnassignedReason::Violation(violation) => violation.code(),
            UnassignedReason::Skipped => "SKIPPED",
        }
    }

    /// Returns a human readable description.
    pub fn description(&self) -> &'static str {
        match self {
            UnassignedReason::Violation(violation) => violation.description(),
            UnassignedReason::Skipped => "the run stopped before the boat was considered",
        }
    }
}

impl Display for UnassignedReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

/// A boat which is left without a slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Unassigned {
    /// Boat id.
    pub boat_id: String,
    /// A reason.
    pub reason: UnassignedReason,
}

/// An output of a placement strategy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlacementResult {
    /// Assignments in the order they were made.
    pub assignments: Vec<Assignment>,
    /// Boats left without a slot.
    pub unassigned: Vec<Unassigned>,
    /// True if the result is partial because the quota was reached.
    pub interrupted: bool,
}
