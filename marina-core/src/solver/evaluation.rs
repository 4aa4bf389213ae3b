#[cfg(test)]
#[path = "../../tests/unit/solver/evaluation_test.rs"]
mod evaluation_test;

use crate::construction::feasibility::is_available;
use crate::models::common::{Duration, TimeWindow};
use crate::models::{Assignment, RunError, Snapshot};
use crate::utils::{Float, compare_floats, is_close};
use std::cmp::Ordering;

/// Weights of a composite score. They are non-negative and sum to one.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreWeights {
    placement: Float,
    utilization: Float,
}

impl ScoreWeights {
    /// Creates a new validated instance of `ScoreWeights`.
    pub fn new(placement: Float, utilization: Float) -> Result<Self, RunError> {
        let weights = Self { placement, utilization };
        weights.validate()?;

        Ok(weights)
    }

    /// Returns placement rate weight.
    pub fn placement(&self) -> Float {
        self.placement
    }

    /// Returns utilization weight.
    pub fn utilization(&self) -> Float {
        self.utilization
    }

    pub(crate) fn validate(&self) -> Result<(), RunError> {
        let is_valid_weight = |weight: Float| weight.is_finite() && weight >= 0.;

        if !is_valid_weight(self.placement) || !is_valid_weight(self.utilization) {
            return Err(RunError::InvalidConfiguration("score weights must be non-negative numbers".to_string()));
        }

        if !is_close(self.placement + self.utilization, 1., 1E-6) {
            return Err(RunError::InvalidConfiguration(format!(
                "score weights must sum to 1.0, got {} + {}",
                self.placement, self.utilization
            )));
        }

        Ok(())
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self { placement: 0.7, utilization: 0.3 }
    }
}

/// Keeps metrics of one assignment set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Evaluation {
    /// Amount of boats with an assignment.
    pub boats_placed: usize,
    /// Amount of boats in the snapshot.
    pub total_boats: usize,
    /// A share of placed boats, defined as 1 when there are no boats.
    pub placement_rate: Float,
    /// A share of available slot-time occupied by assignments within planning horizon.
    pub utilization: Float,
    /// A weighted combination of placement rate and utilization.
    pub score: Float,
    /// A mean ratio of boat width to slot max boat width.
    pub width_utilization: Float,
    /// A max amount of boats moored at the same time.
    pub max_simultaneous_occupancy: usize,
    /// A mean duration of assigned stays.
    pub average_stay: Duration,
}

impl Evaluation {
    /// Creates an evaluation of a failed strategy.
    pub fn failure(total_boats: usize) -> Self {
        Self { total_boats, ..Self::default() }
    }
}

/// Evaluates an assignment set. When horizon is not set, the union span of requested intervals is used.
pub fn evaluate(
    snapshot: &Snapshot,
    assignments: &[Assignment],
    weights: &ScoreWeights,
    horizon: Option<&TimeWindow>,
) -> Evaluation {
    let total_boats = snapshot.boats().len();
    let boats_placed = assignments.len();

    let placement_rate = if total_boats == 0 { 1. } else { (boats_placed as Float / total_boats as Float).min(1.) };
    let utilization = get_utilization(snapshot, assignments, horizon);
    let score = weights.placement * placement_rate + weights.utilization * utilization;

    let average_stay = if assignments.is_empty() {
        0.
    } else {
        assignments.iter().map(|assignment| assignment.time.duration()).sum::<Float>() / assignments.len() as Float
    };

    Evaluation {
        boats_placed,
        total_boats,
        placement_rate,
        utilization,
        score,
        width_utilization: get_width_utilization(snapshot, assignments),
        max_simultaneous_occupancy: get_max_simultaneous_occupancy(assignments),
        average_stay,
    }
}

/// Returns occupied slot-time divided by available slot-time within the horizon.
pub fn get_utilization(snapshot: &Snapshot, assignments: &[Assignment], horizon: Option<&TimeWindow>) -> Float {
    let horizon = match horizon.cloned().or_else(|| snapshot.requested_span()) {
        Some(horizon) => horizon,
        None => return 0.,
    };

    let available = snapshot
        .slots()
        .iter()
        .filter_map(|slot| match &slot.availability {
            Some(window) => window.intersection(&horizon),
            None if is_available(slot, &horizon) => Some(horizon.clone()),
            None => None,
        })
        .map(|window| window.duration())
        .sum::<Float>();

    if available <= 0. {
        return 0.;
    }

    let occupied = assignments
        .iter()
        .filter_map(|assignment| assignment.time.intersection(&horizon))
        .map(|window| window.duration())
        .sum::<Float>();

    (occupied / available).clamp(0., 1.)
}

fn get_width_utilization(snapshot: &Snapshot, assignments: &[Assignment]) -> Float {
    let ratios = assignments
        .iter()
        .filter_map(|assignment| {
            let boat = snapshot.boat(&assignment.boat_id)?;
            let slot = snapshot.slot(&assignment.slot_id)?;

            Some(boat.dimensions.width / slot.max_boat.width)
        })
        .collect::<Vec<_>>();

    if ratios.is_empty() { 0. } else { ratios.iter().sum::<Float>() / ratios.len() as Float }
}

fn get_max_simultaneous_occupancy(assignments: &[Assignment]) -> usize {
    // departures go before arrivals at the same moment as intervals are half-open
    let mut events = assignments
        .iter()
        .flat_map(|assignment| [(assignment.time.start, 1_i64), (assignment.time.end, -1_i64)])
        .collect::<Vec<_>>();

    events.sort_by(|(a_time, a_delta), (b_time, b_delta)| match compare_floats(*a_time, *b_time) {
        Ordering::Equal => a_delta.cmp(b_delta),
        ordering => ordering,
    });

    events
        .into_iter()
        .scan(0_i64, |current, (_, delta)| {
            *current += delta;
            Some(*current)
        })
        .max()
        .unwrap_or(0)
        .max(0) as usize
}
