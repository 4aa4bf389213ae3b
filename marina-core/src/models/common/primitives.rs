#[cfg(test)]
#[path = "../../../tests/unit/models/common/primitives_test.rs"]
mod primitives_test;

use crate::utils::Float;

/// Specifies a point in time as seconds since the unix epoch.
pub type Timestamp = Float;

/// Specifies a time duration in seconds.
pub type Duration = Float;

/// Represents a half-open time window: `[start, end)`.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeWindow {
    /// Start of the window, inclusive.
    pub start: Timestamp,
    /// End of the window, exclusive.
    pub end: Timestamp,
}

impl TimeWindow {
    /// Creates a new [`TimeWindow`].
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Returns true if both ends are finite and start is strictly before end.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.start < self.end
    }

    /// Returns window duration.
    pub fn duration(&self) -> Duration {
        (self.end - self.start).max(0.)
    }

    /// Checks whether two half-open windows share some time. Touching windows do not intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Checks whether time window has intersection with any of others.
    pub fn intersects_any(&self, others: &[Self]) -> bool {
        others.iter().any(|other| other.intersects(self))
    }

    /// Checks whether the other window lies completely inside this one.
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns a shared part of two windows, if any.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);

        if start < end { Some(Self { start, end }) } else { None }
    }

    /// Returns the smallest window which covers both windows.
    pub fn span(&self, other: &Self) -> Self {
        Self { start: self.start.min(other.start), end: self.end.max(other.end) }
    }
}
