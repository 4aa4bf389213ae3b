#[cfg(test)]
#[path = "../../tests/unit/models/domain_test.rs"]
mod domain_test;

use crate::models::RunError;
use crate::models::common::{Dimensions, TimeWindow};
use crate::utils::Float;

/// Specifies how a boat relates to the marina.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoatKind {
    /// A boat which belongs to the marina's own berth holders.
    #[default]
    Resident,
    /// A visiting (guest) boat.
    Transient,
}

/// Represents a boat which asks for a berth during a requested interval.
#[derive(Clone, Debug, PartialEq)]
pub struct Boat {
    /// Unique boat id.
    pub id: String,
    /// An optional human readable name.
    pub name: Option<String>,
    /// Boat footprint.
    pub dimensions: Dimensions,
    /// Requested occupancy interval: `[arrival, departure)`.
    pub time: TimeWindow,
    /// Boat kind.
    pub kind: BoatKind,
}

impl Boat {
    /// Creates a new validated instance of `Boat`.
    pub fn new(id: &str, dimensions: Dimensions, time: TimeWindow) -> Result<Self, RunError> {
        let boat = Self { id: id.to_string(), name: None, dimensions, time, kind: BoatKind::default() };
        boat.validate()?;

        Ok(boat)
    }

    /// Sets boat name.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Sets boat kind.
    pub fn with_kind(mut self, kind: BoatKind) -> Self {
        self.kind = kind;
        self
    }

    /// Checks boat invariants.
    pub fn validate(&self) -> Result<(), RunError> {
        if self.id.is_empty() {
            return Err(RunError::InvalidInput("boat id cannot be empty".to_string()));
        }

        if !self.dimensions.is_positive() {
            return Err(RunError::InvalidInput(format!("boat '{}' has non-positive dimensions", self.id)));
        }

        if !self.time.is_valid() {
            return Err(RunError::InvalidInput(format!(
                "boat '{}' has invalid interval: arrival must be before departure",
                self.id
            )));
        }

        Ok(())
    }
}

/// Specifies slot category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SlotCategory {
    /// A berth rented to resident boats on a long term basis.
    Permanent,
    /// A berth which can host any kind of boat.
    #[default]
    Flexible,
    /// A guest berth.
    Transient,
}

/// Specifies an administrative slot status which is independent from any placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SlotStatus {
    /// The slot is free to use.
    #[default]
    Available,
    /// The slot is held by its owner and can be used only while temporarily released.
    Reserved,
}

/// Represents a dock slot (berth).
#[derive(Clone, Debug, PartialEq)]
pub struct Slot {
    /// Unique slot id.
    pub id: String,
    /// An id of the dock which owns the slot.
    pub dock_id: String,
    /// Physical dimensions.
    pub dimensions: Dimensions,
    /// Maximum boat dimensions the slot accepts.
    pub max_boat: Dimensions,
    /// Slot category.
    pub category: SlotCategory,
    /// Administrative status.
    pub status: SlotStatus,
    /// When set, the slot can be used only inside this window.
    pub availability: Option<TimeWindow>,
    /// Slot price.
    pub price: Float,
}

impl Slot {
    /// Creates a new validated instance of `Slot` with default category, status and price.
    pub fn new(id: &str, dock_id: &str, dimensions: Dimensions, max_boat: Dimensions) -> Result<Self, RunError> {
        let slot = Self {
            id: id.to_string(),
            dock_id: dock_id.to_string(),
            dimensions,
            max_boat,
            category: SlotCategory::default(),
            status: SlotStatus::default(),
            availability: None,
            price: 0.,
        };
        slot.validate()?;

        Ok(slot)
    }

    /// Sets slot category.
    pub fn with_category(mut self, category: SlotCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets slot status.
    pub fn with_status(mut self, status: SlotStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets slot availability window.
    pub fn with_availability(mut self, availability: Option<TimeWindow>) -> Self {
        self.availability = availability;
        self
    }

    /// Sets slot price.
    pub fn with_price(mut self, price: Float) -> Self {
        self.price = price;
        self
    }

    /// Checks slot invariants.
    pub fn validate(&self) -> Result<(), RunError> {
        let err = |msg: &str| Err(RunError::InvalidInput(format!("slot '{}' {msg}", self.id)));

        if self.id.is_empty() {
            return Err(RunError::InvalidInput("slot id cannot be empty".to_string()));
        }

        if !self.dimensions.is_positive() || !self.max_boat.is_positive() {
            return err("has non-positive dimensions");
        }

        if !self.max_boat.fits_into(&self.dimensions) {
            return err("accepts boats larger than its physical dimensions");
        }

        if self.availability.as_ref().is_some_and(|window| !window.is_valid()) {
            return err("has invalid availability window");
        }

        if !self.price.is_finite() || self.price < 0. {
            return err("has negative price");
        }

        Ok(())
    }
}

/// Represents a dock: a descriptive grouping of slots.
#[derive(Clone, Debug, PartialEq)]
pub struct Dock {
    /// Unique dock id.
    pub id: String,
    /// An optional human readable name.
    pub name: Option<String>,
    /// Dock position as (x, y).
    pub position: (Float, Float),
    /// Dock extent (length) in meters.
    pub extent: Float,
}

/// An assignment of a boat to a slot for a given interval, produced by a strategy.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    /// Assigned boat id.
    pub boat_id: String,
    /// Slot id.
    pub slot_id: String,
    /// Effective interval, always inside the boat's requested interval.
    pub time: TimeWindow,
    /// A name of the strategy which produced the assignment.
    pub strategy: String,
}
