use crate::models::common::{Dimensions, TimeWindow};
use crate::models::*;
use crate::utils::Float;

pub const DAY: Float = 86_400.;

pub struct BoatBuilder(Boat);

impl BoatBuilder {
    pub fn new(id: &str) -> Self {
        Self(Boat {
            id: id.to_string(),
            name: None,
            dimensions: Dimensions::new(6., 2.5),
            time: TimeWindow::new(0., 10.),
            kind: BoatKind::Resident,
        })
    }

    pub fn dimensions(mut self, length: Float, width: Float) -> Self {
        self.0.dimensions = Dimensions::new(length, width);
        self
    }

    pub fn time(mut self, start: Float, end: Float) -> Self {
        self.0.time = TimeWindow::new(start, end);
        self
    }

    pub fn kind(mut self, kind: BoatKind) -> Self {
        self.0.kind = kind;
        self
    }

    pub fn build(self) -> Boat {
        self.0
    }
}

pub struct SlotBuilder(Slot);

impl SlotBuilder {
    pub fn new(id: &str) -> Self {
        Self(Slot {
            id: id.to_string(),
            dock_id: "dock1".to_string(),
            dimensions: Dimensions::new(12., 4.),
            max_boat: Dimensions::new(10., 3.5),
            category: SlotCategory::Flexible,
            status: SlotStatus::Available,
            availability: None,
            price: 100.,
        })
    }

    /// Sets max boat dimensions, physical dimensions are set slightly larger.
    pub fn max_boat(mut self, length: Float, width: Float) -> Self {
        self.0.max_boat = Dimensions::new(length, width);
        self.0.dimensions = Dimensions::new(length + 1., width + 0.5);
        self
    }

    pub fn dock(mut self, dock_id: &str) -> Self {
        self.0.dock_id = dock_id.to_string();
        self
    }

    pub fn category(mut self, category: SlotCategory) -> Self {
        self.0.category = category;
        self
    }

    pub fn status(mut self, status: SlotStatus) -> Self {
        self.0.status = status;
        self
    }

    pub fn availability(mut self, start: Float, end: Float) -> Self {
        self.0.availability = Some(TimeWindow::new(start, end));
        self
    }

    pub fn price(mut self, price: Float) -> Self {
        self.0.price = price;
        self
    }

    pub fn build(self) -> Slot {
        self.0
    }
}

pub fn test_boat(id: &str, length: Float, (start, end): (Float, Float)) -> Boat {
    BoatBuilder::new(id).dimensions(length, 2.5).time(start, end).build()
}

pub fn test_slot(id: &str, max_length: Float) -> Slot {
    SlotBuilder::new(id).max_boat(max_length, 3.5).build()
}

pub fn test_dock(id: &str) -> Dock {
    Dock { id: id.to_string(), name: None, position: (0., 0.), extent: 100. }
}

pub fn create_snapshot(boats: Vec<Boat>, slots: Vec<Slot>) -> Snapshot {
    Snapshot::new(boats, slots, vec![]).expect("cannot create snapshot")
}

pub fn test_assignment(boat_id: &str, slot_id: &str, (start, end): (Float, Float)) -> Assignment {
    Assignment {
        boat_id: boat_id.to_string(),
        slot_id: slot_id.to_string(),
        time: TimeWindow::new(start, end),
        strategy: "test".to_string(),
    }
}
