use crate::utils::Float;

/// Physical footprint of a boat or a slot in meters.
#[derive(Clone, Debug, PartialEq)]
pub struct Dimensions {
    /// Length in meters.
    pub length: Float,
    /// Width (beam) in meters.
    pub width: Float,
}

impl Dimensions {
    /// Creates a new instance of `Dimensions`.
    pub fn new(length: Float, width: Float) -> Self {
        Self { length, width }
    }

    /// Returns true when both sides are finite and positive.
    pub fn is_positive(&self) -> bool {
        self.length.is_finite() && self.width.is_finite() && self.length > 0. && self.width > 0.
    }

    /// Returns true when this footprint does not exceed given limit on any side.
    pub fn fits_into(&self, limit: &Dimensions) -> bool {
        self.length <= limit.length && self.width <= limit.width
    }
}
