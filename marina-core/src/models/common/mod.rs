//! Common models.

mod dimens;
pub use self::dimens::*;

mod primitives;
pub use self::primitives::*;
