//! A generalized placement heuristic: boats are taken in some order and each one is put into a slot
//! chosen among all legal ones.

mod context;
pub use self::context::*;

mod placement;
pub use self::placement::*;

mod selectors;
pub use self::selectors::*;
