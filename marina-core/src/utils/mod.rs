//! This module contains helper functionality shared by the placement engine.

mod comparison;
pub use self::comparison::*;

mod environment;
pub use self::environment::*;

mod error;
pub use self::error::*;

mod parallel;
pub use self::parallel::*;

mod quota;
pub use self::quota::*;

mod random;
pub use self::random::*;

mod timing;
pub use self::timing::*;

/// Alias to a scalar floating type.
pub type Float = f64;
