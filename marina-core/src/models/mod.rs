//! A collection of models to represent a dock slot assignment problem and its solution.

pub mod common;

mod domain;
pub use self::domain::*;

mod errors;
pub use self::errors::*;

mod snapshot;
pub use self::snapshot::*;
