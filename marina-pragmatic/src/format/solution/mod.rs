//! Specifies logic to write run results, background run statuses and strategy catalog into json.

mod model;
pub use self::model::*;

mod writer;
pub use self::writer::*;
