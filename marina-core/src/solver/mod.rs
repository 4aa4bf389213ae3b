//! The solver module runs placement strategies over a snapshot, evaluates their outputs and selects the best.
//!
//! # Examples
//!
//! ```
//! # use marina_core::models::common::{Dimensions, TimeWindow};
//! # use marina_core::models::{Boat, Slot, Snapshot};
//! # use marina_core::solver::*;
//! # use marina_core::utils::Environment;
//! # use std::sync::Arc;
//! let boats = vec![Boat::new("boat1", Dimensions::new(8., 3.), TimeWindow::new(0., 100.))?];
//! let slots = vec![Slot::new("slot1", "dock1", Dimensions::new(12., 4.), Dimensions::new(10., 3.5))?];
//! let snapshot = Arc::new(Snapshot::new(boats, slots, vec![])?);
//!
//! let solver = Solver::new(get_default_registry(), Arc::new(Environment::default()));
//! let request = RunRequest::new(snapshot, vec!["first_fit".to_string()], RunConfig::default().with_seed(Some(42)));
//! let result = solver.run(&request)?;
//!
//! assert_eq!(result.selected, "first_fit");
//! assert_eq!(result.outcomes[0].evaluation.boats_placed, 1);
//! # Ok::<(), marina_core::models::RunError>(())
//! ```

mod coordinator;
pub use self::coordinator::*;

mod evaluation;
pub use self::evaluation::*;

mod narrative;
pub use self::narrative::*;

mod registry;
pub use self::registry::*;

mod scheduler;
pub use self::scheduler::*;

pub mod strategies;
