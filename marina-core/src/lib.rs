//! Core crate contains the building blocks to assign boats to dock slots over time: a domain model,
//! a feasibility checker shared by all placement strategies, a strategy library, an evaluator and
//! a run coordinator which selects the best strategy output.
//!
//! Boats and slots are supplied as an immutable [`models::Snapshot`] on every run, the crate keeps no state
//! between runs apart from background run statuses in [`solver::RunScheduler`].

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/generator/mod.rs"]
pub mod generator;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
pub mod discovery;

pub mod construction;
pub mod models;
pub mod solver;
pub mod utils;
