//! The construction module contains logic to build assignment sets boat by boat.

pub mod feasibility;
pub mod heuristics;
