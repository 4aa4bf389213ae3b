//! Contains command line extensions.

pub mod check;
pub mod import;
pub mod solve;
