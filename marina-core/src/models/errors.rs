use crate::utils::GenericError;
use std::fmt::{Display, Formatter};

/// Specifies errors which make a placement run impossible to start or to query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunError {
    /// A boat, slot or dock is malformed: non-positive dimension, inverted interval, duplicate id, etc.
    InvalidInput(String),
    /// A requested strategy is not registered.
    UnknownStrategy(String),
    /// Run configuration is not valid: weights do not sum to one, non-positive time limit, etc.
    InvalidConfiguration(String),
    /// A background run with given id is not known.
    UnknownRun(String),
}

impl Display for RunError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            RunError::UnknownStrategy(name) => write!(f, "unknown strategy: '{name}'"),
            RunError::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            RunError::UnknownRun(id) => write!(f, "unknown run: '{id}'"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<RunError> for GenericError {
    fn from(value: RunError) -> Self {
        GenericError::from(value.to_string())
    }
}
