//! This module defines logic to deserialize run requests from json and to serialize run results,
//! background run statuses and strategy catalog into json.

#[cfg(test)]
#[path = "../../tests/unit/format/format_test.rs"]
mod format_test;

use serde::Serialize;
use std::fmt::{Display, Formatter};

pub mod problem;
pub mod solution;

/// A format error.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` action without details.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action, details: None }
    }

    /// Creates a new instance of `FormatError` action.
    pub fn new_with_details(code: String, cause: String, action: String, details: String) -> Self {
        Self { code, cause, action, details: Some(details) }
    }

    /// Serializes error into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| self.to_string())
    }
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)
    }
}

impl std::error::Error for FormatError {}

/// Keeps track of multiple format errors.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiFormatError {
    /// Inner errors.
    pub errors: Vec<FormatError>,
}

impl MultiFormatError {
    /// Returns an iterator over inner errors.
    pub fn iter(&self) -> impl Iterator<Item = &FormatError> {
        self.errors.iter()
    }

    /// Formats multiple format errors into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.errors).unwrap_or_else(|_| self.to_string())
    }
}

impl Display for MultiFormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join("\n"))
    }
}

impl std::error::Error for MultiFormatError {}

impl From<Vec<FormatError>> for MultiFormatError {
    fn from(errors: Vec<FormatError>) -> Self {
        MultiFormatError { errors }
    }
}

impl From<FormatError> for MultiFormatError {
    fn from(error: FormatError) -> Self {
        MultiFormatError { errors: vec![error] }
    }
}

impl IntoIterator for MultiFormatError {
    type Item = FormatError;
    type IntoIter = std::vec::IntoIter<FormatError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
