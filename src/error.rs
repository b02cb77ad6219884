//! Error types for form validation, routing and page loading

use crate::state::FieldName;
use thiserror::Error;

/// A single field failing its validation rule.
///
/// Always recoverable by correcting the field; never a system fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    /// The failing field
    pub field: FieldName,
    /// Human-readable message shown inline under the field
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Route resolution failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No route matches the requested path
    #[error("No page found at {0}")]
    NotFound(String),
}

/// Page content resolution failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Resolution did not finish within the configured bound
    #[error("Loading timed out after {0} ms")]
    Timeout(u64),

    /// Page asset could not be read
    #[error("Failed to read page asset: {0}")]
    Io(String),

    /// Page asset was not valid JSON content
    #[error("Malformed page asset: {0}")]
    Malformed(String),

    /// Loader task ended without reporting back
    #[error("Loader stopped unexpectedly")]
    Aborted,
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Malformed(err.to_string())
    }
}
