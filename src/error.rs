//! Failure kinds shared by the key algebra, predicates and the template renderer

use thiserror::Error;

/// Message used when a failure is raised without one
pub const DEFAULT_ERROR_MESSAGE: &str = "Unknown error";

/// Errors raised by the pure core of cbf
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Cannot take the first key of an empty mapping")]
    EmptyMapping,
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),
    #[error("No value for placeholder `{placeholder}` in template `{template}`")]
    MissingPlaceholder {
        template: String,
        placeholder: String,
    },
    #[error("Unknown message template: {0}")]
    UnknownTemplate(String),
    #[error("Invalid variables: {0}")]
    InvalidVariables(String),
    #[error("{0}")]
    Generic(String),
}

impl CoreError {
    /// Build a generic failure, falling back to [`DEFAULT_ERROR_MESSAGE`] when
    /// `message` is absent or empty.
    #[must_use]
    pub fn generic(message: Option<&str>) -> Self {
        match message {
            Some(message) if !message.is_empty() => CoreError::Generic(message.to_string()),
            _ => CoreError::Generic(DEFAULT_ERROR_MESSAGE.to_string()),
        }
    }
}

/// Raise a generic failure.
///
/// # Errors
///
/// Always returns `CoreError::Generic`.
pub fn fail<T>(message: Option<&str>) -> Result<T, CoreError> {
    Err(CoreError::generic(message))
}
