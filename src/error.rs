//! Error types.

use std::fmt;

use crate::validation::ValidationError;

/// Errors surfaced to callers of the dispatcher and the import boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum SchedulerError {
    /// The algorithm identifier is not recognized.
    UnknownAlgorithm(String),
    /// Input failed validation.
    InvalidInput(Vec<ValidationError>),
    /// Imported data could not be parsed as a process list.
    MalformedImport(String),
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulerError::UnknownAlgorithm(name) => {
                write!(f, "Unknown scheduling algorithm: {name}")
            }
            SchedulerError::InvalidInput(errors) => {
                write!(f, "invalid input")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{}", e.message)?;
                }
                Ok(())
            }
            SchedulerError::MalformedImport(reason) => write!(f, "malformed import: {reason}"),
        }
    }
}

impl std::error::Error for SchedulerError {}

impl From<Vec<ValidationError>> for SchedulerError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SchedulerError::InvalidInput(errors)
    }
}

impl From<serde_json::Error> for SchedulerError {
    fn from(err: serde_json::Error) -> Self {
        SchedulerError::MalformedImport(err.to_string())
    }
}
