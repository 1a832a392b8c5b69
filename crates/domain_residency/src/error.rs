//! Residency domain errors

use thiserror::Error;

/// Errors that can occur in the residency domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResidencyError {
    /// Status transition not allowed from the current state
    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    /// Bed is not available for assignment
    #[error("Bed {0} is not vacant")]
    BedNotVacant(String),

    /// Occupied bed cannot be removed
    #[error("Cannot remove bed {0}: checkout the student first")]
    BedOccupied(String),

    /// Required field is missing or blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
