//! Error types for fleet domain parsing.

use thiserror::Error;

/// Errors returned while interpreting fleet field values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FleetDomainError {
    /// The vehicle status string is not one of the three known statuses.
    #[error("unknown vehicle status: {0}")]
    UnknownVehicleStatus(String),

    /// The job type string is not one of the five service categories.
    #[error("unknown job type: {0}")]
    UnknownJobType(String),

    /// The model year entered by the user is not an integer.
    #[error("invalid model year '{0}', expected an integer")]
    InvalidYear(String),
}
