//! Domain error types.
//!
//! These errors come out of the schedule, fare and station lookups. They
//! are distinct from upstream/IO errors.

/// Domain-level errors for lookups and schedule conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A non-empty schedule token is not a valid "HH:MM" time
    #[error("invalid time format {0}")]
    InvalidTimeFormat(String),

    /// No station with the given id
    #[error("station not found: {0}")]
    StationNotFound(String),

    /// Destination code is not one of the end-of-line codes
    #[error("invalid destination {0:?}, use 'LB' or 'HI'")]
    InvalidDestination(String),

    /// Service has ended for the day
    #[error("no next train available today")]
    NoUpcomingDeparture,

    /// Neither station carries an estimate for the other
    #[error("fare not found between stations {from} and {to}")]
    FareNotFound { from: String, to: String },
}
