//! Errors raised while constructing temporal values

use thiserror::Error;

/// Errors related to temporal value construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid year: {0} is outside the supported range")]
    InvalidYear(i64),

    #[error("Invalid month: {0} must be between 1 and 12")]
    InvalidMonth(i64),

    #[error("Invalid day: {day} does not exist in month {month}")]
    InvalidDay {
        month: u32,
        day: u32,
    },

    #[error("Local time {local} does not exist in zone {zone}")]
    NonexistentLocalTime {
        local: String,
        zone: String,
    },

    #[error("Unknown zone: {0}")]
    UnknownZone(String),
}

impl TemporalError {
    pub fn nonexistent(local: impl ToString, zone: impl ToString) -> Self {
        TemporalError::NonexistentLocalTime {
            local: local.to_string(),
            zone: zone.to_string(),
        }
    }
}
