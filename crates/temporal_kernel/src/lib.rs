//! Temporal Kernel - Calendar and clock value types
//!
//! This crate provides the value types the JSON codecs work on:
//! - Aliases for the types chrono already supplies (dates, times, instants)
//! - `Year`, `YearMonth`, `MonthDay` and `OffsetTime` value objects
//! - `ZonedDateTime` and the `ZoneId` policy used to re-attach zones

pub mod error;
pub mod values;
pub mod zone;
pub mod zoned;

pub use error::TemporalError;
pub use values::{Year, YearMonth, MonthDay, OffsetTime};
pub use zone::ZoneId;
pub use zoned::{ZonedDateTime, Truncate};

/// A date without a time or zone, e.g. `2024-03-15`
pub type LocalDate = chrono::NaiveDate;

/// A time of day without a date or zone, e.g. `14:30`
pub type LocalTime = chrono::NaiveTime;

/// A date and time without a zone
pub type LocalDateTime = chrono::NaiveDateTime;

/// A date and time carrying a fixed UTC offset
pub type OffsetDateTime = chrono::DateTime<chrono::FixedOffset>;

/// An instantaneous point on the UTC time-line
pub type Instant = chrono::DateTime<chrono::Utc>;

/// A month of the year
pub type Month = chrono::Month;
