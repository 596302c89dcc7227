//! Zoned date-times and precision truncation

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use std::fmt;

use crate::error::TemporalError;
use crate::values::OffsetTime;
use crate::zone::ZoneId;

/// A date-time with an offset and the zone that produced it
///
/// Two values are equal only when local date-time, offset and zone all match,
/// which is stricter than chrono's instant-based equality on `DateTime`.
#[derive(Debug, Clone, Copy)]
pub struct ZonedDateTime {
    date_time: DateTime<FixedOffset>,
    zone: ZoneId,
}

impl ZonedDateTime {
    /// Places a local date-time in a zone
    pub fn of(local: NaiveDateTime, zone: ZoneId) -> Result<Self, TemporalError> {
        Ok(Self {
            date_time: zone.resolve(&local)?,
            zone,
        })
    }

    /// Wraps an offset date-time, using its offset as the zone
    pub fn from_offset(date_time: DateTime<FixedOffset>) -> Self {
        Self {
            zone: ZoneId::Fixed(*date_time.offset()),
            date_time,
        }
    }

    /// Expresses an instant in a zone
    pub fn from_instant(instant: &DateTime<Utc>, zone: ZoneId) -> Self {
        Self {
            date_time: zone.at_instant(instant),
            zone,
        }
    }

    /// Returns the same wall-clock time placed in another zone
    pub fn with_zone_same_local(&self, zone: ZoneId) -> Result<Self, TemporalError> {
        Self::of(self.local(), zone)
    }

    pub fn local(&self) -> NaiveDateTime {
        self.date_time.naive_local()
    }

    pub fn offset(&self) -> FixedOffset {
        *self.date_time.offset()
    }

    pub fn zone(&self) -> ZoneId {
        self.zone
    }

    pub fn to_offset_date_time(&self) -> DateTime<FixedOffset> {
        self.date_time
    }

    pub fn to_instant(&self) -> DateTime<Utc> {
        self.date_time.with_timezone(&Utc)
    }
}

impl PartialEq for ZonedDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.local() == other.local() && self.offset() == other.offset() && self.zone == other.zone
    }
}

impl Eq for ZonedDateTime {}

impl fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.zone {
            ZoneId::Fixed(_) => write!(f, "{}", self.date_time.to_rfc3339()),
            zone => write!(f, "{}[{}]", self.date_time.to_rfc3339(), zone),
        }
    }
}

/// Drops sub-minute or sub-second fields from a temporal value
pub trait Truncate: Sized {
    /// Clears seconds and fractional seconds
    fn truncate_to_minutes(&self) -> Self;

    /// Clears fractional seconds
    fn truncate_to_seconds(&self) -> Self;
}

impl Truncate for NaiveTime {
    fn truncate_to_minutes(&self) -> Self {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or(*self)
    }

    fn truncate_to_seconds(&self) -> Self {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), self.second()).unwrap_or(*self)
    }
}

impl Truncate for NaiveDateTime {
    fn truncate_to_minutes(&self) -> Self {
        self.date().and_time(self.time().truncate_to_minutes())
    }

    fn truncate_to_seconds(&self) -> Self {
        self.date().and_time(self.time().truncate_to_seconds())
    }
}

impl<Tz: TimeZone> Truncate for DateTime<Tz> {
    fn truncate_to_minutes(&self) -> Self {
        self.truncate_to_seconds() - Duration::seconds(i64::from(self.second()))
    }

    fn truncate_to_seconds(&self) -> Self {
        self.clone() - Duration::nanoseconds(i64::from(self.nanosecond()))
    }
}

impl Truncate for OffsetTime {
    fn truncate_to_minutes(&self) -> Self {
        OffsetTime::new(self.time().truncate_to_minutes(), self.offset())
    }

    fn truncate_to_seconds(&self) -> Self {
        OffsetTime::new(self.time().truncate_to_seconds(), self.offset())
    }
}

impl Truncate for ZonedDateTime {
    fn truncate_to_minutes(&self) -> Self {
        Self {
            date_time: self.date_time.truncate_to_minutes(),
            zone: self.zone,
        }
    }

    fn truncate_to_seconds(&self) -> Self {
        Self {
            date_time: self.date_time.truncate_to_seconds(),
            zone: self.zone,
        }
    }
}
