//! Calendar value objects chrono does not provide
//!
//! `Year`, `YearMonth` and `MonthDay` are partial dates; `OffsetTime` is a
//! time of day paired with a fixed UTC offset. All of them are immutable and
//! validated on construction, so a value that exists is always well-formed.

use chrono::{Datelike, FixedOffset, Month, NaiveDate, NaiveTime};
use std::fmt;

use crate::error::TemporalError;

/// Leap year used to validate month-day combinations, so `02-29` is accepted
const LEAP_REFERENCE_YEAR: i32 = 2000;

/// A year in the proleptic ISO calendar
///
/// Bounded by the range of years chrono can represent as a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(i32);

impl Year {
    /// Creates a year, rejecting values chrono cannot place on a calendar
    pub fn new(year: i32) -> Result<Self, TemporalError> {
        if year < Self::min_value() || year > Self::max_value() {
            return Err(TemporalError::InvalidYear(i64::from(year)));
        }
        Ok(Self(year))
    }

    /// Extracts the year of any date-like value
    pub fn from_date(date: &impl Datelike) -> Self {
        Self(date.year())
    }

    /// Smallest supported year
    pub fn min_value() -> i32 {
        NaiveDate::MIN.year()
    }

    /// Largest supported year
    pub fn max_value() -> i32 {
        NaiveDate::MAX.year()
    }

    /// Returns the numeric year
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Returns true if February has 29 days in this year
    pub fn is_leap(&self) -> bool {
        NaiveDate::from_ymd_opt(self.0, 2, 29).is_some()
    }

    /// Combines this year with a month
    pub fn at_month(self, month: Month) -> YearMonth {
        YearMonth { year: self, month }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A year and month, e.g. `2024-03`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: Year,
    month: Month,
}

impl YearMonth {
    /// Creates a year-month from a numeric year and a month number (1-12)
    pub fn new(year: i32, month: u32) -> Result<Self, TemporalError> {
        let year = Year::new(year)?;
        let month = month_from_number(i64::from(month))?;
        Ok(year.at_month(month))
    }

    /// Extracts the year and month of any date-like value
    pub fn from_date(date: &impl Datelike) -> Self {
        Self {
            year: Year::from_date(date),
            month: month_of(date),
        }
    }

    pub fn year(&self) -> Year {
        self.year
    }

    /// Returns the month
    pub fn month(&self) -> Month {
        self.month
    }

    /// Returns the month number (1-12)
    pub fn month_value(&self) -> u32 {
        self.month.number_from_month()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year.value(), self.month_value())
    }
}

/// A month and day of month without a year, e.g. `--03-15`
///
/// February 29th is a valid month-day; whether it exists in a particular
/// year is answered by [`MonthDay::is_valid_year`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: Month,
    day: u32,
}

impl MonthDay {
    /// Creates a month-day, rejecting days that never occur in the month
    pub fn new(month: u32, day: u32) -> Result<Self, TemporalError> {
        let month_of_year = month_from_number(i64::from(month))?;
        if NaiveDate::from_ymd_opt(LEAP_REFERENCE_YEAR, month, day).is_none() {
            return Err(TemporalError::InvalidDay { month, day });
        }
        Ok(Self {
            month: month_of_year,
            day,
        })
    }

    /// Extracts the month and day of any date-like value
    pub fn from_date(date: &impl Datelike) -> Self {
        Self {
            month: month_of(date),
            day: date.day(),
        }
    }

    /// Returns the month
    pub fn month(&self) -> Month {
        self.month
    }

    /// Returns the month number (1-12)
    pub fn month_value(&self) -> u32 {
        self.month.number_from_month()
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns true if this month-day exists in the given year
    pub fn is_valid_year(&self, year: Year) -> bool {
        NaiveDate::from_ymd_opt(year.value(), self.month_value(), self.day).is_some()
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{:02}-{:02}", self.month_value(), self.day)
    }
}

/// A time of day with a fixed offset from UTC, e.g. `14:30+08:00`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetTime {
    time: NaiveTime,
    offset: FixedOffset,
}

impl OffsetTime {
    pub fn new(time: NaiveTime, offset: FixedOffset) -> Self {
        Self { time, offset }
    }

    /// Takes the time of day and offset of an offset date-time
    pub fn from_date_time(date_time: &chrono::DateTime<FixedOffset>) -> Self {
        Self {
            time: date_time.time(),
            offset: *date_time.offset(),
        }
    }

    /// Returns the local time of day
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns the offset from UTC
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.time, self.offset)
    }
}

/// The month of a date-like value, counted forward from January
fn month_of(date: &impl Datelike) -> Month {
    (0..date.month0()).fold(Month::January, |month, _| month.succ())
}

/// Converts a month number (1-12) into a chrono month
pub fn month_from_number(number: i64) -> Result<Month, TemporalError> {
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .ok_or(TemporalError::InvalidMonth(number))
}
