//! Format rules
//!
//! Fixed-width formatter/parser pairs for the string encodings and the
//! arithmetic behind the numeric ones. Every parser is strict: the input must
//! match its pattern exactly, field widths included, and describe a real
//! calendar value. Nothing here allocates beyond the output string.

use chrono::{DateTime, Datelike, Month, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use temporal_kernel::values::month_from_number;
use temporal_kernel::{MonthDay, Year, YearMonth};

use crate::error::CodecError;

pub const DATE_PATTERN: &str = "yyyy-MM-dd";
pub const TIME_PATTERN: &str = "HH:mm";
pub const TIME_SECONDS_PATTERN: &str = "HH:mm:ss";
pub const DATE_TIME_PATTERN: &str = "yyyy-MM-dd HH:mm";
pub const DATE_TIME_SECONDS_PATTERN: &str = "yyyy-MM-dd HH:mm:ss";
pub const MONTH_DAY_PATTERN: &str = "MM-dd";

/// Largest year a four-digit pattern can carry
const MAX_PATTERN_YEAR: i32 = 9999;

/// How much of the time of day a date-time string keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateTimePrecision {
    /// `yyyy-MM-dd HH:mm`
    #[default]
    Minutes,
    /// `yyyy-MM-dd HH:mm:ss`
    Seconds,
}

impl DateTimePrecision {
    pub fn date_time_pattern(&self) -> &'static str {
        match self {
            DateTimePrecision::Minutes => DATE_TIME_PATTERN,
            DateTimePrecision::Seconds => DATE_TIME_SECONDS_PATTERN,
        }
    }

    pub fn time_pattern(&self) -> &'static str {
        match self {
            DateTimePrecision::Minutes => TIME_PATTERN,
            DateTimePrecision::Seconds => TIME_SECONDS_PATTERN,
        }
    }
}

/// Reads fixed-width fields left to right
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { bytes: text.as_bytes(), pos: 0 }
    }

    /// Reads exactly `width` ASCII digits
    fn digits(&mut self, width: usize) -> Option<u32> {
        let field = self.bytes.get(self.pos..self.pos + width)?;
        let mut value = 0u32;
        for byte in field {
            if !byte.is_ascii_digit() {
                return None;
            }
            value = value * 10 + u32::from(byte - b'0');
        }
        self.pos += width;
        Some(value)
    }

    fn literal(&mut self, expected: u8) -> Option<()> {
        match self.bytes.get(self.pos) {
            Some(&byte) if byte == expected => {
                self.pos += 1;
                Some(())
            }
            _ => None,
        }
    }

    fn at_end(&self) -> Option<()> {
        (self.pos == self.bytes.len()).then_some(())
    }
}

fn mismatch(type_name: &'static str, text: &str, pattern: &str) -> CodecError {
    CodecError::malformed(type_name, format!("{:?}", text), format!("does not match {}", pattern))
}

fn check_year(type_name: &'static str, date: &NaiveDate) -> Result<(), CodecError> {
    if (0..=MAX_PATTERN_YEAR).contains(&date.year()) {
        Ok(())
    } else {
        Err(CodecError::unrepresentable(
            type_name,
            date,
            "year must have exactly four digits",
        ))
    }
}

fn read_date(cursor: &mut Cursor<'_>) -> Option<(i32, u32, u32)> {
    let year = cursor.digits(4)?;
    cursor.literal(b'-')?;
    let month = cursor.digits(2)?;
    cursor.literal(b'-')?;
    let day = cursor.digits(2)?;
    Some((year as i32, month, day))
}

fn read_time(cursor: &mut Cursor<'_>, precision: DateTimePrecision) -> Option<(u32, u32, u32)> {
    let hour = cursor.digits(2)?;
    cursor.literal(b':')?;
    let minute = cursor.digits(2)?;
    let second = match precision {
        DateTimePrecision::Minutes => 0,
        DateTimePrecision::Seconds => {
            cursor.literal(b':')?;
            cursor.digits(2)?
        }
    };
    Some((hour, minute, second))
}

/// Formats a date as `yyyy-MM-dd`
pub fn format_date(type_name: &'static str, date: &NaiveDate) -> Result<String, CodecError> {
    check_year(type_name, date)?;
    Ok(format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day()))
}

/// Parses `yyyy-MM-dd`
pub fn parse_date(type_name: &'static str, text: &str) -> Result<NaiveDate, CodecError> {
    let mut cursor = Cursor::new(text);
    let (year, month, day) = read_date(&mut cursor)
        .and_then(|fields| cursor.at_end().map(|_| fields))
        .ok_or_else(|| mismatch(type_name, text, DATE_PATTERN))?;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| CodecError::malformed(type_name, format!("{:?}", text), "no such date"))
}

/// Formats a time of day as `HH:mm` or `HH:mm:ss`, dropping finer fields
pub fn format_time(time: &NaiveTime, precision: DateTimePrecision) -> String {
    match precision {
        DateTimePrecision::Minutes => format!("{:02}:{:02}", time.hour(), time.minute()),
        DateTimePrecision::Seconds => {
            format!("{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second())
        }
    }
}

/// Parses `HH:mm` or `HH:mm:ss`
pub fn parse_time(
    type_name: &'static str,
    text: &str,
    precision: DateTimePrecision,
) -> Result<NaiveTime, CodecError> {
    let mut cursor = Cursor::new(text);
    let (hour, minute, second) = read_time(&mut cursor, precision)
        .and_then(|fields| cursor.at_end().map(|_| fields))
        .ok_or_else(|| mismatch(type_name, text, precision.time_pattern()))?;
    NaiveTime::from_hms_opt(hour, minute, second)
        .ok_or_else(|| CodecError::malformed(type_name, format!("{:?}", text), "no such time of day"))
}

/// Formats a date-time as `yyyy-MM-dd HH:mm` or `yyyy-MM-dd HH:mm:ss`
pub fn format_date_time(
    type_name: &'static str,
    date_time: &NaiveDateTime,
    precision: DateTimePrecision,
) -> Result<String, CodecError> {
    let date = format_date(type_name, &date_time.date())?;
    Ok(format!("{} {}", date, format_time(&date_time.time(), precision)))
}

/// Parses `yyyy-MM-dd HH:mm` or `yyyy-MM-dd HH:mm:ss`
pub fn parse_date_time(
    type_name: &'static str,
    text: &str,
    precision: DateTimePrecision,
) -> Result<NaiveDateTime, CodecError> {
    let mut cursor = Cursor::new(text);
    let fields = read_date(&mut cursor).and_then(|date| {
        cursor.literal(b' ')?;
        let time = read_time(&mut cursor, precision)?;
        cursor.at_end()?;
        Some((date, time))
    });
    let ((year, month, day), (hour, minute, second)) =
        fields.ok_or_else(|| mismatch(type_name, text, precision.date_time_pattern()))?;
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or_else(|| CodecError::malformed(type_name, format!("{:?}", text), "no such date-time"))
}

/// Formats a month-day as `MM-dd`
pub fn format_month_day(month_day: &MonthDay) -> String {
    format!("{:02}-{:02}", month_day.month_value(), month_day.day())
}

/// Parses `MM-dd`
pub fn parse_month_day(type_name: &'static str, text: &str) -> Result<MonthDay, CodecError> {
    let mut cursor = Cursor::new(text);
    let fields = cursor.digits(2).and_then(|month| {
        cursor.literal(b'-')?;
        let day = cursor.digits(2)?;
        cursor.at_end()?;
        Some((month, day))
    });
    let (month, day) = fields.ok_or_else(|| mismatch(type_name, text, MONTH_DAY_PATTERN))?;
    MonthDay::new(month, day)
        .map_err(|err| CodecError::malformed(type_name, format!("{:?}", text), err.to_string()))
}

/// Whole seconds since the epoch; fractional seconds are dropped by rounding
/// down, so an instant 0.25 s before the epoch is second -1
pub fn epoch_seconds(instant: &DateTime<Utc>) -> i64 {
    instant.timestamp()
}

pub fn instant_from_epoch_seconds(
    type_name: &'static str,
    seconds: i64,
) -> Result<DateTime<Utc>, CodecError> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| CodecError::malformed(type_name, seconds, "instant out of range"))
}

/// Packs a year-month as `year * 100 + month`
///
/// Decoding uses Euclidean division, so negative years survive a round trip,
/// but the packed integers only sort chronologically among non-negative years.
pub fn year_month_number(year_month: &YearMonth) -> i64 {
    i64::from(year_month.year().value()) * 100 + i64::from(year_month.month_value())
}

pub fn year_month_from_number(type_name: &'static str, number: i64) -> Result<YearMonth, CodecError> {
    let year = i32::try_from(number.div_euclid(100))
        .map_err(|_| CodecError::malformed(type_name, number, "year out of range"))?;
    let month = number.rem_euclid(100) as u32;
    YearMonth::new(year, month).map_err(|err| CodecError::malformed(type_name, number, err.to_string()))
}

pub fn year_from_number(type_name: &'static str, number: i64) -> Result<Year, CodecError> {
    i32::try_from(number)
        .ok()
        .and_then(|year| Year::new(year).ok())
        .ok_or_else(|| CodecError::malformed(type_name, number, "year out of range"))
}

pub fn month_from_wire_number(type_name: &'static str, number: i64) -> Result<Month, CodecError> {
    month_from_number(number).map_err(|err| CodecError::malformed(type_name, number, err.to_string()))
}
