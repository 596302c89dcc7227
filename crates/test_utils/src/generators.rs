//! Property-Based Test Generators
//!
//! Provides proptest strategies for temporal values. Dates stay within the
//! four-digit years the string patterns can carry.

use chrono::{DateTime, FixedOffset, Month, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use proptest::prelude::*;
use temporal_kernel::{MonthDay, Year, YearMonth};

/// Days from 0001-01-01 to 9999-12-31, counted from the common era
const MAX_PATTERN_DAY: i32 = 3_652_059;

/// Strategy for dates with four-digit years
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1..=MAX_PATTERN_DAY).prop_map(|days| NaiveDate::from_num_days_from_ce_opt(days).unwrap())
}

/// Strategy for times of day with whole minutes
pub fn minute_time_strategy() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60).prop_map(|(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
}

/// Strategy for times of day down to the nanosecond
pub fn time_strategy() -> impl Strategy<Value = NaiveTime> {
    (0u32..86_400, 0u32..1_000_000_000).prop_map(|(seconds, nanos)| {
        NaiveTime::from_num_seconds_from_midnight_opt(seconds, nanos).unwrap()
    })
}

/// Strategy for date-times down to the nanosecond
pub fn date_time_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (date_strategy(), time_strategy()).prop_map(|(date, time)| date.and_time(time))
}

/// Strategy for whole-minute offsets within +/-18 hours
pub fn offset_strategy() -> impl Strategy<Value = FixedOffset> {
    (-1080i32..=1080).prop_map(|minutes| FixedOffset::east_opt(minutes * 60).unwrap())
}

/// Strategy for offset date-times down to the nanosecond
pub fn offset_date_time_strategy() -> impl Strategy<Value = DateTime<FixedOffset>> {
    (date_time_strategy(), offset_strategy())
        .prop_map(|(local, offset)| offset.from_local_datetime(&local).unwrap())
}

/// Strategy for instants between years 1 and 9999
pub fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (-62_135_596_800i64..253_402_300_799, 0u32..1_000_000_000)
        .prop_map(|(seconds, nanos)| DateTime::from_timestamp(seconds, nanos).unwrap())
}

/// Strategy for every supported year
pub fn year_strategy() -> impl Strategy<Value = Year> {
    (Year::min_value()..=Year::max_value()).prop_map(|year| Year::new(year).unwrap())
}

pub fn month_strategy() -> impl Strategy<Value = Month> {
    (1u8..=12).prop_map(|month| Month::try_from(month).unwrap())
}

/// Strategy for every supported year-month, negative years included
pub fn year_month_strategy() -> impl Strategy<Value = YearMonth> {
    (year_strategy(), month_strategy()).prop_map(|(year, month)| year.at_month(month))
}

/// Strategy for month-days, February 29th included
pub fn month_day_strategy() -> impl Strategy<Value = MonthDay> {
    (0u32..366).prop_map(|ordinal| {
        let date = NaiveDate::from_yo_opt(2000, ordinal + 1).unwrap();
        MonthDay::from_date(&date)
    })
}
