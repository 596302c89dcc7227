//! Pre-built Test Fixtures
//!
//! Provides fixed reference values for every temporal type. All of them are
//! derived from one offset date-time, 2024-03-15 14:30 at +08:00, already
//! truncated to the minute so it survives the wire unchanged.

use chrono::{DateTime, FixedOffset, Month, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use temporal_json::{JsonMapper, MapperFeatures, TemporalModule};
use temporal_kernel::{MonthDay, OffsetTime, Year, YearMonth, ZoneId, ZonedDateTime};

/// The reference instant every fixture is derived from
pub static REFERENCE: Lazy<DateTime<FixedOffset>> = Lazy::new(|| {
    FixedOffset::east_opt(8 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 3, 15, 14, 30, 0)
        .unwrap()
});

/// The reference instant with seconds and nanoseconds still attached
pub static REFERENCE_WITH_SECONDS: Lazy<DateTime<FixedOffset>> = Lazy::new(|| {
    let local = NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_nano_opt(14, 30, 45, 123_456_789)
        .unwrap();
    FixedOffset::east_opt(8 * 3600)
        .unwrap()
        .from_local_datetime(&local)
        .unwrap()
});

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Zone the reference mapper re-attaches on decode (+08:00)
    pub fn zone() -> ZoneId {
        ZoneId::Fixed(*REFERENCE.offset())
    }

    pub fn offset_date_time() -> DateTime<FixedOffset> {
        *REFERENCE
    }

    pub fn local_date_time() -> NaiveDateTime {
        REFERENCE.naive_local()
    }

    pub fn local_date() -> NaiveDate {
        REFERENCE.date_naive()
    }

    pub fn local_time() -> NaiveTime {
        REFERENCE.time()
    }

    pub fn offset_time() -> OffsetTime {
        OffsetTime::from_date_time(&REFERENCE)
    }

    pub fn zoned_date_time() -> ZonedDateTime {
        ZonedDateTime::from_offset(*REFERENCE)
    }

    pub fn instant() -> DateTime<Utc> {
        REFERENCE.with_timezone(&Utc)
    }

    /// Epoch seconds of the reference instant (2024-03-15 06:30 UTC)
    pub fn epoch_seconds() -> i64 {
        1_710_484_200
    }

    pub fn year_month() -> YearMonth {
        YearMonth::from_date(&*REFERENCE)
    }

    pub fn year() -> Year {
        Year::from_date(&*REFERENCE)
    }

    pub fn month() -> Month {
        Month::March
    }

    pub fn month_day() -> MonthDay {
        MonthDay::from_date(&*REFERENCE)
    }
}

/// Module configured with the fixture zone
pub fn reference_module() -> TemporalModule {
    TemporalModule::builder().zone(TemporalFixtures::zone()).build()
}

/// Mapper that omits empty fields, reads `""` as absent and ignores unknown
/// fields, with the reference module installed
pub fn lenient_mapper() -> JsonMapper {
    JsonMapper::new(MapperFeatures::lenient()).with_module(&reference_module())
}

/// Mapper with default (strict) features and the reference module installed
pub fn strict_mapper() -> JsonMapper {
    JsonMapper::new(MapperFeatures::default()).with_module(&reference_module())
}
