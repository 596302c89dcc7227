//! Per-type codecs
//!
//! Each codec pairs an encoder and a decoder for one temporal type, built from
//! the format rules. Codecs are immutable once constructed; the zone and
//! precision they need are fixed at construction.

use chrono::{DateTime, FixedOffset, Month, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use temporal_kernel::{MonthDay, OffsetTime, Year, YearMonth, ZoneId, ZonedDateTime};

use crate::error::CodecError;
use crate::format::{self, DateTimePrecision};
use crate::wire::WireValue;

/// Encoder and decoder for one value type
pub trait Codec<T>: Send + Sync {
    /// Converts a value to its wire form
    fn encode(&self, value: &T) -> Result<WireValue, CodecError>;

    /// Converts a wire value back, failing on anything that does not match
    /// the type's wire form exactly
    fn decode(&self, wire: &WireValue) -> Result<T, CodecError>;
}

/// `yyyy-MM-dd HH:mm` (or with seconds)
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDateTimeCodec {
    precision: DateTimePrecision,
}

impl LocalDateTimeCodec {
    pub const TYPE_NAME: &'static str = "LocalDateTime";

    pub fn new(precision: DateTimePrecision) -> Self {
        Self { precision }
    }
}

impl Codec<NaiveDateTime> for LocalDateTimeCodec {
    fn encode(&self, value: &NaiveDateTime) -> Result<WireValue, CodecError> {
        format::format_date_time(Self::TYPE_NAME, value, self.precision).map(WireValue::Text)
    }

    fn decode(&self, wire: &WireValue) -> Result<NaiveDateTime, CodecError> {
        format::parse_date_time(Self::TYPE_NAME, wire.as_text(Self::TYPE_NAME)?, self.precision)
    }
}

/// `yyyy-MM-dd`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDateCodec;

impl LocalDateCodec {
    pub const TYPE_NAME: &'static str = "LocalDate";
}

impl Codec<NaiveDate> for LocalDateCodec {
    fn encode(&self, value: &NaiveDate) -> Result<WireValue, CodecError> {
        format::format_date(Self::TYPE_NAME, value).map(WireValue::Text)
    }

    fn decode(&self, wire: &WireValue) -> Result<NaiveDate, CodecError> {
        format::parse_date(Self::TYPE_NAME, wire.as_text(Self::TYPE_NAME)?)
    }
}

/// `HH:mm`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimeCodec;

impl LocalTimeCodec {
    pub const TYPE_NAME: &'static str = "LocalTime";
}

impl Codec<NaiveTime> for LocalTimeCodec {
    fn encode(&self, value: &NaiveTime) -> Result<WireValue, CodecError> {
        Ok(WireValue::Text(format::format_time(value, DateTimePrecision::Minutes)))
    }

    fn decode(&self, wire: &WireValue) -> Result<NaiveTime, CodecError> {
        format::parse_time(Self::TYPE_NAME, wire.as_text(Self::TYPE_NAME)?, DateTimePrecision::Minutes)
    }
}

/// `yyyy-MM-dd HH:mm`; the offset is dropped and re-attached from the zone
#[derive(Debug, Clone, Copy, Default)]
pub struct OffsetDateTimeCodec {
    zone: ZoneId,
}

impl OffsetDateTimeCodec {
    pub const TYPE_NAME: &'static str = "OffsetDateTime";

    pub fn new(zone: ZoneId) -> Self {
        Self { zone }
    }
}

impl Codec<DateTime<FixedOffset>> for OffsetDateTimeCodec {
    fn encode(&self, value: &DateTime<FixedOffset>) -> Result<WireValue, CodecError> {
        format::format_date_time(Self::TYPE_NAME, &value.naive_local(), DateTimePrecision::Minutes)
            .map(WireValue::Text)
    }

    fn decode(&self, wire: &WireValue) -> Result<DateTime<FixedOffset>, CodecError> {
        let text = wire.as_text(Self::TYPE_NAME)?;
        let local = format::parse_date_time(Self::TYPE_NAME, text, DateTimePrecision::Minutes)?;
        self.zone
            .resolve(&local)
            .map_err(|err| CodecError::malformed(Self::TYPE_NAME, wire, err.to_string()))
    }
}

/// `HH:mm`; the offset is dropped and re-attached from the zone's current offset
#[derive(Debug, Clone, Copy, Default)]
pub struct OffsetTimeCodec {
    zone: ZoneId,
}

impl OffsetTimeCodec {
    pub const TYPE_NAME: &'static str = "OffsetTime";

    pub fn new(zone: ZoneId) -> Self {
        Self { zone }
    }
}

impl Codec<OffsetTime> for OffsetTimeCodec {
    fn encode(&self, value: &OffsetTime) -> Result<WireValue, CodecError> {
        Ok(WireValue::Text(format::format_time(&value.time(), DateTimePrecision::Minutes)))
    }

    fn decode(&self, wire: &WireValue) -> Result<OffsetTime, CodecError> {
        let text = wire.as_text(Self::TYPE_NAME)?;
        let time = format::parse_time(Self::TYPE_NAME, text, DateTimePrecision::Minutes)?;
        Ok(OffsetTime::new(time, self.zone.offset_now()))
    }
}

/// `yyyy-MM-dd HH:mm`; the zone is dropped and the configured one re-attached
#[derive(Debug, Clone, Copy, Default)]
pub struct ZonedDateTimeCodec {
    zone: ZoneId,
}

impl ZonedDateTimeCodec {
    pub const TYPE_NAME: &'static str = "ZonedDateTime";

    pub fn new(zone: ZoneId) -> Self {
        Self { zone }
    }
}

impl Codec<ZonedDateTime> for ZonedDateTimeCodec {
    fn encode(&self, value: &ZonedDateTime) -> Result<WireValue, CodecError> {
        format::format_date_time(Self::TYPE_NAME, &value.local(), DateTimePrecision::Minutes)
            .map(WireValue::Text)
    }

    fn decode(&self, wire: &WireValue) -> Result<ZonedDateTime, CodecError> {
        let text = wire.as_text(Self::TYPE_NAME)?;
        let local = format::parse_date_time(Self::TYPE_NAME, text, DateTimePrecision::Minutes)?;
        ZonedDateTime::of(local, self.zone)
            .map_err(|err| CodecError::malformed(Self::TYPE_NAME, wire, err.to_string()))
    }
}

/// Epoch seconds
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantCodec;

impl InstantCodec {
    pub const TYPE_NAME: &'static str = "Instant";
}

impl Codec<DateTime<Utc>> for InstantCodec {
    fn encode(&self, value: &DateTime<Utc>) -> Result<WireValue, CodecError> {
        Ok(WireValue::Integer(format::epoch_seconds(value)))
    }

    fn decode(&self, wire: &WireValue) -> Result<DateTime<Utc>, CodecError> {
        format::instant_from_epoch_seconds(Self::TYPE_NAME, wire.as_integer(Self::TYPE_NAME)?)
    }
}

/// `year * 100 + month`
#[derive(Debug, Clone, Copy, Default)]
pub struct YearMonthCodec;

impl YearMonthCodec {
    pub const TYPE_NAME: &'static str = "YearMonth";
}

impl Codec<YearMonth> for YearMonthCodec {
    fn encode(&self, value: &YearMonth) -> Result<WireValue, CodecError> {
        Ok(WireValue::Integer(format::year_month_number(value)))
    }

    fn decode(&self, wire: &WireValue) -> Result<YearMonth, CodecError> {
        format::year_month_from_number(Self::TYPE_NAME, wire.as_integer(Self::TYPE_NAME)?)
    }
}

/// The year as an integer
#[derive(Debug, Clone, Copy, Default)]
pub struct YearCodec;

impl YearCodec {
    pub const TYPE_NAME: &'static str = "Year";
}

impl Codec<Year> for YearCodec {
    fn encode(&self, value: &Year) -> Result<WireValue, CodecError> {
        Ok(WireValue::Integer(i64::from(value.value())))
    }

    fn decode(&self, wire: &WireValue) -> Result<Year, CodecError> {
        format::year_from_number(Self::TYPE_NAME, wire.as_integer(Self::TYPE_NAME)?)
    }
}

/// The month number, 1-12
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthCodec;

impl MonthCodec {
    pub const TYPE_NAME: &'static str = "Month";
}

impl Codec<Month> for MonthCodec {
    fn encode(&self, value: &Month) -> Result<WireValue, CodecError> {
        Ok(WireValue::Integer(i64::from(value.number_from_month())))
    }

    fn decode(&self, wire: &WireValue) -> Result<Month, CodecError> {
        format::month_from_wire_number(Self::TYPE_NAME, wire.as_integer(Self::TYPE_NAME)?)
    }
}

/// `MM-dd`
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthDayCodec;

impl MonthDayCodec {
    pub const TYPE_NAME: &'static str = "MonthDay";
}

impl Codec<MonthDay> for MonthDayCodec {
    fn encode(&self, value: &MonthDay) -> Result<WireValue, CodecError> {
        Ok(WireValue::Text(format::format_month_day(value)))
    }

    fn decode(&self, wire: &WireValue) -> Result<MonthDay, CodecError> {
        format::parse_month_day(Self::TYPE_NAME, wire.as_text(Self::TYPE_NAME)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn shanghai() -> ZoneId {
        ZoneId::Region(chrono_tz::Asia::Shanghai)
    }

    #[test]
    fn test_local_date_time_drops_seconds() {
        let value = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 30, 59)
            .unwrap();

        let wire = LocalDateTimeCodec::default().encode(&value).unwrap();
        assert_eq!(wire, WireValue::text("2024-03-15 14:30"));

        let seconds = LocalDateTimeCodec::new(DateTimePrecision::Seconds).encode(&value).unwrap();
        assert_eq!(seconds, WireValue::text("2024-03-15 14:30:59"));
    }

    #[test]
    fn test_offset_date_time_takes_configured_zone() {
        let offset = FixedOffset::east_opt(-5 * 3600).unwrap();
        let value = offset.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
        let codec = OffsetDateTimeCodec::new(shanghai());

        let wire = codec.encode(&value).unwrap();
        let decoded = codec.decode(&wire).unwrap();

        assert_eq!(decoded.naive_local(), value.naive_local());
        assert_eq!(decoded.offset().local_minus_utc(), 8 * 3600);
    }

    #[test]
    fn test_offset_time_takes_fixed_offset() {
        let codec = OffsetTimeCodec::new(ZoneId::fixed(2, 0).unwrap());
        let decoded = codec.decode(&WireValue::text("09:05")).unwrap();

        assert_eq!(decoded.time(), NaiveTime::from_hms_opt(9, 5, 0).unwrap());
        assert_eq!(decoded.offset().local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn test_zoned_date_time_reattaches_zone() {
        let codec = ZonedDateTimeCodec::new(shanghai());
        let decoded = codec.decode(&WireValue::text("2024-03-15 14:30")).unwrap();

        assert_eq!(decoded.zone(), shanghai());
        assert_eq!(decoded.offset().local_minus_utc(), 8 * 3600);
    }

    #[test]
    fn test_string_codec_rejects_integer() {
        let err = LocalDateCodec.decode(&WireValue::Integer(20240315)).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_integer_codec_rejects_string() {
        let err = YearCodec.decode(&WireValue::text("2024")).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_month_out_of_range() {
        assert!(MonthCodec.decode(&WireValue::Integer(0)).is_err());
        assert!(MonthCodec.decode(&WireValue::Integer(13)).is_err());
        assert_eq!(MonthCodec.decode(&WireValue::Integer(12)).unwrap(), Month::December);
    }

    #[test]
    fn test_instant_out_of_range() {
        assert!(InstantCodec.decode(&WireValue::Integer(i64::MAX)).is_err());
    }
}
