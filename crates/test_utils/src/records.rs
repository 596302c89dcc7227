//! Composite records
//!
//! A record carrying every temporal type, once for the host mapper and once
//! with serde adapters.

use chrono::{DateTime, Datelike, FixedOffset, Month, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use temporal_json::{JsonRecord, MapperError, RecordReader, RecordWriter};
use temporal_kernel::{MonthDay, OffsetTime, Year, YearMonth, ZonedDateTime};

/// All eleven temporal types plus a plain string field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemporalDto {
    pub name: Option<String>,
    pub local_date_time: Option<NaiveDateTime>,
    pub local_date: Option<NaiveDate>,
    pub local_time: Option<NaiveTime>,
    pub offset_date_time: Option<DateTime<FixedOffset>>,
    pub offset_time: Option<OffsetTime>,
    pub zoned_date_time: Option<ZonedDateTime>,
    pub instant: Option<DateTime<Utc>>,
    pub year_month: Option<YearMonth>,
    pub year: Option<Year>,
    pub month: Option<Month>,
    pub month_day: Option<MonthDay>,
}

impl TemporalDto {
    /// Fills every temporal field from one offset date-time; `name` is empty
    pub fn from_offset_date_time(now: &DateTime<FixedOffset>) -> Self {
        Self {
            name: Some(String::new()),
            local_date_time: Some(now.naive_local()),
            local_date: Some(now.date_naive()),
            local_time: Some(now.time()),
            offset_date_time: Some(*now),
            offset_time: Some(OffsetTime::from_date_time(now)),
            zoned_date_time: Some(ZonedDateTime::from_offset(*now)),
            instant: Some(now.with_timezone(&Utc)),
            year_month: Some(YearMonth::from_date(now)),
            year: Some(Year::from_date(now)),
            month: Month::try_from(now.month() as u8).ok(),
            month_day: Some(MonthDay::from_date(now)),
        }
    }
}

impl JsonRecord for TemporalDto {
    fn write_fields(&self, writer: &mut RecordWriter<'_>) -> Result<(), MapperError> {
        writer
            .string("name", self.name.as_deref())
            .temporal("localDateTime", self.local_date_time.as_ref())?
            .temporal("localDate", self.local_date.as_ref())?
            .temporal("localTime", self.local_time.as_ref())?
            .temporal("offsetDateTime", self.offset_date_time.as_ref())?
            .temporal("offsetTime", self.offset_time.as_ref())?
            .temporal("zonedDateTime", self.zoned_date_time.as_ref())?
            .temporal("instant", self.instant.as_ref())?
            .temporal("yearMonth", self.year_month.as_ref())?
            .temporal("year", self.year.as_ref())?
            .temporal("month", self.month.as_ref())?
            .temporal("monthDay", self.month_day.as_ref())?;
        Ok(())
    }

    fn read_fields(reader: &mut RecordReader<'_>) -> Result<Self, MapperError> {
        Ok(Self {
            name: reader.string("name")?,
            local_date_time: reader.temporal("localDateTime")?,
            local_date: reader.temporal("localDate")?,
            local_time: reader.temporal("localTime")?,
            offset_date_time: reader.temporal("offsetDateTime")?,
            offset_time: reader.temporal("offsetTime")?,
            zoned_date_time: reader.temporal("zonedDateTime")?,
            instant: reader.temporal("instant")?,
            year_month: reader.temporal("yearMonth")?,
            year: reader.temporal("year")?,
            month: reader.temporal("month")?,
            month_day: reader.temporal("monthDay")?,
        })
    }
}

/// The same record bound through serde adapters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerdeTemporalDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "temporal_json::with::local_date_time::option")]
    pub local_date_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "temporal_json::with::local_date::option")]
    pub local_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "temporal_json::with::local_time::option")]
    pub local_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "temporal_json::with::offset_date_time::option")]
    pub offset_date_time: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "temporal_json::with::offset_time::option")]
    pub offset_time: Option<OffsetTime>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "temporal_json::with::zoned_date_time::option")]
    pub zoned_date_time: Option<ZonedDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "temporal_json::with::instant::option")]
    pub instant: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "temporal_json::with::year_month::option")]
    pub year_month: Option<YearMonth>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "temporal_json::with::year::option")]
    pub year: Option<Year>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "temporal_json::with::month::option")]
    pub month: Option<Month>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "temporal_json::with::month_day::option")]
    pub month_day: Option<MonthDay>,
}
