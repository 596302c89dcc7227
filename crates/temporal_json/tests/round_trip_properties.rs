//! Property tests for the codec contract
//!
//! For every type: decoding an encoded value gives back the value truncated
//! to the type's precision (with the configured zone in place of offset or
//! zone), and re-encoding a decoded value gives the same wire value.

use chrono::{DateTime, FixedOffset, Month, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use proptest::prelude::*;
use serde_json::Value;
use temporal_json::{JsonMapper, MapperFeatures, TemporalModule};
use temporal_kernel::{MonthDay, OffsetTime, Truncate, Year, YearMonth, ZoneId, ZonedDateTime};
use test_utils::*;

fn mapper() -> JsonMapper {
    lenient_mapper()
}

fn round_trip<T: 'static>(mapper: &JsonMapper, value: &T) -> (Value, T, Value) {
    let wire = mapper.encode(value).unwrap();
    let decoded = mapper.decode::<T>(&wire).unwrap().unwrap();
    let rewire = mapper.encode(&decoded).unwrap();
    (wire, decoded, rewire)
}

proptest! {
    #[test]
    fn prop_local_date_time(value in date_time_strategy()) {
        let (wire, decoded, rewire) = round_trip(&mapper(), &value);
        prop_assert_eq!(decoded, value.truncate_to_minutes());
        prop_assert_eq!(wire, rewire);
    }

    #[test]
    fn prop_local_date(value in date_strategy()) {
        let (wire, decoded, rewire) = round_trip(&mapper(), &value);
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(wire, rewire);
    }

    #[test]
    fn prop_local_time(value in time_strategy()) {
        let (wire, decoded, rewire) = round_trip(&mapper(), &value);
        prop_assert_eq!(decoded, value.truncate_to_minutes());
        prop_assert_eq!(wire, rewire);
    }

    #[test]
    fn prop_offset_date_time_takes_configured_offset(value in offset_date_time_strategy()) {
        let (wire, decoded, rewire) = round_trip(&mapper(), &value);
        prop_assert_eq!(decoded.naive_local(), value.naive_local().truncate_to_minutes());
        prop_assert_eq!(*decoded.offset(), *REFERENCE.offset());
        prop_assert_eq!(wire, rewire);
    }

    #[test]
    fn prop_offset_time_takes_configured_offset(time in time_strategy(), offset in offset_strategy()) {
        let value = OffsetTime::new(time, offset);
        let (wire, decoded, rewire) = round_trip(&mapper(), &value);
        prop_assert_eq!(decoded.time(), time.truncate_to_minutes());
        prop_assert_eq!(decoded.offset(), *REFERENCE.offset());
        prop_assert_eq!(wire, rewire);
    }

    #[test]
    fn prop_zoned_date_time_takes_configured_zone(value in offset_date_time_strategy()) {
        let zoned = ZonedDateTime::from_offset(value);
        let (wire, decoded, rewire) = round_trip(&mapper(), &zoned);
        prop_assert_eq!(
            decoded,
            zoned.truncate_to_minutes().with_zone_same_local(TemporalFixtures::zone()).unwrap()
        );
        prop_assert_eq!(wire, rewire);
    }

    #[test]
    fn prop_instant(value in instant_strategy()) {
        let (wire, decoded, rewire) = round_trip(&mapper(), &value);
        prop_assert_eq!(decoded, value.truncate_to_seconds());
        prop_assert_eq!(wire, rewire);
    }

    #[test]
    fn prop_year_month(value in year_month_strategy()) {
        let (wire, decoded, rewire) = round_trip(&mapper(), &value);
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(wire, rewire);
    }

    #[test]
    fn prop_year(value in year_strategy()) {
        let (_, decoded, _) = round_trip(&mapper(), &value);
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn prop_month(value in month_strategy()) {
        let (_, decoded, _) = round_trip(&mapper(), &value);
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn prop_month_day(value in month_day_strategy()) {
        let (wire, decoded, rewire) = round_trip(&mapper(), &value);
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(wire, rewire);
    }

    #[test]
    fn prop_year_month_sorts_for_non_negative_years(
        a in (0i32..=9999, 1u32..=12),
        b in (0i32..=9999, 1u32..=12),
    ) {
        let mapper = mapper();
        let a = YearMonth::new(a.0, a.1).unwrap();
        let b = YearMonth::new(b.0, b.1).unwrap();
        let wire_a = mapper.encode(&a).unwrap().as_i64().unwrap();
        let wire_b = mapper.encode(&b).unwrap().as_i64().unwrap();
        prop_assert_eq!(a.cmp(&b), wire_a.cmp(&wire_b));
    }

    #[test]
    fn prop_arbitrary_strings_never_panic(text in ".{0,24}") {
        let mapper = mapper();
        let value = Value::String(text);
        let _ = mapper.decode::<NaiveDateTime>(&value);
        let _ = mapper.decode::<NaiveDate>(&value);
        let _ = mapper.decode::<NaiveTime>(&value);
        let _ = mapper.decode::<DateTime<FixedOffset>>(&value);
        let _ = mapper.decode::<OffsetTime>(&value);
        let _ = mapper.decode::<ZonedDateTime>(&value);
        let _ = mapper.decode::<MonthDay>(&value);
    }

    #[test]
    fn prop_arbitrary_integers_never_panic(number in any::<i64>()) {
        let mapper = mapper();
        let value = Value::from(number);
        let _ = mapper.decode::<DateTime<Utc>>(&value);
        let _ = mapper.decode::<YearMonth>(&value);
        let _ = mapper.decode::<Year>(&value);
        let _ = mapper.decode::<Month>(&value);
    }
}

#[test]
fn test_utc_module_restores_utc_offset() {
    let mapper = JsonMapper::new(MapperFeatures::lenient())
        .with_module(&TemporalModule::builder().zone(ZoneId::Utc).build());
    let value = TemporalFixtures::offset_date_time();

    let (_, decoded, _) = round_trip(&mapper, &value);
    assert_eq!(decoded.offset().local_minus_utc(), 0);
    assert_eq!(decoded.naive_local(), value.naive_local());
}
