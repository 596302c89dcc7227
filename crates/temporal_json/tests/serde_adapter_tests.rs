//! Tests for the serde adapters on a record carrying every temporal type

use serde_json::{json, Value};
use temporal_kernel::ZoneId;
use test_utils::{SerdeTemporalDto, TemporalDto, TemporalFixtures, REFERENCE};

fn populated() -> SerdeTemporalDto {
    let dto = TemporalDto::from_offset_date_time(&REFERENCE);
    SerdeTemporalDto {
        name: None,
        local_date_time: dto.local_date_time,
        local_date: dto.local_date,
        local_time: dto.local_time,
        offset_date_time: dto.offset_date_time,
        offset_time: dto.offset_time,
        zoned_date_time: dto.zoned_date_time,
        instant: dto.instant,
        year_month: dto.year_month,
        year: dto.year,
        month: dto.month,
        month_day: dto.month_day,
    }
}

#[test]
fn test_adapters_match_module_wire_forms() {
    let via_serde = serde_json::to_value(populated()).unwrap();
    let via_mapper = test_utils::lenient_mapper()
        .write_record(&TemporalDto::from_offset_date_time(&REFERENCE))
        .unwrap();

    assert_eq!(via_serde, via_mapper);
}

#[test]
fn test_adapters_round_trip_local_values() {
    let json = serde_json::to_string(&populated()).unwrap();
    let actual: SerdeTemporalDto = serde_json::from_str(&json).unwrap();

    assert_eq!(actual.local_date_time, Some(TemporalFixtures::local_date_time()));
    assert_eq!(actual.local_date, Some(TemporalFixtures::local_date()));
    assert_eq!(actual.local_time, Some(TemporalFixtures::local_time()));
    assert_eq!(actual.instant, Some(TemporalFixtures::instant()));
    assert_eq!(actual.year_month, Some(TemporalFixtures::year_month()));
    assert_eq!(actual.year, Some(TemporalFixtures::year()));
    assert_eq!(actual.month, Some(TemporalFixtures::month()));
    assert_eq!(actual.month_day, Some(TemporalFixtures::month_day()));
}

#[test]
fn test_adapters_reattach_system_zone() {
    let json = serde_json::to_string(&populated()).unwrap();
    let actual: SerdeTemporalDto = serde_json::from_str(&json).unwrap();
    let zoned = actual.zoned_date_time.unwrap();

    assert_eq!(zoned.zone(), ZoneId::System);
    assert_eq!(zoned.local(), TemporalFixtures::local_date_time());
    assert_eq!(
        actual.offset_date_time.unwrap().naive_local(),
        TemporalFixtures::local_date_time()
    );
}

#[test]
fn test_empty_strings_and_nulls_read_as_none() {
    let json = json!({
        "name": null,
        "localDate": "",
        "instant": null,
        "monthDay": "",
    });
    let actual: SerdeTemporalDto = serde_json::from_value(json).unwrap();

    assert_eq!(actual, SerdeTemporalDto::default());
}

#[test]
fn test_none_fields_are_skipped() {
    let json = serde_json::to_value(SerdeTemporalDto::default()).unwrap();
    assert_eq!(json, Value::Object(Default::default()));
}

#[test]
fn test_malformed_value_is_an_error() {
    let result = serde_json::from_value::<SerdeTemporalDto>(json!({"localTime": "2:30"}));
    let message = result.unwrap_err().to_string();

    assert!(message.contains("LocalTime"), "unexpected message: {message}");
}
