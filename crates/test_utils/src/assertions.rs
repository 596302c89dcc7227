//! Custom Test Assertions
//!
//! chrono compares `DateTime` values by instant alone, so two values with
//! different offsets can be equal. These helpers also compare the local
//! fields and offsets, and give clearer messages for codec failures.

use chrono::{DateTime, FixedOffset};
use serde_json::Value;
use std::fmt::Debug;
use temporal_json::{CodecError, MapperError};

/// Asserts that two offset date-times share local date-time and offset
pub fn assert_same_local_and_offset(actual: &DateTime<FixedOffset>, expected: &DateTime<FixedOffset>) {
    assert_eq!(
        actual.naive_local(),
        expected.naive_local(),
        "Local date-time mismatch: actual={}, expected={}",
        actual,
        expected
    );
    assert_eq!(
        actual.offset(),
        expected.offset(),
        "Offset mismatch: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that a decode failed because the wire value was malformed
pub fn assert_malformed<T: Debug>(result: Result<T, CodecError>) {
    match result {
        Err(CodecError::MalformedWireValue { .. }) => {}
        other => panic!("Expected MalformedWireValue, got {:?}", other),
    }
}

/// Asserts that a mapper call failed inside a codec with a malformed value
pub fn assert_mapper_malformed<T: Debug>(result: Result<T, MapperError>) {
    match result {
        Err(MapperError::Codec(CodecError::MalformedWireValue { .. })) => {}
        other => panic!("Expected malformed wire value, got {:?}", other),
    }
}

/// Asserts that a JSON object has no field with the given name
pub fn assert_omitted(json: &Value, field: &str) {
    assert!(
        json.get(field).is_none(),
        "Expected field {} to be omitted, found {}",
        field,
        json
    );
}
