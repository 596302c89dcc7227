//! Serde adapters
//!
//! The same wire forms for use inside ordinary serde derives, without a host
//! mapper. Adapters use the default module configuration: minute precision
//! and the system zone.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Holiday {
//!     #[serde(with = "temporal_json::with::local_date")]
//!     date: NaiveDate,
//!     #[serde(
//!         default,
//!         skip_serializing_if = "Option::is_none",
//!         with = "temporal_json::with::local_date::option"
//!     )]
//!     observed: Option<NaiveDate>,
//! }
//!
//! let holiday: Holiday = serde_json::from_str(r#"{"date":"2024-03-15","observed":""}"#).unwrap();
//! assert!(holiday.observed.is_none());
//! ```

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

use crate::codec::Codec;
use crate::wire::WireValue;

fn serialize_with<T, C, S>(codec: &C, value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    C: Codec<T>,
    S: Serializer,
{
    match codec.encode(value).map_err(S::Error::custom)? {
        WireValue::Integer(number) => serializer.serialize_i64(number),
        WireValue::Text(text) => serializer.serialize_str(&text),
    }
}

fn deserialize_with<'de, T, C, D>(codec: &C, deserializer: D) -> Result<T, D::Error>
where
    C: Codec<T>,
    D: Deserializer<'de>,
{
    let wire = WireValue::deserialize(deserializer)?;
    codec.decode(&wire).map_err(D::Error::custom)
}

fn serialize_option_with<T, C, S>(
    codec: &C,
    value: &Option<T>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    C: Codec<T>,
    S: Serializer,
{
    match value {
        Some(value) => serialize_with(codec, value, serializer),
        None => serializer.serialize_none(),
    }
}

fn deserialize_option_with<'de, T, C, D>(codec: &C, deserializer: D) -> Result<Option<T>, D::Error>
where
    C: Codec<T>,
    D: Deserializer<'de>,
{
    match Option::<WireValue>::deserialize(deserializer)? {
        None => Ok(None),
        Some(wire) if wire.is_empty_text() => Ok(None),
        Some(wire) => codec.decode(&wire).map(Some).map_err(D::Error::custom),
    }
}

macro_rules! define_adapter {
    ($name:ident, $ty:ty, $codec:expr) => {
        #[doc = concat!("Serde adapter for `", stringify!($ty), "`")]
        pub mod $name {
            use super::*;

            pub fn serialize<S: Serializer>(value: &$ty, serializer: S) -> Result<S::Ok, S::Error> {
                serialize_with(&$codec, value, serializer)
            }

            pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<$ty, D::Error> {
                deserialize_with(&$codec, deserializer)
            }

            /// Adapter for optional fields; `null` and `""` read as `None`
            pub mod option {
                use super::super::*;

                pub fn serialize<S: Serializer>(
                    value: &Option<$ty>,
                    serializer: S,
                ) -> Result<S::Ok, S::Error> {
                    serialize_option_with(&$codec, value, serializer)
                }

                pub fn deserialize<'de, D: Deserializer<'de>>(
                    deserializer: D,
                ) -> Result<Option<$ty>, D::Error> {
                    deserialize_option_with(&$codec, deserializer)
                }
            }
        }
    };
}

define_adapter!(local_date_time, chrono::NaiveDateTime, crate::codec::LocalDateTimeCodec::default());
define_adapter!(local_date, chrono::NaiveDate, crate::codec::LocalDateCodec);
define_adapter!(local_time, chrono::NaiveTime, crate::codec::LocalTimeCodec);
define_adapter!(offset_date_time, chrono::DateTime<chrono::FixedOffset>, crate::codec::OffsetDateTimeCodec::default());
define_adapter!(offset_time, temporal_kernel::OffsetTime, crate::codec::OffsetTimeCodec::default());
define_adapter!(zoned_date_time, temporal_kernel::ZonedDateTime, crate::codec::ZonedDateTimeCodec::default());
define_adapter!(instant, chrono::DateTime<chrono::Utc>, crate::codec::InstantCodec);
define_adapter!(year_month, temporal_kernel::YearMonth, crate::codec::YearMonthCodec);
define_adapter!(year, temporal_kernel::Year, crate::codec::YearCodec);
define_adapter!(month, chrono::Month, crate::codec::MonthCodec);
define_adapter!(month_day, temporal_kernel::MonthDay, crate::codec::MonthDayCodec);
