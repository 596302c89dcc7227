//! Zone policies
//!
//! A `ZoneId` names the rules used to turn a local date-time into an offset.
//! It is what the JSON codecs re-attach when decoding offset and zoned values,
//! since neither offset nor zone travels on the wire.

use chrono::{
    DateTime, Duration, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeZone, Utc,
};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::TemporalError;

/// Time-zone rules applied to local date-times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ZoneId {
    /// The zone of the host system, looked up at resolution time
    #[default]
    System,

    /// Coordinated Universal Time
    Utc,

    /// A constant offset with no transitions
    Fixed(FixedOffset),

    /// An IANA region such as `Asia/Shanghai`
    Region(Tz),
}

impl ZoneId {
    /// Creates a fixed-offset zone from hours and minutes east of UTC
    pub fn fixed(hours: i32, minutes: i32) -> Result<Self, TemporalError> {
        let minutes = if hours < 0 { -minutes } else { minutes };
        let seconds = hours * 3600 + minutes * 60;
        FixedOffset::east_opt(seconds)
            .map(ZoneId::Fixed)
            .ok_or_else(|| TemporalError::UnknownZone(format!("{hours:+03}:{minutes:02}")))
    }

    /// Places a local date-time in this zone
    ///
    /// Overlaps (clocks going back) resolve to the earlier offset. A local time
    /// that falls into a gap (clocks going forward) is moved later by the length
    /// of the gap and takes the offset in effect after the transition.
    pub fn resolve(&self, local: &NaiveDateTime) -> Result<DateTime<FixedOffset>, TemporalError> {
        match self {
            ZoneId::System => resolve_in(&Local, local, self),
            ZoneId::Utc => resolve_in(&Utc, local, self),
            ZoneId::Fixed(offset) => resolve_in(offset, local, self),
            ZoneId::Region(tz) => resolve_in(tz, local, self),
        }
    }

    /// Returns the offset in effect at the given instant
    pub fn offset_at(&self, instant: &DateTime<Utc>) -> FixedOffset {
        let utc = instant.naive_utc();
        match self {
            ZoneId::System => Local.offset_from_utc_datetime(&utc).fix(),
            ZoneId::Utc => Utc.fix(),
            ZoneId::Fixed(offset) => *offset,
            ZoneId::Region(tz) => tz.offset_from_utc_datetime(&utc).fix(),
        }
    }

    /// Returns the offset in effect right now
    pub fn offset_now(&self) -> FixedOffset {
        self.offset_at(&Utc::now())
    }

    /// Expresses an instant as a date-time in this zone
    pub fn at_instant(&self, instant: &DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.offset_at(instant))
    }
}

fn resolve_in<Z: TimeZone>(
    zone: &Z,
    local: &NaiveDateTime,
    id: &ZoneId,
) -> Result<DateTime<FixedOffset>, TemporalError> {
    match zone.from_local_datetime(local) {
        LocalResult::Single(dt) => Ok(dt.fixed_offset()),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.fixed_offset()),
        LocalResult::None => {
            // The offset before a transition is the one a day earlier
            let before = zone
                .offset_from_local_datetime(&(*local - Duration::days(1)))
                .earliest()
                .ok_or_else(|| TemporalError::nonexistent(local, id))?
                .fix();
            let instant = DateTime::<FixedOffset>::from_naive_utc_and_offset(
                *local - Duration::seconds(i64::from(before.local_minus_utc())),
                before,
            );
            Ok(instant.with_timezone(zone).fixed_offset())
        }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneId::System => write!(f, "system"),
            ZoneId::Utc => write!(f, "UTC"),
            ZoneId::Fixed(offset) => write!(f, "{}", offset),
            ZoneId::Region(tz) => write!(f, "{}", tz.name()),
        }
    }
}

impl FromStr for ZoneId {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "" => Err(TemporalError::UnknownZone(s.to_string())),
            "system" | "SYSTEM" | "default" => Ok(ZoneId::System),
            "UTC" | "utc" | "Z" => Ok(ZoneId::Utc),
            _ if trimmed.starts_with('+') || trimmed.starts_with('-') => parse_offset(trimmed),
            _ => Tz::from_str(trimmed)
                .map(ZoneId::Region)
                .map_err(|_| TemporalError::UnknownZone(s.to_string())),
        }
    }
}

/// Parses `+HH:MM` / `-HH:MM`
fn parse_offset(s: &str) -> Result<ZoneId, TemporalError> {
    let unknown = || TemporalError::UnknownZone(s.to_string());
    let bytes = s.as_bytes();
    // Signs are only allowed in front; `str::parse` would accept them in the fields
    let fields_are_digits = [1, 2, 4, 5]
        .iter()
        .all(|&i| bytes.get(i).is_some_and(u8::is_ascii_digit));
    if bytes.len() != 6 || bytes[3] != b':' || !fields_are_digits {
        return Err(unknown());
    }
    let hours: i32 = s[1..3].parse().map_err(|_| unknown())?;
    let minutes: i32 = s[4..6].parse().map_err(|_| unknown())?;
    if hours > 18 || minutes > 59 {
        return Err(unknown());
    }
    let seconds = hours * 3600 + minutes * 60;
    let offset = if bytes[0] == b'-' {
        FixedOffset::west_opt(seconds)
    } else {
        FixedOffset::east_opt(seconds)
    };
    offset.map(ZoneId::Fixed).ok_or_else(unknown)
}

impl Serialize for ZoneId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ZoneId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ZoneId::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_fixed_zone_resolves_to_its_offset() {
        let zone = ZoneId::fixed(8, 0).unwrap();
        let dt = zone.resolve(&local(2024, 3, 15, 14, 30)).unwrap();

        assert_eq!(dt.offset().local_minus_utc(), 8 * 3600);
        assert_eq!(dt.naive_local(), local(2024, 3, 15, 14, 30));
    }

    #[test]
    fn test_negative_fixed_zone() {
        let zone = ZoneId::fixed(-5, 30).unwrap();
        assert_eq!(zone.to_string(), "-05:30");
    }

    #[test]
    fn test_region_gap_moves_forward() {
        let zone = ZoneId::Region(chrono_tz::Europe::Berlin);
        // 2024-03-31 02:30 does not exist in Berlin
        let dt = zone.resolve(&local(2024, 3, 31, 2, 30)).unwrap();

        assert_eq!(dt.naive_local(), local(2024, 3, 31, 3, 30));
        assert_eq!(dt.offset().local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn test_region_overlap_takes_earlier_offset() {
        let zone = ZoneId::Region(chrono_tz::Europe::Berlin);
        // 2024-10-27 02:30 happens twice in Berlin
        let dt = zone.resolve(&local(2024, 10, 27, 2, 30)).unwrap();

        assert_eq!(dt.offset().local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn test_parse_round_trip() {
        for name in ["system", "UTC", "+08:00", "-03:30", "Asia/Shanghai"] {
            let zone: ZoneId = name.parse().unwrap();
            assert_eq!(zone.to_string(), name);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("Mars/Olympus".parse::<ZoneId>().is_err());
        assert!("+8".parse::<ZoneId>().is_err());
        assert!("+19:00".parse::<ZoneId>().is_err());
        assert!("+1:000".parse::<ZoneId>().is_err());
    }
}
