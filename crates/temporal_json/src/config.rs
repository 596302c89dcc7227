//! Module configuration

use serde::{Deserialize, Serialize};
use temporal_kernel::ZoneId;

use crate::error::ConfigError;
use crate::format::DateTimePrecision;

/// Settings the temporal module builds its codecs from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    /// Zone re-attached when decoding offset and zoned values
    pub zone: ZoneId,
    /// Precision of `LocalDateTime` strings
    pub date_time_precision: DateTimePrecision,
}

impl ModuleConfig {
    /// Loads configuration from `TEMPORAL_*` environment variables
    ///
    /// * `TEMPORAL_ZONE` - `system`, `UTC`, an offset such as `+08:00`, or an
    ///   IANA region name (default: system)
    /// * `TEMPORAL_DATE_TIME_PRECISION` - `minutes` or `seconds` (default: minutes)
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("TEMPORAL"))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Parses a zone setting, naming the key on failure
    pub fn parse_zone(value: &str) -> Result<ZoneId, ConfigError> {
        value.parse().map_err(|err: temporal_kernel::TemporalError| ConfigError::Invalid {
            key: "zone",
            message: err.to_string(),
        })
    }
}
