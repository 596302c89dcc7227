//! The temporal module
//!
//! Bundles the eleven codecs and installs them into a host as one unit.
//!
//! # Example
//!
//! ```rust
//! use temporal_json::{DateTimePrecision, JsonMapper, MapperFeatures, TemporalModule};
//! use temporal_kernel::ZoneId;
//!
//! let module = TemporalModule::builder()
//!     .zone(ZoneId::Utc)
//!     .date_time_precision(DateTimePrecision::Seconds)
//!     .build();
//!
//! let mut mapper = JsonMapper::new(MapperFeatures::lenient());
//! module.install(&mut mapper);
//! ```

use chrono::{DateTime, FixedOffset, Month, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use temporal_kernel::{MonthDay, OffsetTime, Year, YearMonth, ZoneId, ZonedDateTime};

use crate::codec::{
    InstantCodec, LocalDateCodec, LocalDateTimeCodec, LocalTimeCodec, MonthCodec, MonthDayCodec,
    OffsetDateTimeCodec, OffsetTimeCodec, YearCodec, YearMonthCodec, ZonedDateTimeCodec,
};
use crate::config::ModuleConfig;
use crate::format::DateTimePrecision;
use crate::registry::{CodecTable, Module, ModuleHost};

/// Codecs for the eleven calendar and clock types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemporalModule {
    config: ModuleConfig,
}

impl TemporalModule {
    pub const NAME: &'static str = "temporal";

    /// Number of types the module registers
    pub const TYPE_COUNT: usize = 11;

    /// Creates a module with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ModuleConfig) -> Self {
        Self { config }
    }

    pub fn builder() -> TemporalModuleBuilder {
        TemporalModuleBuilder::default()
    }

    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }

    /// Installs all eleven codecs into the host in a single registration
    pub fn install<H: ModuleHost + ?Sized>(&self, host: &mut H) {
        tracing::debug!(
            zone = %self.config.zone,
            precision = ?self.config.date_time_precision,
            "Installing temporal module"
        );
        host.register_module(self);
    }
}

impl Module for TemporalModule {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn setup(&self, table: &mut CodecTable) {
        let zone = self.config.zone;
        table.insert::<NaiveDateTime, _>(LocalDateTimeCodec::new(self.config.date_time_precision));
        table.insert::<NaiveDate, _>(LocalDateCodec);
        table.insert::<NaiveTime, _>(LocalTimeCodec);
        table.insert::<DateTime<FixedOffset>, _>(OffsetDateTimeCodec::new(zone));
        table.insert::<OffsetTime, _>(OffsetTimeCodec::new(zone));
        table.insert::<ZonedDateTime, _>(ZonedDateTimeCodec::new(zone));
        table.insert::<DateTime<Utc>, _>(InstantCodec);
        table.insert::<YearMonth, _>(YearMonthCodec);
        table.insert::<Year, _>(YearCodec);
        table.insert::<Month, _>(MonthCodec);
        table.insert::<MonthDay, _>(MonthDayCodec);
    }
}

/// Builder for [`TemporalModule`]
#[derive(Debug, Default)]
pub struct TemporalModuleBuilder {
    config: ModuleConfig,
}

impl TemporalModuleBuilder {
    /// Sets the zone re-attached when decoding offset and zoned values
    pub fn zone(mut self, zone: ZoneId) -> Self {
        self.config.zone = zone;
        self
    }

    /// Sets the precision of `LocalDateTime` strings
    pub fn date_time_precision(mut self, precision: DateTimePrecision) -> Self {
        self.config.date_time_precision = precision;
        self
    }

    /// Starts from a loaded configuration
    pub fn config(mut self, config: ModuleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> TemporalModule {
        TemporalModule::with_config(self.config)
    }
}
