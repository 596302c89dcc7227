//! Temporal JSON - Codecs for calendar and clock values
//!
//! This crate converts eleven temporal types to and from compact JSON scalars:
//! - Format rules: fixed-width patterns and numeric packings per type
//! - Codecs: encoder/decoder pairs built from the format rules
//! - Registry: a type-keyed codec table and the `Module`/`ModuleHost` traits
//! - `TemporalModule`: installs all eleven codecs into a host at once
//! - `JsonMapper`: a reference host honouring null/empty omission policies
//! - Serde adapters for use in `#[serde(with = ...)]` attributes
//!
//! | Type | Wire form |
//! |---|---|
//! | `NaiveDateTime` | `"yyyy-MM-dd HH:mm"` |
//! | `NaiveDate` | `"yyyy-MM-dd"` |
//! | `NaiveTime` | `"HH:mm"` |
//! | `DateTime<FixedOffset>` | `"yyyy-MM-dd HH:mm"` |
//! | `OffsetTime` | `"HH:mm"` |
//! | `ZonedDateTime` | `"yyyy-MM-dd HH:mm"` |
//! | `DateTime<Utc>` | epoch seconds |
//! | `YearMonth` | `year * 100 + month` |
//! | `Year` | year |
//! | `Month` | 1-12 |
//! | `MonthDay` | `"MM-dd"` |

pub mod codec;
pub mod config;
pub mod error;
pub mod format;
pub mod mapper;
pub mod module;
pub mod registry;
pub mod wire;
pub mod with;

pub use codec::Codec;
pub use config::ModuleConfig;
pub use error::{CodecError, ConfigError, MapperError};
pub use format::DateTimePrecision;
pub use mapper::{Inclusion, JsonMapper, JsonRecord, MapperFeatures, RecordReader, RecordWriter};
pub use module::{TemporalModule, TemporalModuleBuilder};
pub use registry::{CodecTable, Module, ModuleHost};
pub use wire::WireValue;
