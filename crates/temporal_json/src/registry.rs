//! Codec Registry
//!
//! This module provides the type-keyed table a host mapper dispatches through,
//! and the two capability traits that connect modules to hosts.
//!
//! # Architecture
//!
//! A [`Module`] knows how to fill a [`CodecTable`]; a [`ModuleHost`] knows how
//! to absorb one. Hosts are passed explicitly by reference, so independently
//! configured mappers never share registrations.
//!
//! # Usage
//!
//! ```rust
//! use temporal_json::{CodecTable, ModuleHost, TemporalModule};
//!
//! let mut table = CodecTable::new();
//! TemporalModule::new().install(&mut table);
//!
//! assert!(table.contains::<chrono::NaiveDate>());
//! assert_eq!(table.len(), 11);
//! ```

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::codec::Codec;

/// A registered codec with its type erased
struct Registration {
    type_name: &'static str,
    /// Always an `Arc<dyn Codec<T>>` for the `T` this entry is keyed by
    codec: Box<dyn Any + Send + Sync>,
}

/// Type-keyed dispatch table of codecs
///
/// Inserting a codec for a type that already has one replaces it; the last
/// registration wins.
#[derive(Default)]
pub struct CodecTable {
    entries: HashMap<TypeId, Registration>,
}

impl CodecTable {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a codec for `T`, returning true if it replaced another
    pub fn insert<T, C>(&mut self, codec: C) -> bool
    where
        T: 'static,
        C: Codec<T> + 'static,
    {
        let codec: Arc<dyn Codec<T>> = Arc::new(codec);
        tracing::trace!(value_type = type_name::<T>(), "Registering codec");
        self.entries
            .insert(
                TypeId::of::<T>(),
                Registration {
                    type_name: type_name::<T>(),
                    codec: Box::new(codec),
                },
            )
            .is_some()
    }

    /// Looks up the codec for `T`
    pub fn get<T: 'static>(&self) -> Option<&dyn Codec<T>> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.codec.downcast_ref::<Arc<dyn Codec<T>>>())
            .map(|codec| codec.as_ref())
    }

    /// Returns true if a codec is registered for `T`
    pub fn contains<T: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the Rust type names of all registered types, sorted
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.values().map(|entry| entry.type_name).collect();
        names.sort_unstable();
        names
    }

    /// Moves every codec of `other` into this table, returning how many
    /// existing registrations were replaced
    pub fn extend(&mut self, other: CodecTable) -> usize {
        let mut replaced = 0;
        for (type_id, registration) in other.entries {
            if let Some(previous) = self.entries.insert(type_id, registration) {
                tracing::warn!(value_type = previous.type_name, "Replacing registered codec");
                replaced += 1;
            }
        }
        replaced
    }
}

impl fmt::Debug for CodecTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecTable")
            .field("types", &self.type_names())
            .finish()
    }
}

/// A bundle of codecs that can be installed into a host
pub trait Module {
    /// Name used in diagnostics
    fn name(&self) -> &str;

    /// Adds this module's codecs to a table
    fn setup(&self, table: &mut CodecTable);
}

/// Something codecs can be installed into
pub trait ModuleHost {
    /// Installs every codec of `module` as one unit
    fn register_module(&mut self, module: &dyn Module);
}

impl ModuleHost for CodecTable {
    fn register_module(&mut self, module: &dyn Module) {
        // Stage first so the table never holds half of a module
        let mut staged = CodecTable::new();
        module.setup(&mut staged);
        let added = staged.len();
        let replaced = self.extend(staged);
        tracing::debug!(module = module.name(), added, replaced, "Module registered");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{LocalDateCodec, YearCodec};
    use crate::error::CodecError;
    use crate::wire::WireValue;
    use temporal_kernel::Year;

    /// Encodes every year as zero
    struct ZeroYearCodec;

    impl Codec<Year> for ZeroYearCodec {
        fn encode(&self, _value: &Year) -> Result<WireValue, CodecError> {
            Ok(WireValue::Integer(0))
        }

        fn decode(&self, wire: &WireValue) -> Result<Year, CodecError> {
            YearCodec.decode(wire)
        }
    }

    struct YearModule;

    impl Module for YearModule {
        fn name(&self) -> &str {
            "year"
        }

        fn setup(&self, table: &mut CodecTable) {
            table.insert::<Year, _>(ZeroYearCodec);
        }
    }

    #[test]
    fn test_empty_table() {
        let table = CodecTable::new();
        assert!(table.is_empty());
        assert!(table.get::<Year>().is_none());
    }

    #[test]
    fn test_get_returns_registered_codec() {
        let mut table = CodecTable::new();
        assert!(!table.insert::<chrono::NaiveDate, _>(LocalDateCodec));

        let codec = table.get::<chrono::NaiveDate>().unwrap();
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(codec.encode(&date).unwrap(), WireValue::text("2024-03-15"));
    }

    #[test]
    fn test_last_registration_wins() {
        let mut table = CodecTable::new();
        table.insert::<Year, _>(YearCodec);
        table.register_module(&YearModule);

        let year = Year::new(2024).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get::<Year>().unwrap().encode(&year).unwrap(), WireValue::Integer(0));
    }

    #[test]
    fn test_extend_counts_replacements() {
        let mut first = CodecTable::new();
        first.insert::<Year, _>(YearCodec);

        let mut second = CodecTable::new();
        second.insert::<Year, _>(ZeroYearCodec);
        second.insert::<chrono::NaiveDate, _>(LocalDateCodec);

        assert_eq!(first.extend(second), 1);
        assert_eq!(first.len(), 2);
    }
}
