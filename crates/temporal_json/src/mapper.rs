//! Reference host mapper
//!
//! A small JSON data-binding host: it owns a codec table plus the feature
//! flags temporal codecs rely on (null/empty omission, empty-as-null, unknown
//! property handling), and reads and writes flat records through
//! [`JsonRecord`]. It dispatches only to registered codecs and has no
//! built-in handling of its own for temporal types.

use serde_json::{Map, Value};
use std::any::type_name;
use std::collections::HashSet;

use crate::error::MapperError;
use crate::registry::{CodecTable, Module, ModuleHost};
use crate::wire::{json_kind, WireValue};

/// Which fields are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Inclusion {
    /// Absent values are written as `null`
    #[default]
    Always,
    /// Absent values are omitted
    NonNull,
    /// Absent values and empty strings are omitted
    NonEmpty,
}

/// Host behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapperFeatures {
    pub inclusion: Inclusion,
    /// Fail when a document carries a field the record does not read
    pub fail_on_unknown_properties: bool,
    /// Read `""` as an absent value before any codec sees it
    pub accept_empty_string_as_null: bool,
}

impl Default for MapperFeatures {
    fn default() -> Self {
        Self {
            inclusion: Inclusion::Always,
            fail_on_unknown_properties: true,
            accept_empty_string_as_null: false,
        }
    }
}

impl MapperFeatures {
    /// Omits null and empty fields, ignores unknown fields and reads empty
    /// strings as absent
    pub fn lenient() -> Self {
        Self {
            inclusion: Inclusion::NonEmpty,
            fail_on_unknown_properties: false,
            accept_empty_string_as_null: true,
        }
    }
}

/// A flat record the mapper can write and read
pub trait JsonRecord: Sized {
    fn write_fields(&self, writer: &mut RecordWriter<'_>) -> Result<(), MapperError>;

    fn read_fields(reader: &mut RecordReader<'_>) -> Result<Self, MapperError>;
}

/// JSON host with a type-keyed codec table
#[derive(Debug, Default)]
pub struct JsonMapper {
    features: MapperFeatures,
    codecs: CodecTable,
}

impl JsonMapper {
    pub fn new(features: MapperFeatures) -> Self {
        Self {
            features,
            codecs: CodecTable::new(),
        }
    }

    /// Registers a module and returns the mapper
    pub fn with_module(mut self, module: &dyn Module) -> Self {
        self.register_module(module);
        self
    }

    pub fn features(&self) -> &MapperFeatures {
        &self.features
    }

    pub fn codecs(&self) -> &CodecTable {
        &self.codecs
    }

    /// Encodes a value through its registered codec
    pub fn encode<T: 'static>(&self, value: &T) -> Result<Value, MapperError> {
        let codec = self
            .codecs
            .get::<T>()
            .ok_or(MapperError::NoCodec(type_name::<T>()))?;
        Ok(codec.encode(value)?.into())
    }

    /// Decodes a JSON node through the registered codec
    ///
    /// `null` is absent. Under `accept_empty_string_as_null` so is `""`, and
    /// the codec is not consulted for it.
    pub fn decode<T: 'static>(&self, value: &Value) -> Result<Option<T>, MapperError> {
        let codec = self
            .codecs
            .get::<T>()
            .ok_or(MapperError::NoCodec(type_name::<T>()))?;
        if value.is_null() {
            return Ok(None);
        }
        let wire = WireValue::from_json(value, type_name::<T>())?;
        if self.features.accept_empty_string_as_null && wire.is_empty_text() {
            return Ok(None);
        }
        Ok(Some(codec.decode(&wire)?))
    }

    /// Writes a record to a JSON object
    pub fn write_record<R: JsonRecord>(&self, record: &R) -> Result<Value, MapperError> {
        let mut writer = RecordWriter {
            mapper: self,
            fields: Map::new(),
        };
        record.write_fields(&mut writer)?;
        tracing::debug!(
            record = type_name::<R>(),
            fields = writer.fields.len(),
            "Record written"
        );
        Ok(Value::Object(writer.fields))
    }

    pub fn write_record_as_string<R: JsonRecord>(&self, record: &R) -> Result<String, MapperError> {
        Ok(serde_json::to_string(&self.write_record(record)?)?)
    }

    /// Reads a record from a JSON object
    pub fn read_record<R: JsonRecord>(&self, value: &Value) -> Result<R, MapperError> {
        let fields = value
            .as_object()
            .ok_or_else(|| MapperError::NotAnObject(json_kind(value)))?;
        let mut reader = RecordReader {
            mapper: self,
            fields,
            consumed: HashSet::new(),
        };
        let record = R::read_fields(&mut reader)?;
        reader.finish()?;
        tracing::debug!(record = type_name::<R>(), fields = fields.len(), "Record read");
        Ok(record)
    }

    pub fn read_record_from_str<R: JsonRecord>(&self, json: &str) -> Result<R, MapperError> {
        let value: Value = serde_json::from_str(json)?;
        self.read_record(&value)
    }
}

impl ModuleHost for JsonMapper {
    fn register_module(&mut self, module: &dyn Module) {
        self.codecs.register_module(module);
    }
}

/// Collects the fields of a record being written
pub struct RecordWriter<'a> {
    mapper: &'a JsonMapper,
    fields: Map<String, Value>,
}

impl RecordWriter<'_> {
    /// Writes a temporal field through its codec
    pub fn temporal<T: 'static>(
        &mut self,
        name: &str,
        value: Option<&T>,
    ) -> Result<&mut Self, MapperError> {
        match value {
            Some(value) => {
                let encoded = self.mapper.encode(value)?;
                self.put(name, encoded);
            }
            None => self.put_absent(name),
        }
        Ok(self)
    }

    /// Writes a plain string field
    pub fn string(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        match value {
            Some(text) => self.put(name, Value::String(text.to_string())),
            None => self.put_absent(name),
        }
        self
    }

    fn put(&mut self, name: &str, value: Value) {
        let empty = matches!(&value, Value::String(text) if text.is_empty());
        if empty && self.mapper.features.inclusion == Inclusion::NonEmpty {
            return;
        }
        self.fields.insert(name.to_string(), value);
    }

    fn put_absent(&mut self, name: &str) {
        if self.mapper.features.inclusion == Inclusion::Always {
            self.fields.insert(name.to_string(), Value::Null);
        }
    }
}

/// Hands out the fields of a record being read
pub struct RecordReader<'a> {
    mapper: &'a JsonMapper,
    fields: &'a Map<String, Value>,
    consumed: HashSet<String>,
}

impl RecordReader<'_> {
    /// Reads a temporal field; missing, `null` and (if enabled) `""` are absent
    pub fn temporal<T: 'static>(&mut self, name: &str) -> Result<Option<T>, MapperError> {
        self.consumed.insert(name.to_string());
        match self.fields.get(name) {
            Some(value) => self.mapper.decode(value),
            None => Ok(None),
        }
    }

    /// Reads a plain string field
    pub fn string(&mut self, name: &str) -> Result<Option<String>, MapperError> {
        self.consumed.insert(name.to_string());
        match self.fields.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text))
                if text.is_empty() && self.mapper.features.accept_empty_string_as_null =>
            {
                Ok(None)
            }
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(other) => Err(MapperError::UnexpectedType {
                type_name: "String",
                found: json_kind(other),
            }),
        }
    }

    fn finish(&self) -> Result<(), MapperError> {
        let unknown = self.fields.keys().find(|key| !self.consumed.contains(key.as_str()));
        match unknown {
            Some(key) if self.mapper.features.fail_on_unknown_properties => {
                Err(MapperError::UnknownProperty(key.clone()))
            }
            Some(key) => {
                tracing::debug!(property = %key, "Ignoring unknown property");
                Ok(())
            }
            None => Ok(()),
        }
    }
}
