//! Error types for codecs, the host mapper and configuration

use thiserror::Error;

/// Failure while converting a single value to or from its wire form
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Malformed {type_name} value {value}: {reason}")]
    MalformedWireValue {
        type_name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Cannot encode {type_name} value {value}: {reason}")]
    Unrepresentable {
        type_name: &'static str,
        value: String,
        reason: String,
    },
}

impl CodecError {
    pub fn malformed(
        type_name: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        CodecError::MalformedWireValue {
            type_name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn unrepresentable(
        type_name: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        CodecError::Unrepresentable {
            type_name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns true for decode-side failures
    pub fn is_malformed(&self) -> bool {
        matches!(self, CodecError::MalformedWireValue { .. })
    }
}

/// Errors raised by the host mapper
#[derive(Debug, Error)]
pub enum MapperError {
    #[error("No codec registered for {0}")]
    NoCodec(&'static str),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    #[error("Unexpected JSON {found} for {type_name}")]
    UnexpectedType {
        type_name: &'static str,
        found: &'static str,
    },
}

/// Errors raised while loading module configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid {key}: {message}")]
    Invalid {
        key: &'static str,
        message: String,
    },
}
