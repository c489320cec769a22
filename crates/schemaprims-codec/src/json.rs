use schemaprims_model::{Result, Schema, SchemaError};
use serde_json::Value;

use crate::config::CodecConfig;
use crate::decode::from_value_with_config;
use crate::encode::to_value_with_config;

/// Decode a schema from JSON text.
pub fn from_json_str(text: &str) -> Result<Schema> {
    from_json_str_with_config(text, &CodecConfig::default())
}

/// Decode a schema from JSON text with explicit config.
pub fn from_json_str_with_config(text: &str, config: &CodecConfig) -> Result<Schema> {
    let value: Value = serde_json::from_str(text)
        .map_err(|err| SchemaError::malformed("", format!("invalid JSON: {err}")))?;
    from_value_with_config(&value, config)
}

/// Decode a schema from JSON bytes.
pub fn from_json_slice(bytes: &[u8]) -> Result<Schema> {
    from_json_slice_with_config(bytes, &CodecConfig::default())
}

/// Decode a schema from JSON bytes with explicit config.
pub fn from_json_slice_with_config(bytes: &[u8], config: &CodecConfig) -> Result<Schema> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|err| SchemaError::malformed("", format!("invalid JSON: {err}")))?;
    from_value_with_config(&value, config)
}

/// Encode a schema as compact JSON text.
pub fn to_json_string(schema: &Schema) -> Result<String> {
    to_json_string_with_config(schema, &CodecConfig::default())
}

/// Encode a schema as compact JSON text with explicit config.
pub fn to_json_string_with_config(schema: &Schema, config: &CodecConfig) -> Result<String> {
    serde_json::to_string(&to_value_with_config(schema, config))
        .map_err(|err| SchemaError::EncodeFailed(err.to_string()))
}

/// Encode a schema as indented JSON text.
pub fn to_json_string_pretty(schema: &Schema) -> Result<String> {
    to_json_string_pretty_with_config(schema, &CodecConfig::default())
}

/// Encode a schema as indented JSON text with explicit config.
pub fn to_json_string_pretty_with_config(schema: &Schema, config: &CodecConfig) -> Result<String> {
    serde_json::to_string_pretty(&to_value_with_config(schema, config))
        .map_err(|err| SchemaError::EncodeFailed(err.to_string()))
}
